pub mod ui;

/// Route segment under `/principal/`.
pub const SECTION: &str = "agencias";
