pub mod ui;

pub const SECTION: &str = "entradas";
