pub mod ui;

pub const SECTION: &str = "compras";
