pub mod ui;

pub const SECTION: &str = "canales-venta";
