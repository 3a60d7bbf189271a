pub mod ui;

pub const SECTION: &str = "categorias";
