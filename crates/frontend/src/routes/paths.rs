//! URLs of the pages. Section pages live under `/principal/{section}`.

pub const LOGIN: &str = "/";
pub const SELECT_AGENCY: &str = "/seleccionar_agencia";
pub const MAIN: &str = "/principal";
pub const DASHBOARD: &str = "/principal/dashboard";

pub const ADD: &str = "agregar";
pub const EDIT: &str = "editar";
pub const INFO: &str = "info";
pub const PERFORM: &str = "realizar";
pub const ADD_ENTRY: &str = "agregar_entrada";
pub const ADD_OUTPUT: &str = "agregar_salida";
pub const ADD_PAYMENT: &str = "agregar_pago";
pub const DAMAGED: &str = "danado";

pub fn list(section: &str) -> String {
    format!("{MAIN}/{section}")
}

pub fn add(section: &str) -> String {
    format!("{MAIN}/{section}/{ADD}")
}

pub fn edit(section: &str, id: i64) -> String {
    action(section, EDIT, id)
}

/// `/principal/{section}/{action}/{id}`
pub fn action(section: &str, action: &str, id: i64) -> String {
    format!("{MAIN}/{section}/{action}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_paths() {
        assert_eq!(list("clientes"), "/principal/clientes");
        assert_eq!(add("canales-venta"), "/principal/canales-venta/agregar");
        assert_eq!(edit("agencias", 4), "/principal/agencias/editar/4");
        assert_eq!(action("compras", ADD_ENTRY, 7), "/principal/compras/agregar_entrada/7");
    }
}
