//! Sections of the main layout and the permission each one needs.

use super::auth::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Route segment under `/principal/`.
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// `None` for sections every logged-in user sees.
    pub permission: Option<&'static str>,
}

const fn section(
    path: &'static str,
    label: &'static str,
    icon: &'static str,
    permission: Option<&'static str>,
) -> Section {
    Section {
        path,
        label,
        icon,
        permission,
    }
}

pub const SECTIONS: [Section; 15] = [
    section("clientes", "Clientes", "users", Some("core.view_client")),
    section("agencias", "Agencias", "store", Some("core.view_agency")),
    section("almacenes", "Almacenes", "warehouse", Some("core.view_warehouse")),
    section("categorias", "Categorias", "tag", Some("core.view_category")),
    section("lotes", "Lotes", "layers", Some("core.view_batch")),
    section("productos", "Productos", "package", Some("core.view_product")),
    section("stock", "Stock", "database", Some("core.view_productstock")),
    section("proveedores", "Proveedores", "truck", Some("core.view_supplier")),
    section("canales-venta", "Canales de Venta", "share", Some("core.view_sellingchannel")),
    section("compras", "Compras", "shopping-cart", Some("core.view_purchase")),
    section("ventas", "Ventas", "receipt", Some("core.view_sale")),
    section("pagos", "Pagos", "wallet", Some("core.view_payment")),
    section("entradas", "Entradas", "log-in", Some("core.view_entry")),
    section("salidas", "Salidas", "log-out", Some("core.view_output")),
    section("reportes", "Reportes", "file-text", None),
];

/// Sections shown in the sidebar for this user, in menu order.
pub fn visible_sections(session: &Session) -> Vec<Section> {
    SECTIONS
        .iter()
        .filter(|s| s.permission.map_or(true, |p| session.has_permission(p)))
        .copied()
        .collect()
}

pub fn find_section(path: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_follows_permissions() {
        let session = Session {
            permissions: vec!["core.view_client".into(), "core.view_sale".into()],
            ..Default::default()
        };
        let paths: Vec<&str> = visible_sections(&session).iter().map(|s| s.path).collect();
        assert_eq!(paths, vec!["clientes", "ventas", "reportes"]);
    }

    #[test]
    fn test_superuser_sees_every_section() {
        let session = Session {
            is_superuser: true,
            ..Default::default()
        };
        assert_eq!(visible_sections(&session).len(), SECTIONS.len());
    }

    #[test]
    fn test_find_section() {
        assert_eq!(
            find_section("canales-venta").map(|s| s.label),
            Some("Canales de Venta")
        );
        assert!(find_section("dashboard").is_none());
    }
}
