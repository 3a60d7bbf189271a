pub mod login;
pub mod refresh;

use serde::{Deserialize, Serialize};

pub use login::{LoginForm, LOGIN_FAILED};
pub use refresh::{RefreshPolicy, RefreshStep};

pub const SESSION_EXPIRED: &str = "Sesión expirada";

/// sessionStorage keys.
pub mod keys {
    pub const PERMISSIONS: &str = "permissions";
    pub const NAME: &str = "name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const IS_SUPERUSER: &str = "is_superuser";
    pub const USER_TYPE: &str = "user_type";
    pub const AGENCY: &str = "agency";

    pub const SESSION: [&str; 6] = [PERMISSIONS, NAME, LAST_NAME, EMAIL, IS_SUPERUSER, USER_TYPE];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful login. Tokens travel as HttpOnly cookies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub user_type: Option<i32>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Cashier,
    Warehouse,
    Seller,
    Administrator,
}

impl UserType {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(UserType::Cashier),
            2 => Some(UserType::Warehouse),
            3 => Some(UserType::Seller),
            4 => Some(UserType::Administrator),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::Cashier => "Cajero",
            UserType::Warehouse => "Almacenero",
            UserType::Seller => "Vendedor",
            UserType::Administrator => "Administrador",
        }
    }
}

/// Logged-in user as kept for the lifetime of the tab.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub is_superuser: bool,
    pub user_type: Option<i32>,
    pub permissions: Vec<String>,
}

impl From<LoginResponse> for Session {
    fn from(r: LoginResponse) -> Self {
        Self {
            name: r.name,
            last_name: r.last_name,
            email: r.email,
            is_superuser: r.is_superuser,
            user_type: r.user_type,
            permissions: r.permissions,
        }
    }
}

impl Session {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.last_name).trim().to_string()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.user_type.and_then(UserType::from_code)
    }

    /// Permissions come as `app.codename` (`core.view_client`) or bare
    /// codenames. A bare codename on either side matches any app; two app
    /// labels must agree. Superusers pass every check.
    pub fn has_permission(&self, permission: &str) -> bool {
        if self.is_superuser {
            return true;
        }
        let wanted = split_permission(permission);
        self.permissions.iter().any(|held| {
            let held = split_permission(held);
            held.1 == wanted.1
                && match (held.0, wanted.0) {
                    (Some(a), Some(b)) => a == b,
                    _ => true,
                }
        })
    }

    /// Key/value pairs to persist.
    pub fn to_storage(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                keys::PERMISSIONS,
                serde_json::to_string(&self.permissions).unwrap_or_else(|_| "[]".into()),
            ),
            (keys::NAME, self.name.clone()),
            (keys::LAST_NAME, self.last_name.clone()),
            (keys::EMAIL, self.email.clone()),
            (keys::IS_SUPERUSER, self.is_superuser.to_string()),
            (
                keys::USER_TYPE,
                self.user_type.map(|t| t.to_string()).unwrap_or_default(),
            ),
        ]
    }

    /// Rebuilds a session from storage; `None` when no one is logged in.
    pub fn from_storage(get: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let permissions = get(keys::PERMISSIONS)?;
        Some(Self {
            permissions: serde_json::from_str(&permissions).unwrap_or_default(),
            name: get(keys::NAME).unwrap_or_default(),
            last_name: get(keys::LAST_NAME).unwrap_or_default(),
            email: get(keys::EMAIL).unwrap_or_default(),
            is_superuser: get(keys::IS_SUPERUSER).as_deref() == Some("true"),
            user_type: get(keys::USER_TYPE).and_then(|t| t.parse().ok()),
        })
    }
}

/// `core.view_client` into `(Some("core"), "view_client")`.
fn split_permission(permission: &str) -> (Option<&str>, &str) {
    match permission.split_once('.') {
        Some((app, codename)) => (Some(app), codename),
        None => (None, permission),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn session(perms: &[&str]) -> Session {
        Session {
            name: "Ana".into(),
            last_name: "Quispe".into(),
            permissions: perms.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_permission_forms() {
        let s = session(&["core.view_client", "add_sale"]);
        assert!(s.has_permission("core.view_client"));
        assert!(s.has_permission("view_client"));
        assert!(s.has_permission("sale.add_sale"));
        assert!(!s.has_permission("core.view_agency"));
    }

    #[test]
    fn test_app_labels_must_agree() {
        let s = session(&["purchase.view_x"]);
        assert!(!s.has_permission("core.view_x"));
        assert!(s.has_permission("purchase.view_x"));
        assert!(s.has_permission("view_x"));
    }

    #[test]
    fn test_superuser_sees_everything() {
        let s = Session {
            is_superuser: true,
            ..Default::default()
        };
        assert!(s.has_permission("core.delete_everything"));
    }

    #[test]
    fn test_storage_round_trip() {
        let original = Session {
            user_type: Some(3),
            is_superuser: false,
            email: "ana@tienda.bo".into(),
            ..session(&["core.view_agency"])
        };
        let stored: HashMap<&str, String> = original.to_storage().into_iter().collect();
        let restored = Session::from_storage(|k| stored.get(k).cloned()).expect("session");
        assert_eq!(restored, original);
        assert_eq!(restored.user_type(), Some(UserType::Seller));
        assert_eq!(restored.display_name(), "Ana Quispe");
    }

    #[test]
    fn test_empty_storage_is_logged_out() {
        assert!(Session::from_storage(|_| None).is_none());
    }

    #[test]
    fn test_login_response_tolerates_missing_fields() {
        let body = r#"{"name": "Ana", "is_superuser": true, "permissions": []}"#;
        let parsed: LoginResponse = serde_json::from_str(body).expect("parse");
        assert!(parsed.is_superuser);
        assert_eq!(parsed.user_type, None);
    }
}
