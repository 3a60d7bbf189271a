//! Fixed option sets and the `{value, label}` shape of choice endpoints.

use serde::{Deserialize, Serialize};

/// One option of an autocomplete or select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Row of an `.../all` endpoint: just enough to populate a select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

impl From<NamedRef> for Choice {
    fn from(r: NamedRef) -> Self {
        Choice::new(r.id.to_string(), r.name)
    }
}

pub const TRANSACTION_TYPES: [(&str, &str); 2] = [("contado", "Contado"), ("credito", "Crédito")];

pub const PAYMENT_METHODS: [(&str, &str); 3] =
    [("efectivo", "Efectivo"), ("tarjeta", "Tarjeta"), ("qr", "QR")];

pub const CLIENT_TYPES: [(&str, &str); 3] = [
    ("distribution", "Distribución"),
    ("showroom", "Showroom"),
    ("projects", "Proyectos"),
];

pub fn label_for(options: &[(&'static str, &'static str)], value: &str) -> String {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn to_choices(options: &[(&'static str, &'static str)]) -> Vec<Choice> {
    options.iter().map(|(v, l)| Choice::new(*v, *l)).collect()
}

pub fn find_choice<'a>(choices: &'a [Choice], value: &str) -> Option<&'a Choice> {
    choices.iter().find(|c| c.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup_falls_back_to_value() {
        assert_eq!(label_for(&TRANSACTION_TYPES, "credito"), "Crédito");
        assert_eq!(label_for(&PAYMENT_METHODS, "cheque"), "cheque");
    }

    #[test]
    fn test_named_ref_to_choice() {
        let choice: Choice = NamedRef {
            id: 4,
            name: "Tienda".into(),
        }
        .into();
        assert_eq!(choice, Choice::new("4", "Tienda"));
    }
}
