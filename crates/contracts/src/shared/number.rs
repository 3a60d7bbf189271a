//! Money and quantity helpers.
//!
//! Decimal columns come back from the API as strings (`"12.50"`) while
//! computed fields are plain numbers, so the deserializers accept both.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn into_f64(self) -> Option<f64> {
        match self {
            NumberOrString::Number(n) => Some(n),
            NumberOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}

pub fn flexible<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(NumberOrString::deserialize(deserializer)?
        .into_f64()
        .unwrap_or_default())
}

pub fn flexible_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?.and_then(NumberOrString::into_f64))
}

/// Identifier-like columns (invoice numbers) that may come back as either
/// JSON type.
pub fn flexible_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => format_quantity(n),
        Some(NumberOrString::Text(s)) => s,
        None => String::new(),
    })
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// Integers without decimals, everything else with two.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format_amount(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "flexible")]
        total: f64,
        #[serde(default, deserialize_with = "flexible_opt")]
        price: Option<f64>,
    }

    #[test]
    fn test_accepts_strings_and_numbers() {
        let row: Row = serde_json::from_str(r#"{"total": "12.50", "price": 3}"#).expect("parse");
        assert_eq!(row.total, 12.5);
        assert_eq!(row.price, Some(3.0));

        let row: Row = serde_json::from_str(r#"{"total": 7, "price": null}"#).expect("parse");
        assert_eq!(row.total, 7.0);
        assert_eq!(row.price, None);

        let row: Row = serde_json::from_str(r#"{"total": "n/a"}"#).expect("parse");
        assert_eq!(row.total, 0.0);
    }

    #[test]
    fn test_text_from_number() {
        #[derive(Deserialize)]
        struct Invoice {
            #[serde(deserialize_with = "flexible_text")]
            number: String,
        }
        let row: Invoice = serde_json::from_str(r#"{"number": 1045}"#).expect("parse");
        assert_eq!(row.number, "1045");
        let row: Invoice = serde_json::from_str(r#"{"number": "A-77"}"#).expect("parse");
        assert_eq!(row.number, "A-77");
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_amount(10.0), "10.00");
        assert_eq!(format_amount(2.346), "2.35");
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(2.5), "2.50");
    }
}
