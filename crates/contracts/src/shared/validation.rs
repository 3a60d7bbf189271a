//! Field predicates used by the form reducers.
//!
//! Every predicate takes the raw input text and answers `true` when the value
//! is acceptable. None of them panic; anything that fails to parse is invalid.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+@[a-z]+\.[a-z]{2,3}").expect("email pattern"));

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]{1,10}$").expect("digits pattern"));

static COST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,8}(\.\d{1,2})?$").expect("cost pattern"));

static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_./-]*$").expect("code pattern"));

pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn validate_select_input(value: &str) -> bool {
    !value.is_empty()
}

pub fn validate_email_length(value: &str) -> bool {
    trimmed_len(value) > 0
}

pub fn validate_password_length(value: &str) -> bool {
    trimmed_len(value) > 0
}

/// Between 3 and 100 characters once surrounding whitespace is removed.
pub fn validate_name_length(value: &str) -> bool {
    let len = trimmed_len(value);
    len > 2 && len <= 100
}

pub fn validate_last_name_length(value: &str) -> bool {
    validate_name_length(value)
}

pub fn validate_phone_number(value: &str) -> bool {
    let len = trimmed_len(value);
    len > 6 && len <= 20 && DIGITS_RE.is_match(value.trim())
}

pub fn validate_ci_number(value: &str) -> bool {
    trimmed_len(value) > 6 && DIGITS_RE.is_match(value.trim())
}

pub fn validate_address_length(value: &str) -> bool {
    let len = trimmed_len(value);
    len > 10 && len <= 200
}

pub fn validate_register_number_length(value: &str) -> bool {
    let len = trimmed_len(value);
    len > 3 && len <= 20
}

/// Up to eight integer digits, at most two decimals, strictly positive.
pub fn validate_cost(value: &str) -> bool {
    COST_RE.is_match(value) && parse_number(value).is_some_and(|n| n > 0.0)
}

pub fn validate_percentage(value: &str) -> bool {
    parse_number(value).is_some_and(|n| (0.0..=100.0).contains(&n))
}

/// Zero is accepted; blanks and non-numeric text are not.
pub fn validate_positive_number(value: &str) -> bool {
    parse_number(value).is_some_and(|n| n >= 0.0)
}

pub fn validate_quantity(value: &str) -> bool {
    parse_number(value).is_some_and(|n| n > 0.0)
}

pub fn validate_code(value: &str) -> bool {
    let len = trimmed_len(value);
    len > 0 && len <= 30 && CODE_RE.is_match(value.trim())
}

pub fn validate_unit_of_measurement(value: &str) -> bool {
    let len = trimmed_len(value);
    len > 0 && len <= 20
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn validate_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Blank is allowed; anything else has to be a real date.
pub fn validate_optional_date(value: &str) -> bool {
    value.trim().is_empty() || validate_date(value)
}

/// Operation dates must be the current day.
pub fn validate_actual_date(value: &str, today: NaiveDate) -> bool {
    parse_date(value).is_some_and(|d| d == today)
}

/// Payment dates: any real date up to today.
pub fn validate_not_after(value: &str, today: NaiveDate) -> bool {
    parse_date(value).is_some_and(|d| d <= today)
}

pub fn validate_not_future(value: &str) -> bool {
    validate_not_after(value, chrono::Local::now().date_naive())
}

/// Same as [`validate_actual_date`] against the local clock.
pub fn validate_today(value: &str) -> bool {
    validate_actual_date(value, chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_bounds() {
        assert!(!validate_name_length(""));
        assert!(!validate_name_length("ab"));
        assert!(!validate_name_length("   ab   "));
        assert!(validate_name_length("abc"));
        assert!(validate_name_length("  abc  "));
        assert!(validate_name_length(&"x".repeat(100)));
        assert!(!validate_name_length(&"x".repeat(101)));
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert!(validate_name_length("Ñuñ"));
        assert!(validate_name_length(&"á".repeat(100)));
    }

    #[test]
    fn test_email() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("ventas2@empresa.com"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a@b"));
    }

    #[test]
    fn test_positive_number() {
        assert!(validate_positive_number("5"));
        assert!(validate_positive_number("0"));
        assert!(validate_positive_number("12.75"));
        assert!(!validate_positive_number("-1"));
        assert!(!validate_positive_number("abc"));
        assert!(!validate_positive_number(""));
        assert!(!validate_positive_number("NaN"));
        assert!(!validate_positive_number("inf"));
    }

    #[test]
    fn test_quantity_rejects_zero() {
        assert!(validate_quantity("1"));
        assert!(!validate_quantity("0"));
        assert!(!validate_quantity("-3"));
    }

    #[test]
    fn test_phone_and_ci() {
        assert!(validate_phone_number("7654321"));
        assert!(validate_phone_number(" 70012345 "));
        assert!(!validate_phone_number("123456"));
        assert!(!validate_phone_number("76a4321"));
        assert!(validate_ci_number("1234567"));
        assert!(!validate_ci_number("12345"));
    }

    #[test]
    fn test_address_length() {
        assert!(!validate_address_length("Calle 1"));
        assert!(validate_address_length("Av. Siempre Viva 123"));
        assert!(!validate_address_length(&"x".repeat(201)));
    }

    #[test]
    fn test_cost() {
        assert!(validate_cost("10"));
        assert!(validate_cost("10.5"));
        assert!(validate_cost("10.55"));
        assert!(!validate_cost("10.555"));
        assert!(!validate_cost("0"));
        assert!(!validate_cost("123456789"));
    }

    #[test]
    fn test_percentage() {
        assert!(validate_percentage("0"));
        assert!(validate_percentage("100"));
        assert!(!validate_percentage("100.1"));
        assert!(!validate_percentage("x"));
    }

    #[test]
    fn test_code() {
        assert!(validate_code("PRD-001"));
        assert!(!validate_code(""));
        assert!(!validate_code("PRD 001"));
        assert!(!validate_code(&"A".repeat(31)));
    }

    #[test]
    fn test_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).expect("date");
        assert!(validate_actual_date("2024-05-10", today));
        assert!(!validate_actual_date("2024-05-09", today));
        assert!(!validate_actual_date("10/05/2024", today));
        assert!(validate_not_after("2024-05-01", today));
        assert!(!validate_not_after("2024-05-11", today));
        assert!(validate_optional_date(""));
        assert!(validate_optional_date("2024-02-29"));
        assert!(!validate_optional_date("2023-02-29"));
    }
}
