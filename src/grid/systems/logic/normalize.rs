// src/grid/systems/logic/normalize.rs
//! Input normalization applied when cell edits and column drafts commit.
//! Policy: malformed numeric/url input coerces to a safe default, it never
//! errors.

use chrono::NaiveDate;

use crate::grid::definitions::{CellValue, ColumnDefinition, ColumnType};

/// Derives a column key from a display header: lower-case, whitespace to
/// underscores, everything outside `[a-z0-9_]` stripped.
pub fn slugify_key(header: &str) -> String {
    let mut slug = String::with_capacity(header.len());
    for ch in header.trim().to_lowercase().chars() {
        if ch.is_whitespace() {
            slug.push('_');
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch);
        }
    }
    slug
}

/// Strips everything but digits, sign and decimal point, so "$1,234.50"
/// and "1 234,5 EUR"-style inputs survive a parse attempt.
pub fn strip_numeric(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

pub fn parse_numeric(raw: &str) -> Option<f64> {
    let stripped = strip_numeric(raw);
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok()
}

/// Canonical currency rule: `$` prefix, comma thousands separators, exactly
/// two decimals ("1234.5" -> "$1,234.50").
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}

/// Prefixes `https://` when the input looks like a bare domain with no
/// scheme. Anything else passes through untouched.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains("://") {
        return trimmed.to_string();
    }
    let looks_like_domain = trimmed.contains('.') && !trimmed.contains(char::is_whitespace);
    if looks_like_domain {
        format!("https://{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

pub fn parse_checkbox(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "1" | "on" | "checked"
    )
}

/// Dates are stored as ISO `YYYY-MM-DD`; `%m/%d/%Y` is accepted on input.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%m/%d/%Y"))
        .ok()
}

/// Display form for stored date values: "Jan 5, 2025". Unparseable values
/// render raw.
pub fn format_date_display(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Type-specific normalization applied at commit time.
pub fn normalize_cell(column: &ColumnDefinition, raw: &str) -> CellValue {
    match column.data_type {
        ColumnType::Number => match parse_numeric(raw) {
            Some(n) => CellValue::Number(n),
            None => CellValue::default_for(ColumnType::Number),
        },
        ColumnType::Currency => match parse_numeric(raw) {
            Some(n) => CellValue::Text(format_currency(n)),
            None => CellValue::default_for(ColumnType::Currency),
        },
        ColumnType::Url => CellValue::Text(normalize_url(raw)),
        ColumnType::Checkbox => CellValue::Bool(parse_checkbox(raw)),
        ColumnType::Date => match parse_date(raw) {
            Some(date) => CellValue::Text(date.format("%Y-%m-%d").to_string()),
            None => CellValue::Text(raw.trim().to_string()),
        },
        ColumnType::Text | ColumnType::Status | ColumnType::Select => {
            CellValue::Text(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_derives_snake_case_keys() {
        assert_eq!(slugify_key("Deal Size"), "deal_size");
        assert_eq!(slugify_key("  Close  Date "), "close__date");
        assert_eq!(slugify_key("ARR ($)"), "arr_");
        assert_eq!(slugify_key("%%%"), "");
    }

    #[test]
    fn currency_formats_with_separators_and_cents() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-9876.543), "-$9,876.54");
        assert_eq!(format_currency(999.0), "$999.00");
    }

    #[test]
    fn numeric_parse_strips_decoration() {
        assert_eq!(parse_numeric("$1,234.50"), Some(1234.5));
        assert_eq!(parse_numeric("  42 "), Some(42.0));
        assert_eq!(parse_numeric("n/a"), None);
    }

    #[test]
    fn bare_domains_gain_https_scheme() {
        assert_eq!(normalize_url("acme.example.com"), "https://acme.example.com");
        assert_eq!(normalize_url("http://acme.io"), "http://acme.io");
        assert_eq!(normalize_url("not a url"), "not a url");
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn invalid_numbers_coerce_to_empty_default() {
        let number = ColumnDefinition::new("n", "N", ColumnType::Number);
        assert_eq!(normalize_cell(&number, "abc"), CellValue::Text(String::new()));
        assert_eq!(normalize_cell(&number, "12.5"), CellValue::Number(12.5));

        let currency = ColumnDefinition::new("c", "C", ColumnType::Currency);
        assert_eq!(
            normalize_cell(&currency, "1234.5"),
            CellValue::Text("$1,234.50".into())
        );
        assert_eq!(normalize_cell(&currency, "??"), CellValue::Text(String::new()));
    }

    #[test]
    fn dates_parse_and_display() {
        assert_eq!(format_date_display("2025-01-05"), "Jan 5, 2025");
        assert_eq!(format_date_display("12/31/2024"), "Dec 31, 2024");
        assert_eq!(format_date_display("soon"), "soon");
    }
}
