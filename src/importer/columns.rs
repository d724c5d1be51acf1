//! Column resolution and value coercion shared by every importer

use chrono::{NaiveDate, NaiveDateTime};

use super::loader::{CellValue, Row};

const TRUTHY: &[&str] = &["yes", "true", "1", "y", "t"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y%m%d", "%d-%m-%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// First alias (in order) whose cell is present and not missing
pub fn resolve<'r>(row: &'r Row, aliases: &[&str]) -> Option<&'r CellValue> {
    aliases
        .iter()
        .filter_map(|alias| row.get(alias))
        .find(|value| !value.is_missing())
}

/// [`resolve`] as a trimmed, non-empty string
pub fn resolve_text(row: &Row, aliases: &[&str]) -> Option<String> {
    resolve(row, aliases).and_then(CellValue::to_text)
}

/// Missing is false; otherwise only the truthy spellings count.
pub fn parse_bool(value: Option<&CellValue>) -> bool {
    value
        .and_then(CellValue::to_text)
        .map(|text| TRUTHY.contains(&text.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Integer or decimal (truncated); `None` when missing or unparsable
pub fn parse_opt_int(value: Option<&CellValue>) -> Option<i64> {
    match value? {
        CellValue::Int(v) => Some(*v),
        CellValue::Float(v) if v.is_finite() => Some(v.trunc() as i64),
        CellValue::Bool(b) => Some(i64::from(*b)),
        CellValue::Text(s) => s.parse::<i64>().ok().or_else(|| {
            s.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64)
        }),
        _ => None,
    }
}

/// Never fails: missing or unparsable values give `default`
pub fn parse_int(value: Option<&CellValue>, default: i64) -> i64 {
    parse_opt_int(value).unwrap_or(default)
}

/// [`parse_opt_int`] narrowed to a column-sized integer
pub fn parse_opt_i32(value: Option<&CellValue>) -> Option<i32> {
    parse_opt_int(value).and_then(|v| i32::try_from(v).ok())
}

/// Spreadsheet date cells or common textual forms; anything else is `None`
pub fn parse_date(value: Option<&CellValue>) -> Option<NaiveDate> {
    match value? {
        CellValue::DateTime(dt) => Some(dt.date()),
        CellValue::Text(s) => DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                    .map(|dt| dt.date())
            }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::loader::load_rows;

    fn text(s: &str) -> CellValue {
        CellValue::text(s)
    }

    #[test]
    fn test_resolve_prefers_first_present_alias() {
        let rows = load_rows("pcs.csv", b"name,pc_name,device_name\n,PC-02,PC-01\n").unwrap();
        let row = &rows[0];
        assert_eq!(
            resolve_text(row, &["device_name", "name", "pc_name"]),
            Some("PC-01".to_string())
        );
        // blank `name` is skipped in favour of the next alias
        assert_eq!(resolve_text(row, &["name", "pc_name"]), Some("PC-02".to_string()));
        assert_eq!(resolve_text(row, &["serial"]), None);
    }

    #[test]
    fn test_resolve_uses_normalized_headers() {
        let rows = load_rows("pcs.csv", b"PC Name (COMP ID)\nCOMP-7\n").unwrap();
        assert_eq!(
            resolve_text(&rows[0], &["device_name", "pc_name_comp_id"]),
            Some("COMP-7".to_string())
        );
    }

    #[test]
    fn test_parse_bool() {
        for truthy in ["yes", "TRUE", " y ", "1", "t"] {
            assert!(parse_bool(Some(&text(truthy))), "{truthy}");
        }
        for falsy in ["no", "false", "0", "maybe"] {
            assert!(!parse_bool(Some(&text(falsy))), "{falsy}");
        }
        assert!(!parse_bool(None));
        assert!(!parse_bool(Some(&CellValue::Empty)));
        assert!(parse_bool(Some(&CellValue::Bool(true))));
        assert!(parse_bool(Some(&CellValue::Float(1.0))));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(Some(&text("5")), 1), 5);
        assert_eq!(parse_int(Some(&text("3.7")), 1), 3);
        assert_eq!(parse_int(Some(&text("-3")), 1), -3);
        assert_eq!(parse_int(Some(&text("abc")), 1), 1);
        assert_eq!(parse_int(Some(&CellValue::Float(8.9)), 1), 8);
        assert_eq!(parse_int(Some(&CellValue::Empty), 7), 7);
        assert_eq!(parse_int(None, 7), 7);
        assert_eq!(parse_opt_int(Some(&text("inf"))), None);
    }

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_date(Some(&text("2024-03-15"))), expected);
        assert_eq!(parse_date(Some(&text("15/03/2024"))), expected);
        assert_eq!(parse_date(Some(&text("20240315"))), expected);
        assert_eq!(parse_date(Some(&text("2024-03-15T00:00:00"))), expected);
        assert_eq!(parse_date(Some(&text("next week"))), None);
    }
}
