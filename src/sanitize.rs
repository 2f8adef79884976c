// Sentinel substitution for district attributes

use crate::table::Cell;

/// Shown in place of any missing or placeholder district attribute.
pub const NO_INFO: &str = "No Info";

/// Trimmed text of `value`, or `NO_INFO` when the value is missing, blank,
/// "none" in any case, or the "---" placeholder.
pub fn safe(value: Option<&str>) -> String {
    let text = match value {
        Some(v) => v.trim(),
        None => return NO_INFO.to_string(),
    };

    if text.is_empty() || text.to_lowercase() == "none" || text == "---" {
        return NO_INFO.to_string();
    }

    text.to_string()
}

pub fn safe_cell(cell: &Cell) -> String {
    safe(cell.as_text().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_placeholders() {
        assert_eq!(safe(None), "No Info");
        assert_eq!(safe(Some("")), "No Info");
        assert_eq!(safe(Some("   ")), "No Info");
        assert_eq!(safe(Some("none")), "No Info");
        assert_eq!(safe(Some("NONE")), "No Info");
        assert_eq!(safe(Some("None")), "No Info");
        assert_eq!(safe(Some("---")), "No Info");
        assert_eq!(safe(Some(" --- ")), "No Info");
    }

    #[test]
    fn test_safe_trims_real_values() {
        assert_eq!(safe(Some("  Bhopal  ")), "Bhopal");
        assert_eq!(safe(Some("भोपाल")), "भोपाल");
        assert_eq!(safe(Some("none of these")), "none of these");
        assert_eq!(safe(Some("----")), "----");
    }

    #[test]
    fn test_safe_cell() {
        assert_eq!(safe_cell(&Cell::Missing), NO_INFO);
        assert_eq!(safe_cell(&Cell::Number(12.0)), "12");
        assert_eq!(safe_cell(&Cell::from(" ODOP ")), "ODOP");
    }
}
