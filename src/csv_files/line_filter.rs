//! Line-level rules deciding which CSV lines become table rows.
//!
//! A line is a data row when, after all `"` characters are removed and it is split on
//! commas, it has exactly [`ROW_WIDTH`] fields and its first field is an unsigned
//! decimal integer. Everything else (metadata preambles, header rows, totals footers)
//! is skipped without error.

use crate::types::column::ROW_WIDTH;

pub fn strip_quotes(line: &str) -> String {
    line.chars().filter(|&c| c != '"').collect()
}

pub fn split_fields(cleaned: &str) -> Vec<&str> {
    cleaned.split(',').collect()
}

pub fn has_row_arity(fields: &[&str]) -> bool {
    fields.len() == ROW_WIDTH
}

/// True if the first field is non-empty and made only of ASCII digits.
pub fn has_integer_lead(fields: &[&str]) -> bool {
    fields
        .first()
        .is_some_and(|lead| !lead.is_empty() && lead.bytes().all(|b| b.is_ascii_digit()))
}

pub fn is_data_row(fields: &[&str]) -> bool {
    has_row_arity(fields) && has_integer_lead(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_of(line: &str) -> Vec<String> {
        split_fields(&strip_quotes(line))
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn accepts(line: &str) -> bool {
        let cleaned = strip_quotes(line);
        is_data_row(&split_fields(&cleaned))
    }

    #[test]
    fn test_quotes_are_removed_everywhere() {
        assert_eq!(fields_of(r#""1","2","x""y""#), vec!["1", "2", "xy"]);
        assert_eq!(fields_of("plain,text"), vec!["plain", "text"]);
    }

    #[test]
    fn test_quoted_commas_still_split() {
        // Quotes are stripped before splitting, so a quoted comma is a separator.
        assert_eq!(fields_of(r#""Boulder, CO",1"#), vec!["Boulder", " CO", "1"]);
    }

    #[test]
    fn test_accepts_pvwatts_data_line() {
        assert!(accepts(
            r#""1","1","12","512.3","98.1","2.5","3.1","640.2","18.7","3012.5","2870.1""#
        ));
        assert!(accepts("12,31,23,0,0,-3.5,1.2,0,-3.5,0,0\n"));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        assert!(!accepts("1,1,12,512.3,98.1,2.5,3.1,640.2,18.7,3012.5"));
        assert!(!accepts("1,1,12,512.3,98.1,2.5,3.1,640.2,18.7,3012.5,2870.1,7"));
        assert!(!accepts(""));
    }

    #[test]
    fn test_rejects_non_integer_lead() {
        for lead in ["Month", "-1", "+1", "1.0", " 1", ""] {
            let line = format!("{},1,12,0,0,0,0,0,0,0,0", lead);
            assert!(!accepts(&line), "Lead {:?} should be rejected", lead);
        }
    }

    #[test]
    fn test_predicates_in_isolation() {
        let header = [
            "Month", "Day", "Hour", "Beam", "Diffuse", "Tamb", "Wind", "POA", "Tcell", "DC",
            "AC",
        ];
        assert!(has_row_arity(&header));
        assert!(!has_integer_lead(&header));

        let totals = ["Totals", "", "", "", "", "", "", "", "", "6712"];
        assert!(!has_row_arity(&totals));
        assert!(!has_integer_lead(&[]));
    }
}
