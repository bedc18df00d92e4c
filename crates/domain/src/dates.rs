// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date parsing and formatting at the domain edge.
//!
//! Dates cross system boundaries as ISO 8601 (`yyyy-mm-dd`) strings and are
//! handled internally as `time::Date` values.

use crate::error::DomainError;
use time::Date;

/// Parses an ISO 8601 date string into a `Date`.
///
/// # Arguments
///
/// * `value` - The date string to parse
///
/// # Errors
///
/// Returns `DomainError::DateParse` if the string is empty or not a valid
/// ISO 8601 date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    if value.is_empty() {
        return Err(DomainError::DateParse {
            date_string: String::new(),
            error: String::from("date string is empty"),
        });
    }

    Date::parse(value, &time::format_description::well_known::Iso8601::DEFAULT).map_err(|e| {
        DomainError::DateParse {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// Formats a `Date` as an ISO 8601 (`yyyy-mm-dd`) string.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(parse_date("2026-02-18"), Ok(date!(2026 - 02 - 18)));
    }

    #[test]
    fn test_parse_empty_date_rejected() {
        assert!(matches!(
            parse_date(""),
            Err(DomainError::DateParse { .. })
        ));
    }

    #[test]
    fn test_parse_garbage_rejected() {
        assert!(matches!(
            parse_date("not-a-date"),
            Err(DomainError::DateParse { .. })
        ));
    }

    #[test]
    fn test_format_round_trips() {
        let day = date!(2026 - 02 - 05);
        assert_eq!(parse_date(&format_date(day)), Ok(day));
    }
}
