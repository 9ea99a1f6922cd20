/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

use chrono::NaiveDate;

/// Format a date for display, e.g. 2024-06-30 -> "Jun 30, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(format_date(date), "Jun 30, 2024");

        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
    }
}
