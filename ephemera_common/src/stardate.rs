//! Cosmetic stardate display formatting.
//!
//! The site shows a "stardate" derived from the calendar date: the last two
//! digits of the year, the zero-padded month, a literal dot, and the
//! zero-padded day (`YYMM.DD`). This is a display format only, not a real
//! TNG-era stardate calculation, and it is preserved as-is.

use chrono::{Datelike, Local, NaiveDate};

/// Format `date` as a `YYMM.DD` stardate string.
///
/// The numeric prefix before the dot is always 4 characters and the suffix
/// is always 2, so the output matches `\d{4}\.\d{2}` for any calendar date.
pub fn stardate_for(date: NaiveDate) -> String {
    let yy = date.year().rem_euclid(100);
    format!("{:02}{:02}.{:02}", yy, date.month(), date.day())
}

/// Format the current local date as a stardate.
///
/// Reads the host wall clock at call time; deterministic only for a fixed
/// clock reading. Use [`stardate_for`] when the date is known.
pub fn to_stardate() -> String {
    stardate_for(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_two_digit_components() {
        assert_eq!(stardate_for(date(2025, 5, 18)), "2505.18");
    }

    #[test]
    fn zero_pads_single_digit_month_and_day() {
        assert_eq!(stardate_for(date(2025, 1, 5)), "2501.05");
    }

    #[test]
    fn zero_pads_year_at_century_boundary() {
        assert_eq!(stardate_for(date(2000, 2, 9)), "0002.09");
    }

    #[test]
    fn current_stardate_matches_fixed_width_shape() {
        let stardate = to_stardate();
        let bytes = stardate.as_bytes();
        assert_eq!(bytes.len(), 7);
        assert_eq!(bytes[4], b'.');
        for (i, b) in bytes.iter().enumerate() {
            if i != 4 {
                assert!(b.is_ascii_digit(), "unexpected byte in {}", stardate);
            }
        }
    }
}
