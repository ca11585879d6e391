//! Parsing helpers for the compact timestamp formats WMI and Active
//! Directory hand back, plus the derived age/uptime strings.

use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::constants::DAYS_PER_YEAR;

/// Parse a CIM_DATETIME value (`yyyyMMddHHmmss.ffffff+UUU`).
///
/// Only the leading 14 digits are significant; the fraction and UTC
/// offset suffix are ignored, as are truncated or malformed values.
pub fn parse_cim_datetime(raw: &str) -> Option<NaiveDateTime> {
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.len() < 14 {
        return None;
    }
    NaiveDateTime::parse_from_str(&digits[..14], "%Y%m%d%H%M%S").ok()
}

/// Parse the date portion of a CIM_DATETIME value (`yyyyMMdd` prefix).
pub fn parse_cim_date(raw: &str) -> Option<NaiveDate> {
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.len() < 8 {
        return None;
    }
    NaiveDate::parse_from_str(&digits[..8], "%Y%m%d").ok()
}

/// Format a BIOS release date's age relative to `now` as whole years plus
/// remaining days, using 365.25-day years.
pub fn bios_age(release: NaiveDate, now: NaiveDate) -> String {
    let total_days = (now - release).num_days();
    if total_days < 0 {
        return "0 years and 0 days".to_string();
    }
    let years = (total_days as f64 / DAYS_PER_YEAR).trunc() as i64;
    let days = (total_days as f64 % DAYS_PER_YEAR).trunc() as i64;
    format!("{} years and {} days", years, days)
}

/// Render an uptime duration as days/hours/minutes.
pub fn format_uptime(uptime: Duration) -> String {
    let total_minutes = uptime.num_minutes().max(0);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;
    format!("{} days, {} hours, {} minutes", days, hours, minutes)
}

/// Convert a Windows FILETIME (100ns intervals since 1601-01-01) into a
/// UTC timestamp. Active Directory stores lastLogonTimestamp this way.
pub fn filetime_to_datetime(filetime: i64) -> Option<NaiveDateTime> {
    if filetime <= 0 {
        return None;
    }
    const EPOCH_DIFFERENCE_SECS: i64 = 11_644_473_600;
    let unix_secs = filetime / 10_000_000 - EPOCH_DIFFERENCE_SECS;
    Utc.timestamp_opt(unix_secs, 0).single().map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cim_datetime_plain() {
        let parsed = parse_cim_datetime("20240115103000").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_cim_datetime_with_offset_suffix() {
        let parsed = parse_cim_datetime("20231204081559.500000+060").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2023, 12, 4)
                .unwrap()
                .and_hms_opt(8, 15, 59)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_cim_datetime_rejects_short_input() {
        assert!(parse_cim_datetime("2024").is_none());
        assert!(parse_cim_datetime("").is_none());
        assert!(parse_cim_datetime("not a date").is_none());
    }

    #[test]
    fn test_parse_cim_date() {
        let parsed = parse_cim_date("20220310120000.000000+000").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2022, 3, 10).unwrap());
    }

    #[test]
    fn test_bios_age_two_years_ten_days() {
        // 741 calendar days: 2 * 365.25 = 730.5, remainder 10.5 -> 10 whole days
        let release = NaiveDate::from_ymd_opt(2022, 2, 18).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!((now - release).num_days(), 741);
        assert_eq!(bios_age(release, now), "2 years and 10 days");
    }

    #[test]
    fn test_bios_age_under_one_year() {
        let release = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(bios_age(release, now), "0 years and 60 days");
    }

    #[test]
    fn test_bios_age_future_release_clamps_to_zero() {
        let release = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(bios_age(release, now), "0 years and 0 days");
    }

    #[test]
    fn test_format_uptime() {
        let uptime = Duration::minutes(3 * 24 * 60 + 5 * 60 + 42);
        assert_eq!(format_uptime(uptime), "3 days, 5 hours, 42 minutes");
    }

    #[test]
    fn test_format_uptime_negative_clamps() {
        assert_eq!(format_uptime(Duration::minutes(-10)), "0 days, 0 hours, 0 minutes");
    }

    #[test]
    fn test_filetime_conversion() {
        // 2024-01-01 00:00:00 UTC
        let filetime = (11_644_473_600i64 + 1_704_067_200) * 10_000_000;
        let dt = filetime_to_datetime(filetime).unwrap();
        assert_eq!(
            dt,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert!(filetime_to_datetime(0).is_none());
    }
}
