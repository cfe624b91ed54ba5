//! # Date Helpers
//!
//! Business-day boundaries in the store's time zone.
//!
//! A dry-cleaning counter lives on calendar days: the ironing workspace and
//! any end-of-day filtering hang off "start of today in the store zone",
//! not off UTC midnight. Time-zone database internals are delegated to
//! `chrono-tz`; this module only asks it questions.
//!
//! ## Wall-Clock Caveat
//! Two calls made within the same local day yield the same calendar date,
//! but wall-clock reads are not synchronized: a call in the last instant of
//! one day and another in the first instant of the next may legitimately
//! differ.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::{CoreError, CoreResult};

/// Resolves an IANA zone identifier ("Europe/Madrid", "America/Mexico_City").
///
/// Fails fast with [`CoreError::UnknownTimeZone`] instead of falling back to
/// a default zone, so a misconfigured store surfaces immediately.
pub fn parse_zone(zone_name: &str) -> CoreResult<Tz> {
    zone_name
        .parse::<Tz>()
        .map_err(|_| CoreError::UnknownTimeZone(zone_name.to_string()))
}

/// Returns the current calendar date in the given zone.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Returns local midnight ("start of day") of the current date in the zone.
///
/// ## DST Gap Handling
/// If 00:00 does not exist locally (a zone that springs forward across
/// midnight), the naive midnight is interpreted as UTC and converted back,
/// matching how the rest of the day-boundary math degrades.
pub fn start_of_day_in(tz: Tz) -> DateTime<Tz> {
    date_start_in(today_in(tz), tz)
}

/// Returns local midnight of the current date for a zone given by name.
///
/// ## Example
/// ```rust
/// use lava_core::dates::start_of_day;
///
/// let midnight = start_of_day("Europe/Madrid").unwrap();
/// assert_eq!(midnight.time(), chrono::NaiveTime::MIN);
///
/// assert!(start_of_day("Mars/Olympus").is_err());
/// ```
pub fn start_of_day(zone_name: &str) -> CoreResult<DateTime<Tz>> {
    Ok(start_of_day_in(parse_zone(zone_name)?))
}

/// Local midnight of an arbitrary date in the zone.
///
/// Exposed separately so reporting code can compute historical day
/// boundaries with the same gap handling as "today".
pub fn date_start_in(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    let naive = date.and_time(NaiveTime::MIN);
    // earliest(): when midnight occurs twice (fall-back), start of day is
    // the first occurrence; when it doesn't occur at all, fall through.
    naive
        .and_local_timezone(tz)
        .earliest()
        .unwrap_or_else(|| naive.and_utc().with_timezone(&tz))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_zone_known() {
        assert!(parse_zone("Europe/Madrid").is_ok());
        assert!(parse_zone("America/Mexico_City").is_ok());
        assert!(parse_zone("UTC").is_ok());
    }

    #[test]
    fn test_parse_zone_unknown_fails_fast() {
        let err = parse_zone("Mars/Olympus").unwrap_err();
        assert!(matches!(err, CoreError::UnknownTimeZone(_)));
        assert_eq!(err.to_string(), "Unknown time zone: Mars/Olympus");
    }

    #[test]
    fn test_start_of_day_is_midnight() {
        let tz: Tz = "Europe/Madrid".parse().unwrap();
        let start = start_of_day_in(tz);

        assert_eq!(start.hour(), 0);
        assert_eq!(start.minute(), 0);
        assert_eq!(start.second(), 0);
    }

    #[test]
    fn test_start_of_day_matches_current_date_in_zone() {
        let tz: Tz = "Europe/Madrid".parse().unwrap();
        let start = start_of_day_in(tz);

        // Re-read "today"; tolerate the (astronomically unlikely) case of
        // the test straddling a local midnight.
        let today = today_in(tz);
        let diff = (start.date_naive() - today).num_days().abs();
        assert!(diff <= 1);
    }

    #[test]
    fn test_date_start_in_fixed_date() {
        let tz: Tz = "Europe/Madrid".parse().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let start = date_start_in(date, tz);

        assert_eq!(start.date_naive(), date);
        assert_eq!(start.time(), NaiveTime::MIN);
        // Madrid is UTC+1 in March (before the last-Sunday switch)
        assert_eq!(start.with_timezone(&Utc).hour(), 23);
    }

    #[test]
    fn test_start_of_day_by_name() {
        let start = start_of_day("UTC").unwrap();
        assert_eq!(start.time(), NaiveTime::MIN);

        assert!(start_of_day("Not/AZone").is_err());
    }
}
