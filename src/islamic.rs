//! Approximate Islamic (Hijri) calendar conversion.
//!
//! Dates are derived arithmetically from a mean lunar year of 354.37 days
//! and a mean lunar month of 29.53 days counted from the Gregorian date
//! 622-07-16.  This is **not** the observational Hijri calendar, nor a
//! tabular scheme such as Umm al-Qura: results drift from the observed
//! calendar by a day or two every few years.  Callers presenting these dates
//! should say so (see [`CalendarSystem::is_approximate`]).
//!
//! Two artefacts of the formula are preserved rather than corrected:
//!
//! - The year boundary falls at `ceil((y-1) × 354.37)` days after the epoch
//!   while days of the year are counted from `floor((y-1) × 354.37)`, so in
//!   most years the first day produced for Muharram is the 2nd.
//!   [`to_julian_day`] rejects a 1 Muharram that the forward formula never
//!   produces.
//! - Month and day are clamped to 12 and 30, so in some years two
//!   consecutive days both convert to 30 Dhu al-Hijjah; [`to_julian_day`]
//!   returns the first of them.

use crate::date::{narrow_ymd, CalendarSystem};
use crate::error::CalendarError;
use crate::julian::{self, JulianDay};

/// Day number of the epoch, Gregorian 622-07-16
const EPOCH_DAY_NUMBER: i64 = julian::gregorian_day_number(622, 7, 16);

/// Mean lunar year in hundredths of a day
const MEAN_YEAR: i64 = 35_437;

/// Mean lunar month in hundredths of a day
const MEAN_MONTH: i64 = 2_953;

/// Offset between the Gregorian and Islamic year numbers used by
/// [`display_year`]
const DISPLAY_YEAR_OFFSET: i32 = 579;

/// Converts an Islamic date to a Julian Day.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the month is not in `1..=12`,
/// the day is not in `1..=30`, the date falls outside
/// [`JulianDay::MIN`]`..=`[`JulianDay::MAX`], or the mean-month
/// approximation never produces the date (which happens for 1 Muharram in
/// most years and for day 30 of 29-day months).
pub fn to_julian_day(year: i32, month: u8, day: u8) -> Result<JulianDay, CalendarError> {
    let invalid = || CalendarError::invalid(CalendarSystem::Islamic, year, month, day);
    if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
        return Err(invalid());
    }
    JulianDay::checked_from_day_number(day_number(year.into(), month.into(), day.into()))
        .filter(|&jd| from_julian_day(jd) == (year, month, day))
        .ok_or_else(invalid)
}

/// Converts a Julian Day to an approximate Islamic `(year, month, day)`.
pub fn from_julian_day(jd: JulianDay) -> (i32, u8, u8) {
    let days = jd.day_number() - EPOCH_DAY_NUMBER;
    let year = (days * 100).div_euclid(MEAN_YEAR) + 1;
    let day_of_year = days - year_start_offset(year);
    let month = ((day_of_year * 100).div_euclid(MEAN_MONTH) + 1).min(12);
    let day = ((day_of_year * 100 - (month - 1) * MEAN_MONTH).div_euclid(100) + 1).min(30);
    narrow_ymd((year, month, day))
}

/// Returns the first day of the given month: day 1 where the approximation
/// produces it, otherwise day 2.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the month is not in `1..=12` or
/// its first days fall outside the supported range.
pub fn month_start(year: i32, month: u8) -> Result<JulianDay, CalendarError> {
    match to_julian_day(year, month, 1) {
        Ok(jd) => Ok(jd),
        Err(e) => to_julian_day(year, month, 2).map_err(|_| e),
    }
}

/// Returns the highest day number that exists in the given month, or `None`
/// if `month` is not in `1..=12` or the month is out of range.
pub fn last_day_of_month(year: i32, month: u8) -> Option<u8> {
    (28..=30)
        .rev()
        .find(|&day| to_julian_day(year, month, day).is_ok())
}

/// Approximates the Islamic year as the Gregorian year minus 579.
///
/// Display heuristic only, like [`crate::ethiopian::display_year`]; it is
/// correct for only part of each Gregorian year.
pub fn display_year(gregorian_year: i32) -> i32 {
    gregorian_year.saturating_sub(DISPLAY_YEAR_OFFSET)
}

/// Day number of an Islamic date, without validation:
/// `epoch + floor((y-1) × 354.37) + ceil((m-1) × 29.53) + d - 1`.
pub(crate) fn day_number(year: i64, month: i64, day: i64) -> i64 {
    let month_offset = ((month - 1) * MEAN_MONTH + 99).div_euclid(100);
    EPOCH_DAY_NUMBER + year_start_offset(year) + month_offset + day - 1
}

/// `floor((year - 1) × 354.37)`
fn year_start_offset(year: i64) -> i64 {
    ((year - 1) * MEAN_YEAR).div_euclid(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_gregorian(y: i32, m: u8, d: u8) -> (i32, u8, u8) {
        from_julian_day(julian::to_julian_day(y, m, d).unwrap())
    }

    #[test]
    fn test_epoch() {
        assert_eq!(EPOCH_DAY_NUMBER, 1_948_437);
        assert_eq!(from_gregorian(622, 7, 16), (1, 1, 1));
        assert_eq!(from_gregorian(622, 7, 15), (0, 12, 30));
        assert_eq!(
            to_julian_day(1, 1, 1).map(JulianDay::day_number),
            Ok(EPOCH_DAY_NUMBER)
        );
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(from_gregorian(2024, 3, 15), (1445, 9, 2));
        assert_eq!(from_gregorian(2024, 3, 14), (1445, 9, 1));
        let jd = to_julian_day(1445, 9, 2).unwrap();
        assert_eq!(julian::from_julian_day(jd), (2024, 3, 15));
    }

    #[test]
    fn test_missing_first_of_muharram() {
        assert!(to_julian_day(1446, 1, 1).is_err());
        let start = month_start(1446, 1).unwrap();
        assert_eq!(from_julian_day(start), (1446, 1, 2));
        assert_eq!(from_julian_day(start.checked_add_days(-1).unwrap()), (1445, 12, 30));
    }

    #[test]
    fn test_month_start_later_months() {
        for year in 1400..=1500 {
            for month in 2..=12 {
                let start = month_start(year, month).unwrap();
                assert_eq!(from_julian_day(start), (year, month, 1));
            }
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert!(to_julian_day(1445, 13, 1).is_err());
        assert!(to_julian_day(1445, 0, 1).is_err());
        assert!(to_julian_day(1445, 1, 31).is_err());
        assert!(to_julian_day(1445, 1, 0).is_err());
        assert!(month_start(1445, 13).is_err());
        assert_eq!(last_day_of_month(1445, 13), None);
    }

    #[test]
    fn test_last_day_of_month() {
        for year in 1400..=1500 {
            for month in 1..=12 {
                let last = last_day_of_month(year, month).unwrap();
                assert!((29..=30).contains(&last), "{year}-{month}: {last}");
                let jd = to_julian_day(year, month, last).unwrap();
                let (y, m, d) = from_julian_day(jd.checked_add_days(1).unwrap());
                assert!(
                    (y, m, d) == (year, month, 30) || d <= 2,
                    "{year}-{month}-{last} followed by {y}-{m}-{d}"
                );
            }
            assert_eq!(last_day_of_month(year, 12), Some(30));
        }
    }

    #[test]
    fn test_round_trip() {
        let start = julian::to_julian_day(1800, 1, 1).unwrap().day_number();
        let end = julian::to_julian_day(2200, 12, 31).unwrap().day_number();
        let mut prev = from_julian_day(JulianDay::from_day_number(start - 1));
        for jdn in start..=end {
            let ymd = from_julian_day(JulianDay::from_day_number(jdn));
            let (y, m, d) = ymd;
            let back = to_julian_day(y, m, d).unwrap().day_number();
            if (m, d) == (12, 30) {
                assert!(back == jdn || back == jdn - 1, "{ymd:?}");
            } else {
                assert_eq!(back, jdn, "{ymd:?}");
            }
            assert!(ymd >= prev, "{ymd:?} precedes {prev:?}");
            prev = ymd;
        }
    }

    #[test]
    fn test_before_epoch() {
        let jd = julian::to_julian_day(500, 1, 1).unwrap();
        let (y, m, d) = from_julian_day(jd);
        assert!(y <= 0);
        let back = to_julian_day(y, m, d).unwrap();
        assert_eq!(from_julian_day(back), (y, m, d));
    }

    #[test]
    fn test_supported_span() {
        assert_eq!(from_julian_day(JulianDay::MIN), (-1_031_322, 2, 26));
        assert_eq!(from_julian_day(JulianDay::MAX), (1_030_041, 8, 8));
        assert_eq!(to_julian_day(-1_031_322, 2, 26), Ok(JulianDay::MIN));
        assert_eq!(to_julian_day(1_030_041, 8, 8), Ok(JulianDay::MAX));
        assert!(to_julian_day(-1_031_322, 2, 25).is_err());
        assert!(to_julian_day(1_030_041, 8, 9).is_err());
        assert!(month_start(-1_031_322, 2).is_err());
        assert_eq!(last_day_of_month(1_030_041, 8), None);
        assert!(to_julian_day(i32::MAX, 12, 30).is_err());
        assert!(to_julian_day(i32::MIN, 1, 2).is_err());
    }

    #[test]
    fn test_display_year() {
        assert_eq!(display_year(2024), 1445);
    }
}
