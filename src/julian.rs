//! Proleptic Gregorian calendar ⇄ Julian Day conversion.
//!
//! Years use astronomical numbering: year 0 is 1 BCE, year −1 is 2 BCE, and
//! so on, with no gap between 1 BCE and 1 CE.

use crate::date::{narrow_ymd, weekday_from_sunday, CalendarSystem, MAX_YEAR, MIN_YEAR};
use crate::error::CalendarError;
use time::Weekday;

/// Day number of 0000-03-01
const MARCH_FIRST_YEAR_ZERO: i64 = 1_721_120;

/// Number of days in a 400-year Gregorian cycle
const DAYS_PER_400_YEARS: i64 = 146_097;

/// A day on the continuous Julian Day count.
///
/// Internally this is the Julian Day *Number*, the integer label of the day
/// that begins at noon.  [`JulianDay::value`] gives the astronomical Julian
/// Day of the preceding midnight, so 2000-01-01 has day number 2451545 and
/// value 2451544.5.
///
/// Every `JulianDay` handed out by the crate lies in
/// [`JulianDay::MIN`]`..=`[`JulianDay::MAX`], the span of days supported by
/// all calendar systems.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct JulianDay(i64);

impl JulianDay {
    /// The first supported day, Gregorian [`MIN_YEAR`]-01-01
    pub const MIN: JulianDay = JulianDay(gregorian_day_number(MIN_YEAR as i64, 1, 1));

    /// The last supported day, Gregorian [`MAX_YEAR`]-12-31
    pub const MAX: JulianDay = JulianDay(gregorian_day_number(MAX_YEAR as i64, 12, 31));

    /// Wraps a day number already known to be in range.
    pub(crate) const fn from_day_number(jdn: i64) -> JulianDay {
        JulianDay(jdn)
    }

    /// Returns `None` if `jdn` lies outside the supported span.
    pub(crate) fn checked_from_day_number(jdn: i64) -> Option<JulianDay> {
        (JulianDay::MIN.0..=JulianDay::MAX.0)
            .contains(&jdn)
            .then_some(JulianDay(jdn))
    }

    pub fn day_number(self) -> i64 {
        self.0
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn value(self) -> f64 {
        self.0 as f64 - 0.5
    }

    pub fn weekday(self) -> Weekday {
        // JDN 0 was a Monday
        weekday_from_sunday(self.0 + 1)
    }

    pub(crate) fn checked_add_days(self, days: i64) -> Option<JulianDay> {
        JulianDay::checked_from_day_number(self.0.checked_add(days)?)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given Gregorian month, or `None` if
/// `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Converts a proleptic Gregorian date to a Julian Day.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the month or day does not exist
/// or the date is out of the supported range.
///
/// # Example
///
/// ```
/// use multical::julian::to_julian_day;
///
/// let jd = to_julian_day(2000, 1, 1).unwrap();
/// assert_eq!(2451545, jd.day_number());
/// assert_eq!(2451544.5, jd.value());
/// ```
pub fn to_julian_day(year: i32, month: u8, day: u8) -> Result<JulianDay, CalendarError> {
    days_in_month(year, month)
        .filter(|&len| (1..=len).contains(&day))
        .and_then(|_| {
            JulianDay::checked_from_day_number(gregorian_day_number(
                year.into(),
                month.into(),
                day.into(),
            ))
        })
        .ok_or_else(|| CalendarError::invalid(CalendarSystem::Gregorian, year, month, day))
}

/// Converts a Julian Day back to a proleptic Gregorian `(year, month, day)`.
pub fn from_julian_day(jd: JulianDay) -> (i32, u8, u8) {
    narrow_ymd(ymd_from_day_number(jd.0))
}

/// Day number of a Gregorian date, without validation.
pub(crate) const fn gregorian_day_number(year: i64, month: i64, day: i64) -> i64 {
    if month < 3 {
        march_day_number(year - 1, month + 12, day)
    } else {
        march_day_number(year, month, day)
    }
}

/// Day number of a date in a March-based year, in which January and February
/// are months 13 and 14 of the preceding year.
///
/// This is `floor(365.25(y+4716)) + floor(30.6001(m+1)) + d + b - 1524.5`
/// rounded up to the noon-based day number, in integer arithmetic; over
/// months `3..=14` `floor(30.6001(m+1))` equals `floor(153(m+1)/5)`.
const fn march_day_number(year: i64, month: i64, day: i64) -> i64 {
    let a = year.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (1461 * (year + 4716)).div_euclid(4) + (153 * (month + 1)).div_euclid(5) + day + b - 1524
}

fn ymd_from_day_number(jdn: i64) -> (i64, i64, i64) {
    let mut year = ((jdn - MARCH_FIRST_YEAR_ZERO) * 400).div_euclid(DAYS_PER_400_YEARS);
    while march_day_number(year + 1, 3, 1) <= jdn {
        year += 1;
    }
    while march_day_number(year, 3, 1) > jdn {
        year -= 1;
    }
    let month = (4..=14)
        .rev()
        .find(|&m| march_day_number(year, m, 1) <= jdn)
        .unwrap_or(3);
    let day = jdn - march_day_number(year, month, 1) + 1;
    if month > 12 {
        (year + 1, month - 12, day)
    } else {
        (year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Weekday::*;

    #[test]
    fn test_j2000() {
        let jd = to_julian_day(2000, 1, 1).unwrap();
        assert_eq!(jd.day_number(), 2_451_545);
        assert!((jd.value() - 2_451_544.5).abs() < 1e-9);
        assert_eq!(from_julian_day(jd), (2000, 1, 1));
    }

    #[test]
    fn test_known_day_numbers() {
        for ((y, m, d), jdn) in [
            ((1970, 1, 1), 2_440_588),
            ((2021, 9, 8), 2_459_466),
            ((2024, 9, 11), 2_460_565),
            ((1582, 10, 15), 2_299_161),
            ((622, 7, 16), 1_948_437),
            ((0, 3, 1), MARCH_FIRST_YEAR_ZERO),
            ((-4713, 11, 24), 0),
        ] {
            let jd = to_julian_day(y, m, d).unwrap();
            assert_eq!(jd.day_number(), jdn, "{y:04}-{m:02}-{d:02}");
            assert_eq!(from_julian_day(jd), (y, m, d), "{jdn}");
        }
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn test_invalid_dates() {
        assert!(to_julian_day(2000, 2, 29).is_ok());
        assert!(to_julian_day(2024, 2, 29).is_ok());
        assert!(to_julian_day(1900, 2, 29).is_err());
        assert!(to_julian_day(2023, 13, 1).is_err());
        assert!(to_julian_day(2023, 0, 1).is_err());
        assert!(to_julian_day(2023, 4, 31).is_err());
        assert!(to_julian_day(2023, 4, 0).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(to_julian_day(2000, 1, 1).unwrap().weekday(), Saturday);
        assert_eq!(to_julian_day(1970, 1, 1).unwrap().weekday(), Thursday);
        assert_eq!(to_julian_day(-4713, 11, 24).unwrap().weekday(), Monday);
        assert_eq!(to_julian_day(-4713, 11, 23).unwrap().weekday(), Sunday);
    }

    #[test]
    fn test_round_trip_every_day() {
        let start = to_julian_day(-2001, 1, 1).unwrap().day_number();
        let end = to_julian_day(2401, 12, 31).unwrap().day_number();
        let mut prev = from_julian_day(JulianDay(start - 1));
        for jdn in start..=end {
            let ymd = from_julian_day(JulianDay(jdn));
            let (y, m, d) = ymd;
            assert_eq!(to_julian_day(y, m, d).map(JulianDay::day_number), Ok(jdn));
            assert!(ymd > prev, "{ymd:?} does not follow {prev:?}");
            if d > 1 {
                assert_eq!((prev.0, prev.1, prev.2 + 1), ymd);
            } else {
                assert_eq!(days_in_month(prev.0, prev.1), Some(prev.2));
            }
            prev = ymd;
        }
    }

    #[test]
    fn test_supported_span() {
        assert_eq!(to_julian_day(MIN_YEAR, 1, 1), Ok(JulianDay::MIN));
        assert_eq!(to_julian_day(MAX_YEAR, 12, 31), Ok(JulianDay::MAX));
        assert!(to_julian_day(MIN_YEAR - 1, 12, 31).is_err());
        assert!(to_julian_day(MAX_YEAR + 1, 1, 1).is_err());
        assert!(to_julian_day(i32::MAX, 12, 31).is_err());
        assert!(to_julian_day(i32::MIN, 1, 1).is_err());
        assert_eq!(JulianDay::MAX.checked_add_days(1), None);
        assert_eq!(JulianDay::MIN.checked_add_days(-1), None);
        assert_eq!(JulianDay::MIN.checked_add_days(i64::MIN), None);
        assert_eq!(
            JulianDay::MAX.checked_add_days(-1).map(from_julian_day),
            Some((MAX_YEAR, 12, 30))
        );
    }

    #[test]
    fn test_round_trip_distant_years() {
        for year in [MIN_YEAR, -400_001, -1, 0, 1, 99_999, 1_000_000] {
            for (m, d) in [(1, 1), (2, 28), (3, 1), (12, 31)] {
                let jd = to_julian_day(year, m, d).unwrap();
                assert_eq!(from_julian_day(jd), (year, m, d));
            }
        }
    }
}
