//! Ethiopian calendar ⇄ Julian Day conversion.
//!
//! The Ethiopian year has twelve 30-day months followed by Pagume, which has
//! six days in years `y` with `y mod 4 == 3` and five otherwise.  Leap years
//! follow the plain four-year rule with no century exception.

use crate::date::{narrow_ymd, CalendarSystem};
use crate::error::CalendarError;
use crate::julian::JulianDay;

/// Julian Day of the midnight that starts 1 Meskerem of year 1
pub const EPOCH: f64 = 1_724_220.5;

/// Day number of 1 Meskerem of year 1 (the day beginning at [`EPOCH`])
const EPOCH_DAY_NUMBER: i64 = 1_724_221;

/// Offset between the Gregorian and Ethiopian year numbers used by
/// [`display_year`]
const DISPLAY_YEAR_OFFSET: i32 = 7;

pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Returns the number of days in the given Ethiopian month, or `None` if
/// `month` is not in `1..=13`.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        1..=12 => Some(30),
        13 if is_leap_year(year) => Some(6),
        13 => Some(5),
        _ => None,
    }
}

/// Converts an Ethiopian date to a Julian Day.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the month is not in `1..=13`,
/// the day does not exist in that month, or the date falls outside
/// [`JulianDay::MIN`]`..=`[`JulianDay::MAX`].
pub fn to_julian_day(year: i32, month: u8, day: u8) -> Result<JulianDay, CalendarError> {
    days_in_month(year, month)
        .filter(|&len| (1..=len).contains(&day))
        .and_then(|_| {
            JulianDay::checked_from_day_number(day_number(year.into(), month.into(), day.into()))
        })
        .ok_or_else(|| CalendarError::invalid(CalendarSystem::Ethiopian, year, month, day))
}

/// Converts a Julian Day to an Ethiopian `(year, month, day)`.
pub fn from_julian_day(jd: JulianDay) -> (i32, u8, u8) {
    let jdn = jd.day_number();
    let c = jdn - EPOCH_DAY_NUMBER;
    let mut year = (c - (c + 366).div_euclid(1461)).div_euclid(365) + 1;
    while year_start(year + 1) <= jdn {
        year += 1;
    }
    while year_start(year) > jdn {
        year -= 1;
    }
    let day_of_year = jdn - year_start(year);
    narrow_ymd((year, day_of_year / 30 + 1, day_of_year % 30 + 1))
}

/// Approximates the Ethiopian year as the Gregorian year minus seven.
///
/// This is a display heuristic for headers and banners only.  It is one year
/// too high from 1 January until Enkutatash (11 or 12 September), when the
/// Ethiopian year is still Gregorian − 8; every conversion goes through
/// [`from_julian_day`] instead.
pub fn display_year(gregorian_year: i32) -> i32 {
    gregorian_year.saturating_sub(DISPLAY_YEAR_OFFSET)
}

/// Day number of an Ethiopian date, without validation:
/// `epoch + d + 30(m-1) + 365(y-1) + floor(y/4) - 1`.
pub(crate) fn day_number(year: i64, month: i64, day: i64) -> i64 {
    year_start(year) + (month - 1) * 30 + day - 1
}

fn year_start(year: i64) -> i64 {
    EPOCH_DAY_NUMBER + (year - 1) * 365 + year.div_euclid(4)
}
