//! Calendar systems and validated civil dates.

use crate::error::CalendarError;
use crate::julian::JulianDay;
use crate::{ethiopian, islamic, julian};
use std::fmt;
use std::str::FromStr;
use time::{Month, Weekday, Weekday::*};

/// Earliest supported Gregorian year.  The other calendar systems accept the
/// same span of days, [`JulianDay::MIN`]`..=`[`JulianDay::MAX`], so their
/// year limits differ.
pub const MIN_YEAR: i32 = -1_000_000;

/// Latest supported Gregorian year
pub const MAX_YEAR: i32 = 1_000_000;

/// The calendar systems understood by the engine.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CalendarSystem {
    #[default]
    Gregorian,
    Ethiopian,
    /// Tabular mean-month approximation of the Hijri calendar; see
    /// [`crate::islamic`].
    Islamic,
}

impl CalendarSystem {
    pub const ALL: [CalendarSystem; 3] = [
        CalendarSystem::Gregorian,
        CalendarSystem::Ethiopian,
        CalendarSystem::Islamic,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "gregorian",
            CalendarSystem::Ethiopian => "ethiopian",
            CalendarSystem::Islamic => "islamic",
        }
    }

    /// Returns the number of months in every year of the calendar: 13 for
    /// the Ethiopian calendar (twelve 30-day months plus Pagume), 12
    /// otherwise.
    pub fn months_in_year(self) -> u8 {
        match self {
            CalendarSystem::Ethiopian => 13,
            CalendarSystem::Gregorian | CalendarSystem::Islamic => 12,
        }
    }

    /// Returns `true` if dates in this system are computed from mean
    /// astronomical lengths and may disagree with the observed calendar.
    pub fn is_approximate(self) -> bool {
        matches!(self, CalendarSystem::Islamic)
    }

    /// Returns the last day number that exists in the given month, or `None`
    /// if `month` is not a month of this calendar.
    pub fn last_day_of_month(self, year: i32, month: u8) -> Option<u8> {
        match self {
            CalendarSystem::Gregorian => julian::days_in_month(year, month),
            CalendarSystem::Ethiopian => ethiopian::days_in_month(year, month),
            CalendarSystem::Islamic => islamic::last_day_of_month(year, month),
        }
    }

    pub(crate) fn to_julian_day(
        self,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<JulianDay, CalendarError> {
        match self {
            CalendarSystem::Gregorian => julian::to_julian_day(year, month, day),
            CalendarSystem::Ethiopian => ethiopian::to_julian_day(year, month, day),
            CalendarSystem::Islamic => islamic::to_julian_day(year, month, day),
        }
    }

    /// Returns the first day of the given month.  This is day 1 except for
    /// Islamic months that the approximation starts on day 2.
    pub(crate) fn month_start(self, year: i32, month: u8) -> Result<JulianDay, CalendarError> {
        match self {
            CalendarSystem::Islamic => islamic::month_start(year, month),
            _ => self.to_julian_day(year, month, 1),
        }
    }

    /// Moves `delta` months away from `year`-`month`, returning `None` if
    /// the resulting year does not fit in an `i32`.
    pub(crate) fn shift_month(self, year: i32, month: u8, delta: i32) -> Option<(i32, u8)> {
        let per_year = i64::from(self.months_in_year());
        let index = i64::from(year) * per_year + i64::from(month) - 1 + i64::from(delta);
        let year = i32::try_from(index.div_euclid(per_year)).ok()?;
        let month = u8::try_from(index.rem_euclid(per_year) + 1).ok()?;
        Some((year, month))
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalendarSystem::Gregorian => "Gregorian",
            CalendarSystem::Ethiopian => "Ethiopian",
            CalendarSystem::Islamic => "Islamic",
        };
        f.write_str(name)
    }
}

impl FromStr for CalendarSystem {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<CalendarSystem, CalendarError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" | "g" => Ok(CalendarSystem::Gregorian),
            "ethiopian" | "e" => Ok(CalendarSystem::Ethiopian),
            "islamic" | "hijri" | "i" => Ok(CalendarSystem::Islamic),
            _ => Err(CalendarError::UnsupportedCalendarSystem(s.to_owned())),
        }
    }
}

/// A day in one of the supported calendar systems.
///
/// Every `CivilDate` refers to a day that exists in its calendar and lies in
/// [`JulianDay::MIN`]`..=`[`JulianDay::MAX`]: values are only produced by the
/// validating constructors, from an in-range [`JulianDay`], or by converting
/// another `CivilDate`, and every system covers the whole span.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CivilDate {
    system: CalendarSystem,
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Validates `year`-`month`-`day` in `system`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the month or day does not
    /// exist in that year or the day falls outside the supported span.
    pub fn new(
        system: CalendarSystem,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<CivilDate, CalendarError> {
        system.to_julian_day(year, month, day)?;
        Ok(CivilDate {
            system,
            year,
            month,
            day,
        })
    }

    pub fn gregorian(year: i32, month: u8, day: u8) -> Result<CivilDate, CalendarError> {
        CivilDate::new(CalendarSystem::Gregorian, year, month, day)
    }

    pub fn ethiopian(year: i32, month: u8, day: u8) -> Result<CivilDate, CalendarError> {
        CivilDate::new(CalendarSystem::Ethiopian, year, month, day)
    }

    pub fn islamic(year: i32, month: u8, day: u8) -> Result<CivilDate, CalendarError> {
        CivilDate::new(CalendarSystem::Islamic, year, month, day)
    }

    pub fn from_julian_day(system: CalendarSystem, jd: JulianDay) -> CivilDate {
        let (year, month, day) = match system {
            CalendarSystem::Gregorian => julian::from_julian_day(jd),
            CalendarSystem::Ethiopian => ethiopian::from_julian_day(jd),
            CalendarSystem::Islamic => islamic::from_julian_day(jd),
        };
        CivilDate {
            system,
            year,
            month,
            day,
        }
    }

    pub fn to_julian_day(self) -> JulianDay {
        let (y, m, d) = (
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        JulianDay::from_day_number(match self.system {
            CalendarSystem::Gregorian => julian::gregorian_day_number(y, m, d),
            CalendarSystem::Ethiopian => ethiopian::day_number(y, m, d),
            CalendarSystem::Islamic => islamic::day_number(y, m, d),
        })
    }

    pub fn system(self) -> CalendarSystem {
        self.system
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }

    pub fn weekday(self) -> Weekday {
        self.to_julian_day().weekday()
    }

    /// Expresses the same day in another calendar system.
    pub fn convert(self, to: CalendarSystem) -> CivilDate {
        if self.system == to {
            return self;
        }
        let converted = CivilDate::from_julian_day(to, self.to_julian_day());
        log::trace!("converted {self} ({}) to {converted} ({to})", self.system);
        converted
    }

    /// Moves `days` days forwards (or backwards, if negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result would fall
    /// outside the supported span of days.
    pub fn add_days(self, days: i32) -> Result<CivilDate, CalendarError> {
        self.to_julian_day()
            .checked_add_days(days.into())
            .map(|jd| CivilDate::from_julian_day(self.system, jd))
            .ok_or(CalendarError::OutOfRange)
    }

    /// Moves `months` months forwards (or backwards, if negative), keeping
    /// the day of the month where it exists and otherwise using the nearest
    /// day that does.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the target year does not fit
    /// in an `i32`, or [`CalendarError::InvalidDate`] if the target day lies
    /// outside the supported span.
    pub fn add_months(self, months: i32) -> Result<CivilDate, CalendarError> {
        let system = self.system;
        let (year, month) = system
            .shift_month(self.year, self.month, months)
            .ok_or(CalendarError::OutOfRange)?;
        // Islamic months may start on day 2
        let first = CivilDate::from_julian_day(system, system.month_start(year, month)?);
        let day = if self.day < first.day {
            first.day
        } else {
            let last = system.last_day_of_month(year, month).unwrap_or(first.day);
            self.day.min(last)
        };
        CivilDate::new(system, year, month, day)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<time::Date> for CivilDate {
    fn from(date: time::Date) -> CivilDate {
        CivilDate {
            system: CalendarSystem::Gregorian,
            year: date.year(),
            month: u8::from(date.month()),
            day: date.day(),
        }
    }
}

impl TryFrom<CivilDate> for time::Date {
    type Error = time::error::ComponentRange;

    fn try_from(date: CivilDate) -> Result<time::Date, Self::Error> {
        let date = date.convert(CalendarSystem::Gregorian);
        time::Date::from_calendar_date(date.year, Month::try_from(date.month)?, date.day)
    }
}

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u8;

    /// Saturday and Sunday, in every calendar system
    fn is_weekend(&self) -> bool;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }

    fn is_weekend(&self) -> bool {
        matches!(self, Saturday | Sunday)
    }
}

/// Returns the weekday `n` days after Sunday, wrapping modulo 7.
pub(crate) fn weekday_from_sunday(n: i64) -> Weekday {
    let days = u8::try_from(n.rem_euclid(7)).expect("remainder modulo 7 should fit in a u8");
    Sunday.nth_next(days)
}

pub(crate) fn narrow_ymd((year, month, day): (i64, i64, i64)) -> (i32, u8, u8) {
    (
        i32::try_from(year).expect("year of a bounded day number should fit in an i32"),
        u8::try_from(month).expect("month number should fit in a u8"),
        u8::try_from(day).expect("day of month should fit in a u8"),
    )
}
