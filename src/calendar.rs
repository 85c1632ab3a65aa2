//! The calendar facade: conversion, grids, formatting and name lookups.

use crate::date::{weekday_from_sunday, CalendarSystem, CivilDate, WeekdayExt};
use crate::error::CalendarError;
use crate::grid::{generate_month_grid, MonthGrid};
use crate::locale::{self, Language};
use crate::{ethiopian, holiday, islamic};
use std::str::FromStr;
use thiserror::Error;
use time::Weekday;

/// Expresses `date` in the calendar system `to`.
pub fn convert(date: CivilDate, to: CalendarSystem) -> CivilDate {
    date.convert(to)
}

/// Converts `date` into `system` and substitutes it into `template`.
///
/// Every `yyyy` is replaced with the year, every `mm` with the two-digit
/// month and every `dd` with the two-digit day.  All other text is copied
/// unchanged.
///
/// ```
/// use multical::{format, CalendarSystem, CivilDate};
///
/// let date = CivilDate::gregorian(2024, 3, 15).unwrap();
/// assert_eq!(format(date, CalendarSystem::Gregorian, "yyyy-mm-dd"), "2024-03-15");
/// assert_eq!(format(date, CalendarSystem::Ethiopian, "dd/mm/yyyy"), "06/07/2016");
/// ```
pub fn format(date: CivilDate, system: CalendarSystem, template: &str) -> String {
    let date = date.convert(system);
    template
        .replace("yyyy", &date.year().to_string())
        .replace("mm", &format!("{:02}", date.month()))
        .replace("dd", &format!("{:02}", date.day()))
}

/// Named date layouts for [`format_style()`]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DateStyle {
    /// Weekday, day, month name and year; Islamic dates carry an era marker
    /// instead of the weekday
    Full,
    /// Day, month name and year
    #[default]
    Medium,
    /// `month/day/year` in digits
    Short,
}

impl FromStr for DateStyle {
    type Err = ParseDateStyleError;

    fn from_str(s: &str) -> Result<DateStyle, ParseDateStyleError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "long" => Ok(DateStyle::Full),
            "medium" => Ok(DateStyle::Medium),
            "short" => Ok(DateStyle::Short),
            _ => Err(ParseDateStyleError),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("invalid date style; expected \"full\", \"medium\", or \"short\"")]
pub struct ParseDateStyleError;

/// Converts `date` into `system` and writes it out in the given style with
/// names from `language`.
///
/// ```
/// use multical::{format_style, CalendarSystem, CivilDate, DateStyle, Language};
///
/// let date = CivilDate::gregorian(2024, 3, 15).unwrap();
/// assert_eq!(
///     format_style(date, CalendarSystem::Gregorian, Language::English, DateStyle::Full),
///     "Friday, March 15, 2024"
/// );
/// assert_eq!(
///     format_style(date, CalendarSystem::Islamic, Language::English, DateStyle::Full),
///     "2 Ramadan 1445 AH"
/// );
/// ```
pub fn format_style(
    date: CivilDate,
    system: CalendarSystem,
    language: Language,
    style: DateStyle,
) -> String {
    let date = date.convert(system);
    let (year, month, day) = (date.year(), date.month(), date.day());
    let month_name = locale::month_name(system, language, month);
    let us_order = system == CalendarSystem::Gregorian && language == Language::English;
    match style {
        DateStyle::Short => format!("{month}/{day}/{year}"),
        DateStyle::Medium if us_order => format!("{month_name} {day}, {year}"),
        DateStyle::Medium => format!("{day} {month_name} {year}"),
        DateStyle::Full => {
            if let Some(era) = locale::era_suffix(system, language) {
                format!("{day} {month_name} {year} {era}")
            } else {
                let weekday = locale::day_name(system, language, date.weekday());
                if us_order {
                    format!("{weekday}, {month_name} {day}, {year}")
                } else {
                    format!("{weekday}, {day} {month_name} {year}")
                }
            }
        }
    }
}

/// What a date picker shows about one day, as returned by
/// [`Calendar::date_info`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DateInfo {
    /// The day, expressed in the calendar's system
    pub date: CivilDate,
    /// The date in [`DateStyle::Full`]
    pub formatted: String,
    pub day_name: &'static str,
    pub month_name: &'static str,
    pub weekday: Weekday,
    pub is_weekend: bool,
    /// Name of the holiday falling on the day, if any
    pub holiday: Option<&'static str>,
}

impl DateInfo {
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }
}

/// A calendar system together with the presentation settings used to look
/// up names and lay out grids.
///
/// ```
/// use multical::{Calendar, CalendarSystem, CivilDate, Language};
///
/// let calendar = Calendar::new(CalendarSystem::Ethiopian)
///     .with_language(Language::Amharic)
///     .with_first_day_of_week(1);
/// let today = CivilDate::gregorian(2024, 3, 15).unwrap();
/// let grid = calendar.grid_for(today, today).unwrap();
/// assert_eq!(grid.cells().len(), 42);
/// assert_eq!(calendar.caption(grid.year(), grid.month()).unwrap(), "መጋቢት 2016");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Calendar {
    system: CalendarSystem,
    language: Language,
    first_day_of_week: Weekday,
}

impl Calendar {
    pub fn new(system: CalendarSystem) -> Calendar {
        Calendar {
            system,
            language: Language::default(),
            first_day_of_week: Weekday::Sunday,
        }
    }

    pub fn with_system(mut self, system: CalendarSystem) -> Calendar {
        self.system = system;
        self
    }

    pub fn with_language(mut self, language: Language) -> Calendar {
        self.language = language;
        self
    }

    /// Sets the weekday of the grid's first column, counted from Sunday = 0
    /// and taken modulo 7.
    pub fn with_first_day_of_week(mut self, first_day_of_week: u8) -> Calendar {
        self.first_day_of_week = weekday_from_sunday(first_day_of_week.into());
        self
    }

    pub fn system(&self) -> CalendarSystem {
        self.system
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn convert(&self, date: CivilDate) -> CivilDate {
        convert(date, self.system)
    }

    /// Builds the grid for `year`-`month` of this calendar's system.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the month does not exist, or
    /// [`CalendarError::OutOfRange`] if its grid reaches past the supported
    /// span of days.
    pub fn month_grid(
        &self,
        year: i32,
        month: u8,
        today: CivilDate,
        selected: Option<CivilDate>,
    ) -> Result<MonthGrid, CalendarError> {
        generate_month_grid(
            self.system,
            year,
            month,
            self.first_day_of_week.index0(),
            today,
            selected,
        )
    }

    /// Builds the grid for the month containing `date`, with `date` selected.
    ///
    /// # Errors
    ///
    /// Fails like [`Calendar::month_grid`] for the months at either end of
    /// the supported span of days.
    pub fn grid_for(&self, date: CivilDate, today: CivilDate) -> Result<MonthGrid, CalendarError> {
        let local = self.convert(date);
        self.month_grid(local.year(), local.month(), today, Some(date))
    }

    pub fn format(&self, date: CivilDate, template: &str) -> String {
        format(date, self.system, template)
    }

    pub fn format_style(&self, date: CivilDate, style: DateStyle) -> String {
        format_style(date, self.system, self.language, style)
    }

    /// Collects the names, flags and full-style text for `date` in this
    /// calendar's system and language.
    pub fn date_info(&self, date: CivilDate) -> DateInfo {
        let date = self.convert(date);
        let weekday = date.weekday();
        DateInfo {
            date,
            formatted: self.format_style(date, DateStyle::Full),
            day_name: locale::day_name(self.system, self.language, weekday),
            month_name: locale::month_name(self.system, self.language, date.month()),
            weekday,
            is_weekend: weekday.is_weekend(),
            holiday: holiday::holiday_name(date),
        }
    }

    pub fn month_names(&self) -> &'static [&'static str] {
        locale::month_names(self.system, self.language)
    }

    pub fn day_names(&self) -> &'static [&'static str; 7] {
        locale::day_names(self.system, self.language)
    }

    pub fn short_day_names(&self) -> &'static [&'static str; 7] {
        locale::short_day_names(self.system, self.language)
    }

    /// Returns the abbreviated weekday names in column order, starting at the
    /// first day of the week.
    pub fn weekday_headers(&self) -> [&'static str; 7] {
        let mut headers = *self.short_day_names();
        headers.rotate_left(usize::from(self.first_day_of_week.index0()));
        headers
    }

    pub fn title(&self) -> &'static str {
        locale::title(self.system, self.language)
    }

    /// Returns the heading for a month, e.g. "March 2024".
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the month does not exist.
    pub fn caption(&self, year: i32, month: u8) -> Result<String, CalendarError> {
        self.system.month_start(year, month)?;
        let name = locale::month_name(self.system, self.language, month);
        Ok(format!("{name} {year}"))
    }

    /// Returns the year to show in banners for a Gregorian year.
    ///
    /// This uses the fixed-offset shortcuts [`ethiopian::display_year`] and
    /// [`islamic::display_year`], which are only right for part of each
    /// Gregorian year.  Grids and formatted dates never use it.
    pub fn display_year(&self, gregorian_year: i32) -> i32 {
        match self.system {
            CalendarSystem::Gregorian => gregorian_year,
            CalendarSystem::Ethiopian => ethiopian::display_year(gregorian_year),
            CalendarSystem::Islamic => islamic::display_year(gregorian_year),
        }
    }
}

impl Default for Calendar {
    fn default() -> Calendar {
        Calendar::new(CalendarSystem::default())
    }
}
