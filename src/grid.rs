//! The 6-week month grid.

use crate::date::{weekday_from_sunday, CalendarSystem, CivilDate, WeekdayExt};
use crate::error::CalendarError;
use crate::holiday;
use crate::julian::JulianDay;
use std::iter::successors;
use std::slice::Chunks;
use time::Weekday;

pub const DAYS_IN_WEEK: usize = 7;

pub const WEEKS_IN_GRID: usize = 6;

pub const GRID_CELLS: usize = DAYS_IN_WEEK * WEEKS_IN_GRID;

/// Days from the first cell of a grid to the last
const GRID_LAST_OFFSET: i64 = 41;

/// One day of a [`MonthGrid`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GridCell {
    /// The day, expressed in the grid's calendar system
    pub date: CivilDate,
    pub weekday: Weekday,
    /// The day belongs to the month the grid was generated for rather than
    /// to the leading or trailing month
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    /// Saturday or Sunday, whatever the grid's first day of week
    pub is_weekend: bool,
    pub is_holiday: bool,
}

impl GridCell {
    pub fn day(&self) -> u8 {
        self.date.day()
    }
}

/// Six consecutive weeks covering a month, with the leading and trailing days
/// of the neighbouring months filling the first and last rows.
// Invariant: `cells` holds exactly GRID_CELLS consecutive days, the first of
// which falls on `first_day_of_week`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthGrid {
    system: CalendarSystem,
    year: i32,
    month: u8,
    first_day_of_week: Weekday,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn system(&self) -> CalendarSystem {
        self.system
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Returns the six rows of the grid, each of [`DAYS_IN_WEEK`] cells
    pub fn weeks(&self) -> Chunks<'_, GridCell> {
        self.cells.chunks(DAYS_IN_WEEK)
    }

    /// Returns the weekdays of the grid's columns, in order
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> {
        successors(Some(self.first_day_of_week), |wd| Some(wd.next())).take(DAYS_IN_WEEK)
    }

    pub fn today(&self) -> Option<&GridCell> {
        self.cells.iter().find(|c| c.is_today)
    }

    pub fn selected(&self) -> Option<&GridCell> {
        self.cells.iter().find(|c| c.is_selected)
    }

    /// Returns the year and month before the grid's month, or `None` at the
    /// end of the representable years.
    pub fn previous_month(&self) -> Option<(i32, u8)> {
        self.system.shift_month(self.year, self.month, -1)
    }

    pub fn next_month(&self) -> Option<(i32, u8)> {
        self.system.shift_month(self.year, self.month, 1)
    }
}

/// Builds the grid for `year`-`month` of `system`.
///
/// The first cell falls on `first_day_of_week` (0 = Sunday, taken modulo 7)
/// on or before the first day of the month.  `today` and `selected` may be
/// given in any calendar system and are matched by day.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the month does not exist in
/// `system` or starts outside the supported span of days, and
/// [`CalendarError::OutOfRange`] if the six weeks around it reach past
/// either end of the span.
pub fn generate_month_grid(
    system: CalendarSystem,
    year: i32,
    month: u8,
    first_day_of_week: u8,
    today: CivilDate,
    selected: Option<CivilDate>,
) -> Result<MonthGrid, CalendarError> {
    let first = system.month_start(year, month)?;
    let first_day_of_week = weekday_from_sunday(first_day_of_week.into());
    let lead = (first.weekday().index0() + 7 - first_day_of_week.index0()) % 7;
    let start = first
        .checked_add_days(-i64::from(lead))
        .filter(|d| d.checked_add_days(GRID_LAST_OFFSET).is_some())
        .ok_or(CalendarError::OutOfRange)?;
    let today = today.to_julian_day();
    let selected = selected.map(CivilDate::to_julian_day);
    let cells = iter_days_from(start)
        .take(GRID_CELLS)
        .map(|jd| {
            let date = CivilDate::from_julian_day(system, jd);
            let weekday = jd.weekday();
            GridCell {
                date,
                weekday,
                is_current_month: date.year() == year && date.month() == month,
                is_today: jd == today,
                is_selected: Some(jd) == selected,
                is_weekend: weekday.is_weekend(),
                is_holiday: holiday::is_holiday(date),
            }
        })
        .collect::<Vec<_>>();
    log::debug!(
        "generated {system} grid for {year}-{month:02} starting {} ({lead} leading days)",
        CivilDate::from_julian_day(system, start)
    );
    Ok(MonthGrid {
        system,
        year,
        month,
        first_day_of_week,
        cells,
    })
}

fn iter_days_from(date: JulianDay) -> impl Iterator<Item = JulianDay> {
    successors(Some(date), |&d| d.checked_add_days(1))
}
