//! Convert dates between the Gregorian, Ethiopian and Islamic calendars and
//! lay out any month of any of them as a 6-week grid.
//!
//! Every conversion goes through the Julian Day.  Gregorian dates are
//! proleptic with astronomical year numbering; Ethiopian dates are exact;
//! Islamic dates come from a mean-month approximation (see [`islamic`]) and
//! are flagged as such by [`CalendarSystem::is_approximate`].
//!
//! ```
//! use multical::{generate_month_grid, CalendarSystem, CivilDate};
//!
//! let today = CivilDate::gregorian(2024, 9, 11)?;
//! let enkutatash = today.convert(CalendarSystem::Ethiopian);
//! assert_eq!(enkutatash.to_string(), "2017-01-01");
//!
//! let grid = generate_month_grid(CalendarSystem::Ethiopian, 2017, 1, 0, today, None)?;
//! assert_eq!(grid.cells().len(), 42);
//! assert!(grid.today().is_some_and(|cell| cell.is_holiday));
//! # Ok::<(), multical::CalendarError>(())
//! ```

pub mod calendar;
pub mod date;
pub mod error;
pub mod ethiopian;
pub mod grid;
pub mod holiday;
pub mod islamic;
pub mod julian;
pub mod locale;
pub use crate::calendar::{
    convert, format, format_style, Calendar, DateInfo, DateStyle, ParseDateStyleError,
};
pub use crate::date::{CalendarSystem, CivilDate, MAX_YEAR, MIN_YEAR};
pub use crate::error::CalendarError;
pub use crate::grid::{generate_month_grid, GridCell, MonthGrid, GRID_CELLS};
pub use crate::holiday::{holiday_name, is_holiday};
pub use crate::julian::JulianDay;
pub use crate::locale::{day_names, month_names, short_day_names, title, Language};
