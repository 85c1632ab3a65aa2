use crate::date::CalendarSystem;
use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CalendarError {
    #[error("invalid {system} date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        system: CalendarSystem,
        year: i32,
        month: u8,
        day: u8,
    },
    #[error("date arithmetic left the supported range of days")]
    OutOfRange,
    #[error("unsupported calendar system: {0:?}")]
    UnsupportedCalendarSystem(String),
    #[error("unsupported language: {0:?}")]
    UnsupportedLanguage(String),
}

impl CalendarError {
    pub(crate) fn invalid(system: CalendarSystem, year: i32, month: u8, day: u8) -> Self {
        CalendarError::InvalidDate {
            system,
            year,
            month,
            day,
        }
    }
}
