//! Fixed holidays of each calendar system.

use crate::date::{CalendarSystem, CivilDate};

/// Returns the English name of the holiday falling on `date` in its own
/// calendar system, if any.
///
/// Islamic New Year is matched on the first day of Muharram that the
/// approximation produces, which is the 2nd in most years.
pub fn holiday_name(date: CivilDate) -> Option<&'static str> {
    match (date.system(), date.month(), date.day()) {
        (CalendarSystem::Gregorian, 1, 1) => Some("New Year's Day"),
        (CalendarSystem::Gregorian, 12, 25) => Some("Christmas Day"),
        (CalendarSystem::Ethiopian, 1, 1) => Some("Enkutatash"),
        (CalendarSystem::Ethiopian, 1, 17) => Some("Meskel"),
        (CalendarSystem::Ethiopian, 4, 29) => Some("Genna"),
        (CalendarSystem::Ethiopian, 5, 11) => Some("Timket"),
        (CalendarSystem::Islamic, 1, 1) => Some("Islamic New Year"),
        (CalendarSystem::Islamic, 1, 2)
            if CivilDate::islamic(date.year(), 1, 1).is_err() =>
        {
            Some("Islamic New Year")
        }
        (CalendarSystem::Islamic, 10, 1) => Some("Eid al-Fitr"),
        (CalendarSystem::Islamic, 12, 10) => Some("Eid al-Adha"),
        _ => None,
    }
}

pub fn is_holiday(date: CivilDate) -> bool {
    holiday_name(date).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_holidays() {
        assert_eq!(
            holiday_name(CivilDate::gregorian(2024, 12, 25).unwrap()),
            Some("Christmas Day")
        );
        assert!(is_holiday(CivilDate::gregorian(2025, 1, 1).unwrap()));
        assert!(!is_holiday(CivilDate::gregorian(2025, 1, 2).unwrap()));
    }

    #[test]
    fn test_ethiopian_holidays() {
        let enkutatash = CivilDate::gregorian(2024, 9, 11)
            .unwrap()
            .convert(CalendarSystem::Ethiopian);
        assert_eq!(holiday_name(enkutatash), Some("Enkutatash"));
        let timket = CivilDate::gregorian(2024, 1, 20)
            .unwrap()
            .convert(CalendarSystem::Ethiopian);
        assert_eq!(holiday_name(timket), Some("Timket"));
        let genna = CivilDate::gregorian(2025, 1, 7)
            .unwrap()
            .convert(CalendarSystem::Ethiopian);
        assert_eq!(holiday_name(genna), Some("Genna"));
    }

    #[test]
    fn test_islamic_new_year() {
        assert!(is_holiday(CivilDate::islamic(1, 1, 1).unwrap()));
        assert!(!is_holiday(CivilDate::islamic(1, 1, 2).unwrap()));
        assert!(CivilDate::islamic(1446, 1, 1).is_err());
        assert_eq!(
            holiday_name(CivilDate::islamic(1446, 1, 2).unwrap()),
            Some("Islamic New Year")
        );
    }

    #[test]
    fn test_holidays_are_per_system() {
        // 1 Meskerem 2017 is not a Gregorian holiday
        let g = CivilDate::gregorian(2024, 9, 11).unwrap();
        assert!(!is_holiday(g));
        assert!(is_holiday(g.convert(CalendarSystem::Ethiopian)));
    }
}
