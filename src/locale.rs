//! Month names, weekday names and titles.
//!
//! Tables are keyed by language and calendar system.  English covers every
//! system, and any missing `(language, system)` entry falls back to it, so
//! lookups never fail.

use crate::date::{CalendarSystem, WeekdayExt};
use crate::error::CalendarError;
use std::fmt;
use std::str::FromStr;
use time::Weekday;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Language {
    #[default]
    English,
    Amharic,
    Arabic,
    Oromo,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Amharic,
        Language::Arabic,
        Language::Oromo,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Amharic => "am",
            Language::Arabic => "ar",
            Language::Oromo => "oro",
        }
    }

    /// Parses a language tag, falling back to the default language (English)
    /// for anything unrecognized.
    pub fn from_tag_or_default(tag: &str) -> Language {
        tag.parse().unwrap_or_else(|e: CalendarError| {
            log::debug!("{e}; falling back to {}", Language::default().tag());
            Language::default()
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Language, CalendarError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "am" | "amharic" => Ok(Language::Amharic),
            "ar" | "arabic" => Ok(Language::Arabic),
            "oro" | "om" | "oromo" => Ok(Language::Oromo),
            _ => Err(CalendarError::UnsupportedLanguage(s.to_owned())),
        }
    }
}

static GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static GREGORIAN_MONTHS_AM: [&str; 12] = [
    "ጃንዩወሪ",
    "ፌብሩወሪ",
    "ማርች",
    "ኤፕሪል",
    "ሜይ",
    "ጁን",
    "ጁላይ",
    "ኦገስት",
    "ሴፕቴምበር",
    "ኦክቶበር",
    "ኖቬምበር",
    "ዲሴምበር",
];

static GREGORIAN_MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

static ETHIOPIAN_MONTHS_EN: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazya", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

static ETHIOPIAN_MONTHS_AM: [&str; 13] = [
    "መስከረም",
    "ጥቅምት",
    "ኅዳር",
    "ታኅሳስ",
    "ጥር",
    "የካቲት",
    "መጋቢት",
    "ሚያዝያ",
    "ግንቦት",
    "ሰኔ",
    "ሐምሌ",
    "ነሐሴ",
    "ጳጉሜን",
];

static ETHIOPIAN_MONTHS_ORO: [&str; 13] = [
    "Fuulbaana",
    "Onkoloolessa",
    "Sadaasa",
    "Muddee",
    "Ammajjii",
    "Guraandhala",
    "Bitootessa",
    "Ebla",
    "Caamsaa",
    "Waxabajjii",
    "Adoolessa",
    "Hagayya",
    "Qaammee",
];

static ISLAMIC_MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

static ISLAMIC_MONTHS_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

static DAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

static DAYS_AM: [&str; 7] = ["እሑድ", "ሰኞ", "ማክሰኞ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ"];

static DAYS_AR: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

static DAYS_ORO: [&str; 7] = [
    "Dilbata", "Wiixata", "Kibxata", "Roobii", "Kamiisa", "Jimaata", "Sanbata",
];

static SHORT_DAYS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

static SHORT_DAYS_AM: [&str; 7] = ["እሑድ", "ሰኞ", "ማክሰ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ"];

static SHORT_DAYS_AR: [&str; 7] = ["أحد", "اثنين", "ثلاثاء", "أربعاء", "خميس", "جمعة", "سبت"];

static SHORT_DAYS_ORO: [&str; 7] = ["Dil", "Wix", "Kib", "Rob", "Kam", "Jim", "San"];

fn month_table(system: CalendarSystem, language: Language) -> Option<&'static [&'static str]> {
    match (language, system) {
        (Language::English, _) => Some(default_month_names(system)),
        (Language::Amharic, CalendarSystem::Gregorian) => Some(GREGORIAN_MONTHS_AM.as_slice()),
        (Language::Amharic, CalendarSystem::Ethiopian) => Some(ETHIOPIAN_MONTHS_AM.as_slice()),
        (Language::Arabic, CalendarSystem::Gregorian) => Some(GREGORIAN_MONTHS_AR.as_slice()),
        (Language::Arabic, CalendarSystem::Islamic) => Some(ISLAMIC_MONTHS_AR.as_slice()),
        (Language::Oromo, CalendarSystem::Ethiopian) => Some(ETHIOPIAN_MONTHS_ORO.as_slice()),
        _ => None,
    }
}

fn default_month_names(system: CalendarSystem) -> &'static [&'static str] {
    match system {
        CalendarSystem::Gregorian => &GREGORIAN_MONTHS_EN,
        CalendarSystem::Ethiopian => &ETHIOPIAN_MONTHS_EN,
        CalendarSystem::Islamic => &ISLAMIC_MONTHS_EN,
    }
}

/// Returns the names of the months of `system` in `language`, in order: 13
/// names for the Ethiopian calendar, 12 otherwise.
pub fn month_names(system: CalendarSystem, language: Language) -> &'static [&'static str] {
    month_table(system, language).unwrap_or_else(|| {
        log::debug!("no {system} month names for {language}; using English");
        default_month_names(system)
    })
}

/// Returns the name of month number `month` (1-based), or an empty string
/// if `system` has no such month.
pub fn month_name(system: CalendarSystem, language: Language, month: u8) -> &'static str {
    usize::from(month)
        .checked_sub(1)
        .and_then(|i| month_names(system, language).get(i))
        .copied()
        .unwrap_or_default()
}

/// Full and abbreviated weekday names, Sunday first
type WeekdayTables = (&'static [&'static str; 7], &'static [&'static str; 7]);

// Covers exactly the (language, system) pairs that `month_table` covers
fn weekday_tables(system: CalendarSystem, language: Language) -> Option<WeekdayTables> {
    match (language, system) {
        (Language::English, _) => Some((&DAYS_EN, &SHORT_DAYS_EN)),
        (Language::Amharic, CalendarSystem::Gregorian | CalendarSystem::Ethiopian) => {
            Some((&DAYS_AM, &SHORT_DAYS_AM))
        }
        (Language::Arabic, CalendarSystem::Gregorian | CalendarSystem::Islamic) => {
            Some((&DAYS_AR, &SHORT_DAYS_AR))
        }
        (Language::Oromo, CalendarSystem::Ethiopian) => Some((&DAYS_ORO, &SHORT_DAYS_ORO)),
        _ => None,
    }
}

fn weekday_tables_or_english(system: CalendarSystem, language: Language) -> WeekdayTables {
    weekday_tables(system, language).unwrap_or_else(|| {
        log::debug!("no {system} weekday names for {language}; using English");
        (&DAYS_EN, &SHORT_DAYS_EN)
    })
}

/// Returns the weekday names of `system` in `language`, Sunday first.
pub fn day_names(system: CalendarSystem, language: Language) -> &'static [&'static str; 7] {
    weekday_tables_or_english(system, language).0
}

/// Returns abbreviated weekday names, Sunday first.
pub fn short_day_names(system: CalendarSystem, language: Language) -> &'static [&'static str; 7] {
    weekday_tables_or_english(system, language).1
}

pub fn day_name(system: CalendarSystem, language: Language, weekday: Weekday) -> &'static str {
    day_names(system, language)[usize::from(weekday.index0())]
}

/// Returns the heading shown above a calendar of `system`.  The Islamic
/// titles state that the dates are approximate.
pub fn title(system: CalendarSystem, language: Language) -> &'static str {
    match (language, system) {
        (Language::Amharic, CalendarSystem::Gregorian) => "የግሪጎሪያን ዘመን አቆጣጠር",
        (Language::Amharic, CalendarSystem::Ethiopian) => "የኢትዮጵያ ዘመን አቆጣጠር",
        (Language::Arabic, CalendarSystem::Gregorian) => "التقويم الميلادي",
        (Language::Arabic, CalendarSystem::Islamic) => "التقويم الهجري (تقريبي)",
        (_, CalendarSystem::Gregorian) => "Gregorian Calendar",
        (_, CalendarSystem::Ethiopian) => "Ethiopian Calendar",
        (_, CalendarSystem::Islamic) => "Islamic Calendar (approximate)",
    }
}

/// Returns the era marker written after Islamic years in full dates.
pub(crate) fn era_suffix(system: CalendarSystem, language: Language) -> Option<&'static str> {
    match (system, language) {
        (CalendarSystem::Islamic, Language::Arabic) => Some("هـ"),
        (CalendarSystem::Islamic, _) => Some("AH"),
        _ => None,
    }
}
