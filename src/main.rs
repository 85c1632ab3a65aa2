use anyhow::Context;
use flexi_logger::Logger;
use lexopt::{Arg, Parser, ValueExt};
use multical::{Calendar, CalendarSystem, CivilDate, DateStyle, GridCell, Language, MonthGrid};
use std::fmt::Write;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Width of each day column, not counting the separating space
const CELL_WIDTH: usize = 4;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Options {
    /// Gregorian date to show; defaults to today
    date: Option<Date>,
    system: CalendarSystem,
    language: Language,
    week_start: u8,
    output: Output,
    verbosity: u8,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
enum Output {
    #[default]
    Grid,
    Template(String),
    Style(DateStyle),
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('c') | Arg::Long("calendar") => {
                    opts.system = parser.value()?.parse()?;
                }
                Arg::Short('l') | Arg::Long("language") => {
                    opts.language = Language::from_tag_or_default(&parser.value()?.string()?);
                }
                Arg::Short('w') | Arg::Long("week-start") => {
                    opts.week_start = parser.value()?.parse::<u8>()? % 7;
                }
                Arg::Short('f') | Arg::Long("format") => {
                    opts.output = Output::Template(parser.value()?.string()?);
                }
                Arg::Short('s') | Arg::Long("style") => {
                    opts.output = Output::Style(parser.value()?.parse()?);
                }
                Arg::Short('v') | Arg::Long("verbose") => {
                    opts.verbosity = opts.verbosity.saturating_add(1);
                }
                Arg::Value(value) if opts.date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => opts.date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                let _logger = Logger::try_with_env_or_str(opts.log_level())
                    .context("failed to configure logging")?
                    .start()
                    .context("failed to start logger")?;
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                print!("{}", opts.render(today)?);
                Ok(())
            }
            Command::Help => {
                println!("Usage: multical [options] [YYYY-MM-DD]");
                println!();
                println!("Show a month of the Gregorian, Ethiopian, or Islamic calendar");
                println!();
                println!("Options:");
                println!("  -c, --calendar <SYSTEM>   gregorian, ethiopian, or islamic [default: gregorian]");
                println!("  -l, --language <LANG>     en, am, ar, or oro [default: en]");
                println!("  -w, --week-start <N>      First day of the week, 0 = Sunday [default: 0]");
                println!("  -f, --format <TEMPLATE>   Print the date using yyyy/mm/dd placeholders");
                println!("  -s, --style <STYLE>       Print the date in full, medium, or short style");
                println!("  -v, --verbose             Log more details to stderr (repeatable)");
                println!("  -h, --help                Display this help message and exit");
                println!("  -V, --version             Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl Options {
    fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn calendar(&self) -> Calendar {
        Calendar::new(self.system)
            .with_language(self.language)
            .with_first_day_of_week(self.week_start)
    }

    fn render(&self, today: Date) -> anyhow::Result<String> {
        let calendar = self.calendar();
        let today = CivilDate::from(today);
        let selected = self.date.map_or(today, CivilDate::from);
        let mut out = String::new();
        match &self.output {
            Output::Template(template) => writeln!(out, "{}", calendar.format(selected, template))?,
            Output::Style(style) => writeln!(out, "{}", calendar.format_style(selected, *style))?,
            Output::Grid => {
                let grid = calendar
                    .grid_for(selected, today)
                    .with_context(|| format!("failed to build calendar grid for {selected}"))?;
                write_grid(&mut out, &calendar, &grid, selected.year())?;
            }
        }
        Ok(out)
    }
}

fn write_grid(
    out: &mut String,
    calendar: &Calendar,
    grid: &MonthGrid,
    gregorian_year: i32,
) -> anyhow::Result<()> {
    writeln!(
        out,
        "{} {}",
        calendar.title(),
        calendar.display_year(gregorian_year)
    )?;
    writeln!(out, "{}", calendar.caption(grid.year(), grid.month())?)?;
    let headers = calendar
        .weekday_headers()
        .map(|h| format!("{h:^CELL_WIDTH$}"))
        .join(" ");
    writeln!(out, "{}", headers.trim_end())?;
    for week in grid.weeks() {
        let line = week.iter().map(cell_text).collect::<Vec<_>>().join(" ");
        writeln!(out, "{}", line.trim_end())?;
    }
    if calendar.system().is_approximate() {
        writeln!(
            out,
            "Note: {} dates are approximate and may differ from the observed calendar by a day or two",
            calendar.system()
        )?;
    }
    Ok(())
}

/// Today's date is bracketed, the selected date is angle-bracketed, and days
/// of the neighbouring months are parenthesized.
fn cell_text(cell: &GridCell) -> String {
    let day = cell.day();
    if cell.is_today {
        format!("[{day:2}]")
    } else if cell.is_selected {
        format!("<{day:2}>")
    } else if !cell.is_current_month {
        format!("({day:2})")
    } else {
        format!(" {day:2} ")
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        let argv = std::iter::once("multical").chain(args.iter().copied());
        Command::from_parser(Parser::from_iter(argv))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(Options::default()));
    }

    #[test]
    fn test_all_options() {
        let cmd = parse(&[
            "-c",
            "ethiopian",
            "--language=am",
            "-w",
            "8",
            "-vv",
            "--style",
            "full",
            "2024-09-11",
        ])
        .unwrap();
        assert_eq!(
            cmd,
            Command::Run(Options {
                date: Some(date!(2024 - 09 - 11)),
                system: CalendarSystem::Ethiopian,
                language: Language::Amharic,
                week_start: 1,
                output: Output::Style(DateStyle::Full),
                verbosity: 2,
            })
        );
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let Command::Run(opts) = parse(&["-l", "fr"]).unwrap() else {
            panic!("expected a Run command");
        };
        assert_eq!(opts.language, Language::English);
    }

    #[test]
    fn test_bad_values() {
        assert!(parse(&["-c", "julian"]).is_err());
        assert!(parse(&["-s", "tiny"]).is_err());
        assert!(parse(&["-w", "-1"]).is_err());
        assert!(parse(&["2024-02-30"]).is_err());
        assert!(parse(&["2024-03-15", "2024-03-16"]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["-c", "islamic", "--help"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-V"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_log_level() {
        let mut opts = Options::default();
        assert_eq!(opts.log_level(), "warn");
        opts.verbosity = 3;
        assert_eq!(opts.log_level(), "trace");
        opts.verbosity = 200;
        assert_eq!(opts.log_level(), "trace");
    }

    #[test]
    fn test_render_template() {
        let opts = Options {
            system: CalendarSystem::Ethiopian,
            output: Output::Template("yyyy-mm-dd".into()),
            ..Options::default()
        };
        assert_eq!(opts.render(date!(2024 - 09 - 11)).unwrap(), "2017-01-01\n");
    }

    #[test]
    fn test_render_grid() {
        let opts = Options {
            date: Some(date!(2024 - 03 - 20)),
            ..Options::default()
        };
        let text = opts.render(date!(2024 - 03 - 15)).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Gregorian Calendar 2024");
        assert_eq!(lines[1], "March 2024");
        assert_eq!(lines[2], "Sun  Mon  Tue  Wed  Thu  Fri  Sat");
        assert_eq!(lines[3], "(25) (26) (27) (28) (29)   1    2");
        assert_eq!(lines[4], "  3    4    5    6    7    8    9");
        assert_eq!(lines[5], " 10   11   12   13   14  [15]  16");
        assert_eq!(lines[6], " 17   18   19  <20>  21   22   23");
    }

    #[test]
    fn test_render_islamic_note() {
        let opts = Options {
            system: CalendarSystem::Islamic,
            ..Options::default()
        };
        let text = opts.render(date!(2024 - 03 - 15)).unwrap();
        assert!(text.starts_with("Islamic Calendar (approximate) 1445\nRamadan 1445\n"));
        assert!(text.ends_with("by a day or two\n"));
    }
}
