use std::{
    env::{var, VarError},
    sync::Arc,
};

use chrono::{Local, NaiveDate};
use eyre::{bail, eyre, Context, Error};
use ledger::schedule::TimeWindow;
use model::{filter::FilterSelection, ids::MonthId};

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone)]
pub struct EnvInner {
    rust_log: String,
    today: NaiveDate,
    window: TimeWindow,
    selection: FilterSelection,
}

impl Env {
    pub fn rust_log(&self) -> &str {
        &self.0.rust_log
    }

    /// Reference date for week offsets and the "today" list.
    pub fn today(&self) -> NaiveDate {
        self.0.today
    }

    pub fn window(&self) -> TimeWindow {
        self.0.window
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.0.selection
    }

    /// Reads the process environment. `.env` is loaded by the binary first.
    pub fn load() -> Result<Env, Error> {
        let rust_log = var_or("RUST_LOG", "info")?;
        let today = match optional("SCHEDULE_TODAY")? {
            Some(value) => time::parse_date(&value)
                .ok_or_else(|| eyre!("SCHEDULE_TODAY is not a YYYY-MM-DD date: {}", value))?,
            None => Local::now().date_naive(),
        };
        let window = parse_window(&var_or("SCHEDULE_WINDOW", "month")?, today)
            .context("SCHEDULE_WINDOW is invalid")?;
        let selection = FilterSelection::default()
            .trainer(var_or("SCHEDULE_TRAINER", model::filter::ALL)?)
            .location(var_or("SCHEDULE_LOCATION", model::filter::ALL)?)
            .group(var_or("SCHEDULE_GROUP", model::filter::ALL)?);

        Ok(Env(Arc::new(EnvInner {
            rust_log,
            today,
            window,
            selection,
        })))
    }
}

/// Parses `month`, `month:YYYY-MM`, `week`, `week:+N`, `week:-N`, `day` or
/// `day:YYYY-MM-DD`. Bare forms resolve against `today`.
pub fn parse_window(value: &str, today: NaiveDate) -> Result<TimeWindow, Error> {
    let value = value.trim();
    let (kind, arg) = match value.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg.trim())),
        None => (value, None),
    };

    Ok(match (kind, arg) {
        ("month", None) => TimeWindow::Month(MonthId::of(today)),
        ("month", Some(arg)) => {
            let (year, month) = arg
                .split_once('-')
                .ok_or_else(|| eyre!("Expected YYYY-MM, got {}", arg))?;
            let year = year.parse::<i32>().context("Invalid year")?;
            let month = month.parse::<u32>().context("Invalid month")?;
            TimeWindow::Month(MonthId::new(year, month)?)
        }
        ("week", None) => TimeWindow::Week(0),
        ("week", Some(arg)) => {
            let offset = arg.strip_prefix('+').unwrap_or(arg);
            TimeWindow::Week(offset.parse::<i64>().context("Invalid week offset")?)
        }
        ("day", None) => TimeWindow::Day(today),
        ("day", Some(arg)) => TimeWindow::Day(
            time::parse_date(arg).ok_or_else(|| eyre!("Expected YYYY-MM-DD, got {}", arg))?,
        ),
        _ => bail!("Unknown window: {}", value),
    })
}

fn optional(name: &str) -> Result<Option<String>, Error> {
    match var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("{} is not valid unicode", name)),
    }
}

fn var_or(name: &str, default: &str) -> Result<String, Error> {
    Ok(optional(name)?.unwrap_or_else(|| default.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 21).unwrap()
    }

    #[test]
    fn test_bare_windows() {
        assert_eq!(
            parse_window("month", today()).unwrap(),
            TimeWindow::Month(MonthId::new(2024, 8).unwrap())
        );
        assert_eq!(parse_window("week", today()).unwrap(), TimeWindow::Week(0));
        assert_eq!(parse_window(" day ", today()).unwrap(), TimeWindow::Day(today()));
    }

    #[test]
    fn test_windows_with_argument() {
        assert_eq!(
            parse_window("month:2025-02", today()).unwrap(),
            TimeWindow::Month(MonthId::new(2025, 2).unwrap())
        );
        assert_eq!(parse_window("week:+2", today()).unwrap(), TimeWindow::Week(2));
        assert_eq!(parse_window("week:-1", today()).unwrap(), TimeWindow::Week(-1));
        assert_eq!(
            parse_window("day:2024-08-25", today()).unwrap(),
            TimeWindow::Day(NaiveDate::from_ymd_opt(2024, 8, 25).unwrap())
        );
    }

    #[test]
    fn test_load_reads_process_environment() {
        std::env::set_var("SCHEDULE_TODAY", "2024-08-21");
        std::env::set_var("SCHEDULE_WINDOW", "week:-1");
        std::env::set_var("SCHEDULE_LOCATION", "Pool 2");

        let env = Env::load().unwrap();
        assert_eq!(env.today(), today());
        assert_eq!(env.window(), TimeWindow::Week(-1));
        assert_eq!(env.selection(), &FilterSelection::default().location("Pool 2"));
    }

    #[test]
    fn test_invalid_windows() {
        assert!(parse_window("year", today()).is_err());
        assert!(parse_window("month:2024-13", today()).is_err());
        assert!(parse_window("month:2024", today()).is_err());
        assert!(parse_window("week:soon", today()).is_err());
        assert!(parse_window("day:2024-8-25", today()).is_err());
    }
}
