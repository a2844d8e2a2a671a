use model::{calendar::CalendarCell, errors::ScheduleError, ids::MonthId, training::TrainingSession};

/// Monday-first grid: `leading_padding` empty cells followed by one cell per
/// day of the month. No trailing padding is added.
///
/// Sessions land in a cell when their `date` string equals the cell's
/// `YYYY-MM-DD` key, so malformed dates are never placed.
pub fn build_month_grid(month: MonthId, sessions: &[TrainingSession]) -> Vec<CalendarCell> {
    let padding = leading_padding(month);
    let days = month.days();

    let mut grid = Vec::with_capacity((padding + days) as usize);
    grid.extend((0..padding).map(|_| CalendarCell::Empty));
    for day in 1..=days {
        let key = month.day_key(day);
        let sessions = sessions
            .iter()
            .filter(|s| s.date == key)
            .cloned()
            .collect();
        grid.push(CalendarCell::Day { day, sessions });
    }
    grid
}

pub fn try_build_month_grid(
    year: i32,
    month: u32,
    sessions: &[TrainingSession],
) -> Result<Vec<CalendarCell>, ScheduleError> {
    Ok(build_month_grid(MonthId::new(year, month)?, sessions))
}

pub fn leading_padding(month: MonthId) -> u32 {
    time::leading_padding(month.year(), month.month()).unwrap_or_default()
}
