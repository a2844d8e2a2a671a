use chrono::NaiveDate;
use model::{
    errors::ScheduleError,
    week::{WeekLabel, WeekWindow},
};

/// Monday..Sunday window `offset` weeks away from the week of `reference`.
///
/// Sunday belongs to the week that ends on it: the Monday anchor is found with
/// the Monday-first remap, not by subtracting the Sunday-first index.
pub fn compute_week_window(
    offset: i64,
    reference: NaiveDate,
) -> Result<WeekWindow, ScheduleError> {
    let out_of_range =
        || ScheduleError::InvalidWindow(format!("week offset {offset} from {reference}"));

    let days = offset.checked_mul(7).ok_or_else(out_of_range)?;
    let start =
        time::shift_days(time::at_monday(reference), days).ok_or_else(out_of_range)?;
    let end = time::shift_days(start, 6).ok_or_else(out_of_range)?;

    Ok(WeekWindow {
        offset,
        start,
        end,
        label: WeekLabel::from_offset(offset),
    })
}
