use chrono::{
    format::{DelayedFormat, StrftimeItems},
    Datelike as _, NaiveDate, Weekday,
};
use model::ids::MonthId;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn fmt_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub fn fmt_date(day: &NaiveDate) -> DelayedFormat<StrftimeItems> {
    day.format("%d.%m.%Y")
}

pub fn fmt_dm(day: &NaiveDate) -> DelayedFormat<StrftimeItems> {
    day.format("%d.%m")
}

pub fn fmt_month(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

pub fn fmt_month_title(month: MonthId) -> String {
    format!("{} {}", fmt_month(month.month()), month.year())
}

/// "Sun 25.08.2024"
pub fn fmt_day_title(day: &NaiveDate) -> String {
    format!("{} {}", fmt_weekday(day.weekday()), fmt_date(day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        let month = MonthId::new(2024, 8).unwrap();
        assert_eq!(fmt_month_title(month), "August 2024");

        let day = NaiveDate::from_ymd_opt(2024, 8, 25).unwrap();
        assert_eq!(fmt_day_title(&day), "Sun 25.08.2024");
        assert_eq!(fmt_dm(&day).to_string(), "25.08");
    }

    #[test]
    fn test_headers_follow_weekdays() {
        let mut day = Weekday::Mon;
        for header in WEEKDAY_HEADERS {
            assert_eq!(fmt_weekday(day), header);
            day = day.succ();
        }
    }
}
