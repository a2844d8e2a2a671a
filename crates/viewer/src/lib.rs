pub mod calendar;
pub mod day;
pub mod feed;
pub mod profile;
pub mod schedule;
pub mod training;
