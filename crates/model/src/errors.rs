use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] eyre::Error),
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid window: {0}")]
    InvalidWindow(String),
}
