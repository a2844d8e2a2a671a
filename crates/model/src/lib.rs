pub mod announcement;
pub mod calendar;
pub mod errors;
pub mod filter;
pub mod ids;
pub mod notification;
pub mod profile;
pub mod settings;
pub mod stats;
pub mod training;
pub mod user;
pub mod week;
