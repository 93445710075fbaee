//! Utility modules.

pub mod datetime;

pub use datetime::{format_date, parse_date, today_days, today_utc};
