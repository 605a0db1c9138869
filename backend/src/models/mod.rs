//! Domain records for delivery loads and clock-time arithmetic.

pub mod load;
pub mod time;

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;

pub use load::{Load, StoreStop};
pub use time::{minutes_between, to_minutes_of_day};
