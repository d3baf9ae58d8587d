//! Can Chi day names and zodiac-hour classification
//!
//! Positions a Gregorian calendar day in the 60-day sexagenary cycle and
//! derives its 12 two-hour periods, six of them auspicious (Hoàng Đạo),
//! six inauspicious (Hắc Đạo), each governed by a star.

pub mod hours;
pub mod tables;

pub use hours::{calculate_zodiac_data, day_cycle_indices, ZodiacHour, ZodiacHourData};
