//! Capacity and speed conversions shared by the collection sections.
//!
//! Capacities use decimal gigabytes (divide by 1e9), matching what the
//! device database stores for every machine already inventoried.

use crate::constants::{GB_DIVISOR, LINK_SPEED_DIVISOR};

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Disk capacity: bytes to decimal GB, two decimals, trailing zeros dropped
/// (1_000_000_000 renders as "1GB").
pub fn bytes_to_gb(bytes: u64) -> String {
    format!("{}GB", round2(bytes as f64 / GB_DIVISOR))
}

/// Memory capacity: whole decimal GB via integer division.
pub fn bytes_to_whole_gb(bytes: u64) -> String {
    format!("{}GB", bytes / GB_DIVISOR as u64)
}

/// Adapter link speed. The value is bits/second divided by one million;
/// the "MB/second" label is wrong (the figure is megabits), but it is kept
/// as-is because the device database and its reports already use it.
pub fn link_speed(bits_per_second: u64) -> String {
    format!(
        "{} MB/second",
        round2(bits_per_second as f64 / LINK_SPEED_DIVISOR)
    )
}

/// Free-space percentage to one decimal; zero-capacity volumes report 0.
pub fn percent_free(free_bytes: u64, total_bytes: u64) -> f64 {
    if total_bytes == 0 {
        return 0.0;
    }
    round1(free_bytes as f64 * 100.0 / total_bytes as f64)
}
