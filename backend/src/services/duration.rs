//! Expected load duration estimate.

/// Travel minutes per kilometre (an implied 60 km/h average).
pub const MINUTES_PER_KM: f64 = 1.0;

/// Flat unload dwell per stop, in minutes.
pub const DWELL_MINUTES_PER_STOP: f64 = 30.0;

/// Estimate how long a load should take, in whole minutes.
///
/// `round(total_distance_km * MINUTES_PER_KM + stop_count * DWELL_MINUTES_PER_STOP)`.
/// Negative distances are not rejected; callers pass non-negative values.
pub fn expected_duration(total_distance_km: f64, stop_count: usize) -> i64 {
    let minutes = total_distance_km * MINUTES_PER_KM + stop_count as f64 * DWELL_MINUTES_PER_STOP;
    minutes.round() as i64
}
