//! Clock-string arithmetic for despatch and delivery-window times.
//!
//! Times in the export are wall-clock strings of the form `H:MM` with no date
//! or timezone attached. Everything here works in minute-of-day offsets and
//! never fails: malformed input degrades to a partial parse.

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Convert an `H:MM` clock string into minutes since midnight.
///
/// The hour is the text before the first `:`, the minute the text after it.
/// Each component is read from its leading digits (`"8h"` is hour 8). A
/// component with no leading digits counts as 0. Values are not
/// range-checked, so `"25:00"` yields 1500, and absurdly large components
/// saturate instead of overflowing.
///
/// # Examples
///
/// ```
/// use fleet_insights::models::time::to_minutes_of_day;
///
/// assert_eq!(to_minutes_of_day("8:05"), 485);
/// assert_eq!(to_minutes_of_day("7"), 420);
/// assert_eq!(to_minutes_of_day("7:xx"), 420);
/// assert_eq!(to_minutes_of_day("8h"), 480);
/// ```
pub fn to_minutes_of_day(clock: &str) -> i64 {
    let mut parts = clock.trim().split(':');
    let hours = parts.next().map(parse_component).unwrap_or(0);
    let minutes = parts.next().map(parse_component).unwrap_or(0);
    hours.saturating_mul(MINUTES_PER_HOUR).saturating_add(minutes)
}

/// Absolute difference in minutes between two clock strings.
///
/// Returns 0 when either side is empty. There is no day wraparound:
/// `"23:50"` and `"00:10"` are 1420 minutes apart, not 20.
pub fn minutes_between(a: &str, b: &str) -> i64 {
    if a.trim().is_empty() || b.trim().is_empty() {
        return 0;
    }
    to_minutes_of_day(a)
        .saturating_sub(to_minutes_of_day(b))
        .saturating_abs()
}

/// Optional sign followed by leading digits; trailing text is ignored.
fn parse_component(raw: &str) -> i64 {
    let raw = raw.trim();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d)))
        .saturating_mul(sign)
}
