//! Display formatting helpers
//!
//! Pure string functions for the hosting layer: burn durations as
//! "2d 3h 10m 5s", failure odds as "1 in N", probabilities as
//! percentages. Conventional rounding only; nothing here feeds back
//! into the numeric model.

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// Format a duration in seconds as "Xd Xh Xm Xs"
///
/// Units above the largest non-zero one are dropped; a (near-)zero
/// duration renders as "0s" rather than an empty string.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    if total == 0 {
        return "0s".to_string();
    }

    let days = total / SECONDS_PER_DAY;
    let hours = (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = total % SECONDS_PER_MINUTE;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Format a failure probability as "1 in N" odds
///
/// `N` is `1 / p` rounded to the nearest integer. A probability of 1
/// (or more) renders "1 in 1"; zero or negative probabilities have no
/// finite odds and render "1 in ∞".
pub fn format_odds(failure_probability: f64) -> String {
    if failure_probability >= 1.0 {
        return "1 in 1".to_string();
    }
    if failure_probability <= 0.0 {
        return "1 in ∞".to_string();
    }
    let n = (1.0 / failure_probability).round();
    // a denominator too big for u64 is indistinguishable from "never"
    if n.is_finite() && n <= u64::MAX as f64 {
        format!("1 in {}", n as u64)
    } else {
        "1 in ∞".to_string()
    }
}

/// Format a probability as a percentage with `decimals` fraction digits
pub fn format_percent(probability: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration() {
        assert_eq!(format_duration(0.0), "0s");
        assert_eq!(format_duration(0.2), "0s");
        assert_eq!(format_duration(-5.0), "0s");
    }

    #[test]
    fn test_seconds_only() {
        assert_eq!(format_duration(45.0), "45s");
        assert_eq!(format_duration(45.6), "46s");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_duration(300.0), "5m 0s");
        assert_eq!(format_duration(725.0), "12m 5s");
    }

    #[test]
    fn test_hours_and_days() {
        assert_eq!(format_duration(3_661.0), "1h 1m 1s");
        assert_eq!(format_duration(90_061.0), "1d 1h 1m 1s");
        // intermediate zero units are kept once a larger unit is shown
        assert_eq!(format_duration(86_401.0), "1d 0h 0m 1s");
    }

    #[test]
    fn test_odds() {
        assert_eq!(format_odds(0.5), "1 in 2");
        assert_eq!(format_odds(0.01), "1 in 100");
        assert_eq!(format_odds(0.0003), "1 in 3333");
    }

    #[test]
    fn test_odds_edge_cases() {
        assert_eq!(format_odds(1.0), "1 in 1");
        assert_eq!(format_odds(1.5), "1 in 1");
        assert_eq!(format_odds(0.0), "1 in ∞");
        assert_eq!(format_odds(-0.1), "1 in ∞");
        // tiny but non-zero probabilities have no displayable denominator
        assert_eq!(format_odds(1e-30), "1 in ∞");
        assert_eq!(format_odds(f64::MIN_POSITIVE), "1 in ∞");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(0.95, 1), "95.0%");
        assert_eq!(format_percent(0.9995, 2), "99.95%");
        assert_eq!(format_percent(1.0, 0), "100%");
    }
}
