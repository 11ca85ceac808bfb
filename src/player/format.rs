use std::time::Duration;

/// Shown instead of a clock when the time is not known yet.
pub const TIME_PLACEHOLDER: &str = "-:--";

/// Format seconds as `m:ss`.
///
/// Non-finite or negative input renders [`TIME_PLACEHOLDER`].
///
/// ```ignore
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(f64::NAN), "-:--");
/// ```
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return TIME_PLACEHOLDER.to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

pub fn format_duration(d: Option<Duration>) -> String {
    d.map_or_else(|| TIME_PLACEHOLDER.to_string(), |d| format_time(d.as_secs_f64()))
}

/// Percent of `duration` covered by `position`, clamped to `0..=100`.
///
/// `None` when the duration is unknown or zero.
pub fn progress_percent(position: Duration, duration: Option<Duration>) -> Option<f64> {
    let total = duration?.as_secs_f64();
    if total <= 0.0 {
        return None;
    }
    Some((position.as_secs_f64() / total * 100.0).clamp(0.0, 100.0))
}
