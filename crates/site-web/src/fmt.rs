// Pure formatting helpers, host-tested from tests/fmt_tests.rs.

/// Format a media timestamp as `M:SS`. Non-finite durations (metadata not
/// yet loaded) render as `0:00` rather than garbage.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Map a pointer x position over a seek bar to a fraction in 0..=1.
/// A degenerate zero-width bar yields 0 instead of NaN.
pub fn seek_fraction(client_x: f64, rect_left: f64, rect_width: f64) -> f64 {
    if rect_width <= 0.0 {
        return 0.0;
    }
    ((client_x - rect_left) / rect_width).clamp(0.0, 1.0)
}

/// Width style for a progress bar at `fraction` of full.
pub fn percent_width(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}
