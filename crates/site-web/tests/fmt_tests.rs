// Host-side tests for the pure formatting helpers. The crate itself is
// wasm-only, so the module is included directly.

mod fmt {
    include!("../src/fmt.rs");
}

use fmt::*;

#[test]
fn format_time_renders_minutes_and_padded_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(5.0), "0:05");
    assert_eq!(format_time(59.999), "0:59");
    assert_eq!(format_time(60.0), "1:00");
    assert_eq!(format_time(83.4), "1:23");
    assert_eq!(format_time(600.0), "10:00");
    assert_eq!(format_time(3725.0), "62:05");
}

#[test]
fn format_time_handles_unloaded_metadata() {
    // duration is NaN before loadedmetadata and Infinity for live streams.
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(f64::INFINITY), "0:00");
    assert_eq!(format_time(-3.0), "0:00");
}

#[test]
fn seek_fraction_clamps_to_the_bar() {
    assert_eq!(seek_fraction(150.0, 100.0, 200.0), 0.25);
    assert_eq!(seek_fraction(100.0, 100.0, 200.0), 0.0);
    assert_eq!(seek_fraction(300.0, 100.0, 200.0), 1.0);
    // Pointer outside the bar during a drag.
    assert_eq!(seek_fraction(50.0, 100.0, 200.0), 0.0);
    assert_eq!(seek_fraction(1000.0, 100.0, 200.0), 1.0);
}

#[test]
fn seek_fraction_survives_a_zero_width_bar() {
    let f = seek_fraction(150.0, 100.0, 0.0);
    assert_eq!(f, 0.0);
    assert!(f.is_finite());
    assert_eq!(seek_fraction(150.0, 100.0, -5.0), 0.0);
}

#[test]
fn percent_width_formats_css_percentages() {
    assert_eq!(percent_width(0.0), "0.00%");
    assert_eq!(percent_width(0.5), "50.00%");
    assert_eq!(percent_width(1.0), "100.00%");
    assert_eq!(percent_width(0.12345), "12.35%");
}
