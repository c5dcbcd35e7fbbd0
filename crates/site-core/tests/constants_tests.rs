// Tests pinning the relationships between tuning constants. These catch
// accidental edits that would silently break convergence or the fade zones.

#![allow(clippy::assertions_on_constants)]

use site_core::*;

#[test]
fn fade_zones_are_ordered_and_sane() {
    // The dead zone must end before progress saturates, on both layouts.
    assert!(SAFE_ZONE_FRAC < MAX_FADE_FRAC);
    assert!(SAFE_ZONE_FRAC_NARROW < MAX_FADE_FRAC_NARROW);

    // Fractions of viewport height stay below a full viewport.
    assert!(MAX_FADE_FRAC <= 1.0);
    assert!(MAX_FADE_FRAC_NARROW <= 1.0);
    assert!(NARROW_BREAKPOINT_PX > 0.0);
}

#[test]
fn smoothing_and_epsilons_allow_convergence() {
    assert!(SMOOTHING_FACTOR > 0.0 && SMOOTHING_FACTOR < 1.0);

    // Epsilons must be reachable: a unit error shrunk by (1 - factor) per
    // frame passes each epsilon within a bounded number of frames.
    let per_frame = 1.0 - SMOOTHING_FACTOR;
    let frames_needed = |eps: f32| (eps.ln() / per_frame.ln()).ceil();
    assert!(frames_needed(OPACITY_EPSILON) < 60.0);
    assert!(frames_needed(TRANSLATE_EPSILON_PX) < 60.0);
    assert!(frames_needed(SCALE_EPSILON) < 60.0);
}

#[test]
fn target_mappings_stay_in_range() {
    // opacity = 1 - depth * progress never goes negative.
    assert!(OPACITY_FADE_DEPTH > 0.0 && OPACITY_FADE_DEPTH <= 1.0);
    assert!(SCALE_FADE_DEPTH > 0.0 && SCALE_FADE_DEPTH < 1.0);
    assert!(PARALLAX_RATE > 0.0 && PARALLAX_RATE < 1.0);
    assert!(ENTRY_SCALE > 0.0 && ENTRY_SCALE < 1.0);
}

#[test]
fn particle_ranges_are_well_formed() {
    assert!(STAR_COUNT > 0);
    assert!(STAR_OPACITY_MIN < STAR_OPACITY_MAX);
    assert!(STAR_FADE_STEP > 0.0);
    assert!(STAR_DRIFT_MAX > 0.0);
    assert!(PARTICLE_SIZE_MIN < PARTICLE_SIZE_MAX);
    assert!(GLYPH_SIZE_MIN < GLYPH_SIZE_MAX);

    assert!(TRAIL_SPAWN_BATCH > 0);
    assert!(TRAIL_SPEED_MIN < TRAIL_SPEED_MAX);
    assert!(TRAIL_DECAY_MIN < TRAIL_DECAY_MAX);
    assert!(TRAIL_DECAY_MIN > 0.0, "zero decay would leak particles");

    // Probabilities.
    assert!((0.0..=1.0).contains(&STAR_GLYPH_CHANCE));
    assert!((0.0..=1.0).contains(&STAR_GOLD_CHANCE));
    assert!((0.0..=1.0).contains(&TRAIL_GLYPH_CHANCE));

    assert!(!STAR_GLYPHS.is_empty());
    assert!(!TRAIL_GLYPHS.is_empty());
}

#[test]
fn cursor_factors_are_valid_lerp_weights() {
    assert!(CURSOR_DELAY_NORMAL > 0.0 && CURSOR_DELAY_NORMAL <= 1.0);
    assert!(CURSOR_DELAY_SNAP > 0.0 && CURSOR_DELAY_SNAP <= 1.0);
    assert!(CURSOR_DELAY_SNAP > CURSOR_DELAY_NORMAL, "overlay cursor snaps");
}
