//! Scroll-linked visual state for one tracked element.
//!
//! The front-end wraps each animatable DOM element in a [`TrackedState`] and
//! drives it through three phases per frame: measure (`update_target`),
//! advance (`update_current`), render (DOM write, done by the caller). The
//! phases are kept separate so a whole registry can be measured against one
//! consistent viewport snapshot before any writes happen.

use crate::constants::*;
use crate::math::lerp;

/// Viewport snapshot taken once per frame and shared by every measure call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The horizontal line elements fade around.
    #[inline]
    pub fn center_line(&self) -> f32 {
        self.height * 0.5
    }

    /// Narrow layouts get a wider dead zone and a longer fade ramp.
    #[inline]
    pub fn is_narrow(&self) -> bool {
        self.width <= NARROW_BREAKPOINT_PX
    }

    /// Half-height of the dead zone: inside it progress is exactly 0.
    #[inline]
    pub fn safe_zone_half_height(&self) -> f32 {
        let frac = if self.is_narrow() {
            SAFE_ZONE_FRAC_NARROW
        } else {
            SAFE_ZONE_FRAC
        };
        self.height * frac
    }

    /// Distance at which fade progress saturates to 1.
    #[inline]
    pub fn max_fade_distance(&self) -> f32 {
        let frac = if self.is_narrow() {
            MAX_FADE_FRAC_NARROW
        } else {
            MAX_FADE_FRAC
        };
        self.height * frac
    }
}

/// The three scalars the animator eases per element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    /// 0..=1, written to the element's opacity.
    pub opacity: f32,
    /// Vertical parallax offset in CSS pixels.
    pub translate_y: f32,
    /// Uniform scale around 1.0.
    pub scale: f32,
}

impl VisualState {
    /// Entry state for a freshly tracked element. Opacity is seeded from any
    /// pre-existing inline style so re-tracking never flashes.
    pub fn entry(seed_opacity: f32) -> Self {
        Self {
            opacity: seed_opacity,
            translate_y: 0.0,
            scale: ENTRY_SCALE,
        }
    }
}

/// Current/target pair for one element.
///
/// Invariant: `current` is only mutated by [`update_current`]
/// (the lerp step); `target` only by [`update_target`] (the measure step).
///
/// [`update_current`]: TrackedState::update_current
/// [`update_target`]: TrackedState::update_target
#[derive(Clone, Debug)]
pub struct TrackedState {
    pub current: VisualState,
    target: VisualState,
}

impl TrackedState {
    pub fn new(seed_opacity: f32) -> Self {
        let entry = VisualState::entry(seed_opacity);
        Self {
            current: entry,
            target: entry,
        }
    }

    pub fn target(&self) -> &VisualState {
        &self.target
    }

    /// Measure phase. `rect_top` is the element's on-screen top edge as
    /// currently rendered; the applied translation is subtracted back out to
    /// recover the natural, untransformed position (the transform itself
    /// shifts the measured bounding box).
    pub fn update_target(&mut self, rect_top: f32, height: f32, viewport: Viewport) {
        let natural_top = rect_top - self.current.translate_y;
        let center = natural_top + height * 0.5;
        let distance = center - viewport.center_line();

        let progress = fade_progress(
            distance.abs(),
            viewport.safe_zone_half_height(),
            viewport.max_fade_distance(),
        );

        self.target.opacity = 1.0 - progress * OPACITY_FADE_DEPTH;
        self.target.translate_y = distance * PARALLAX_RATE;
        self.target.scale = 1.0 - progress * SCALE_FADE_DEPTH;
    }

    /// Advance phase: ease `current` toward `target` by one frame's worth of
    /// smoothing. Returns true while the element is still visibly in motion.
    pub fn update_current(&mut self) -> bool {
        self.current.opacity = lerp(self.current.opacity, self.target.opacity, SMOOTHING_FACTOR);
        self.current.translate_y = lerp(
            self.current.translate_y,
            self.target.translate_y,
            SMOOTHING_FACTOR,
        );
        self.current.scale = lerp(self.current.scale, self.target.scale, SMOOTHING_FACTOR);

        let settled = (self.current.opacity - self.target.opacity).abs() < OPACITY_EPSILON
            && (self.current.translate_y - self.target.translate_y).abs() < TRANSLATE_EPSILON_PX
            && (self.current.scale - self.target.scale).abs() < SCALE_EPSILON;
        !settled
    }
}

/// Map an absolute center-line distance to fade progress in 0..=1.
///
/// Zero inside the dead zone, one at or beyond `max_distance`, linear in
/// between. A degenerate span (`max_distance <= safe_zone`) saturates instead
/// of dividing by zero, so a broken viewport can never poison the state with
/// non-finite values.
pub fn fade_progress(abs_distance: f32, safe_zone: f32, max_distance: f32) -> f32 {
    if abs_distance <= safe_zone {
        return 0.0;
    }
    let span = max_distance - safe_zone;
    if span <= f32::EPSILON {
        return 1.0;
    }
    ((abs_distance - safe_zone) / span).clamp(0.0, 1.0)
}
