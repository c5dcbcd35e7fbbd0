/// Blend `start` toward `end` by a fixed fractional `factor`.
///
/// Applied once per frame this produces exponential convergence toward
/// `end`; the scroll animator and cursor outline both lean on that.
#[inline]
pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}
