//! Idle-aware frame loop state machine.
//!
//! Scroll events can stop firing while the lerp tail is still settling, and
//! a settled page should not burn frames. So the loop is decoupled from
//! wall-clock events: external triggers `kick()` it awake, and it parks
//! itself the first time a full pass finds nothing moving.

/// Two-state (Idle/Running) scheduler for an animation loop.
///
/// The struct is deliberately platform-free: the web crate pairs `kick` with
/// `requestAnimationFrame` scheduling, and tests drive it directly.
#[derive(Debug, Default)]
pub struct FrameLoop {
    running: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wake the loop. Returns true exactly when the caller must schedule a
    /// frame; a kick while already Running is a no-op (idempotent wake).
    pub fn kick(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Report the outcome of a full measure/advance/render pass.
    ///
    /// Returns true while another frame should be scheduled. When nothing
    /// moved, the loop parks and the next `kick()` starts it again.
    pub fn frame_complete(&mut self, any_moving: bool) -> bool {
        if !any_moving {
            self.running = false;
        }
        any_moving
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
