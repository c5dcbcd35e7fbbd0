//! Shared per-page interaction state.
//!
//! The original page kept these as scattered module-level flags; they live
//! here as explicit fields with one writing component each, shared read-only
//! by everyone else through an `Rc<RefCell<UiSession>>` on the web side.

use crate::constants::{CURSOR_DELAY_NORMAL, CURSOR_DELAY_SNAP};

/// Cross-component UI flags.
#[derive(Clone, Copy, Debug)]
pub struct UiSession {
    /// Suppression flag: true while an exclusive full-screen overlay (the
    /// video lightbox) is active. Disables particle spawning and all
    /// simulation/draw work to free rendering capacity. Writer: lightbox.
    pub effects_suppressed: bool,
    /// Cursor outline follow factor; near-instant inside the overlay.
    /// Writer: lightbox.
    pub cursor_delay: f32,
    /// True while the mobile menu holds the page (body scroll locked); the
    /// nav scroll handler freezes while set. Writer: nav.
    pub menu_open: bool,
}

impl Default for UiSession {
    fn default() -> Self {
        Self {
            effects_suppressed: false,
            cursor_delay: CURSOR_DELAY_NORMAL,
            menu_open: false,
        }
    }
}

impl UiSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_video_overlay(&mut self) {
        self.effects_suppressed = true;
        self.cursor_delay = CURSOR_DELAY_SNAP;
    }

    pub fn exit_video_overlay(&mut self) {
        self.effects_suppressed = false;
        self.cursor_delay = CURSOR_DELAY_NORMAL;
    }
}
