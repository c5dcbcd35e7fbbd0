//! Platform-free interaction logic for the portfolio front-end.
//!
//! Everything that can be expressed without touching the DOM lives here so
//! it compiles and tests natively: the scroll-linked animation state and its
//! convergence rules, registry reconciliation, the idle-aware frame loop,
//! both particle populations, and the shared UI session flags. The `site-web`
//! crate supplies the browser half (element handles, canvases, event wiring).

pub mod constants;
pub mod driver;
pub mod math;
pub mod particles;
pub mod registry;
pub mod scroll;
pub mod session;

pub use constants::*;
pub use driver::FrameLoop;
pub use math::lerp;
pub use particles::{Sprite, Star, Starfield, TrailParticle, TrailPool};
pub use registry::Registry;
pub use scroll::{fade_progress, TrackedState, Viewport, VisualState};
pub use session::UiSession;
