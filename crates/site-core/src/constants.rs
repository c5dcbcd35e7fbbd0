// Shared tuning constants for the scroll animation, particle effects and
// cursor. Values match the shipped page; tests pin the relationships between
// them (epsilons vs. smoothing factor, zone ordering).

// Layout breakpoint separating the wide and narrow (mobile) tuning sets.
pub const NARROW_BREAKPOINT_PX: f32 = 768.0;

// Scroll fade geometry, as fractions of viewport height.
pub const SAFE_ZONE_FRAC: f32 = 0.40; // dead zone around the center line
pub const SAFE_ZONE_FRAC_NARROW: f32 = 0.55;
pub const MAX_FADE_FRAC: f32 = 0.55; // progress saturates past this
pub const MAX_FADE_FRAC_NARROW: f32 = 0.75;

// Per-frame exponential smoothing factor for all three animated scalars.
pub const SMOOTHING_FACTOR: f32 = 0.15;

// Progress -> target mappings.
pub const OPACITY_FADE_DEPTH: f32 = 0.8; // opacity = 1 - 0.8 * progress
pub const PARALLAX_RATE: f32 = 0.15; // translate_y = distance * 0.15
pub const SCALE_FADE_DEPTH: f32 = 0.05; // scale = 1 - 0.05 * progress

// Convergence epsilons; below these the element counts as settled.
pub const OPACITY_EPSILON: f32 = 0.005;
pub const TRANSLATE_EPSILON_PX: f32 = 0.1;
pub const SCALE_EPSILON: f32 = 0.0005;

// Entry state for newly tracked elements (scale eases up to 1.0).
pub const ENTRY_SCALE: f32 = 0.95;

// Ambient starfield pool.
pub const STAR_COUNT: usize = 120;
pub const STAR_GLYPH_CHANCE: f32 = 0.15;
pub const STAR_GOLD_CHANCE: f32 = 0.10;
pub const STAR_DRIFT_MAX: f32 = 0.1; // per-axis velocity in +/- px per frame
pub const STAR_FADE_STEP: f32 = 0.005;
pub const STAR_OPACITY_MIN: f32 = 0.1;
pub const STAR_OPACITY_MAX: f32 = 0.8;

// Pointer trail.
pub const TRAIL_SPAWN_BATCH: usize = 2; // particles per rendered frame
pub const TRAIL_GLYPH_CHANCE: f32 = 0.2;
pub const TRAIL_SPEED_MIN: f32 = 0.2;
pub const TRAIL_SPEED_MAX: f32 = 0.7;
pub const TRAIL_DECAY_MIN: f32 = 0.01;
pub const TRAIL_DECAY_MAX: f32 = 0.03;

// Dot sizes (glyph particles use a font size range instead).
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_MAX: f32 = 2.0;
pub const GLYPH_SIZE_MIN: f32 = 8.0;
pub const GLYPH_SIZE_MAX: f32 = 18.0;

// Cursor outline follow factor; snaps while the video overlay is open.
pub const CURSOR_DELAY_NORMAL: f32 = 0.25;
pub const CURSOR_DELAY_SNAP: f32 = 0.9;

// Note glyphs sprinkled through both particle populations.
pub const STAR_GLYPHS: &[char] = &['\u{266a}', '\u{266b}', '\u{266d}', '\u{266f}', '\u{1d11e}'];
pub const TRAIL_GLYPHS: &[char] = &['\u{266a}', '\u{266b}', '\u{266d}', '\u{266f}'];
