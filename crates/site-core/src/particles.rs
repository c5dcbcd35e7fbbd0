//! The two stardust populations: an ambient drifting pool and a
//! pointer-driven trail.
//!
//! Both are stepped once per rendered frame by the canvas loop. Drawing is
//! the front-end's job; everything here is plain state so the simulation can
//! be exercised natively with a seeded rng.

use glam::Vec2;
use rand::Rng;

use crate::constants::*;

/// Decorative variant: most particles are plain dots, some are note glyphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sprite {
    Dot,
    Glyph(char),
}

fn pick_glyph<R: Rng>(rng: &mut R, set: &[char]) -> char {
    set[rng.gen_range(0..set.len())]
}

/// One ambient background star. Perpetual: leaving the bounds respawns it.
#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    fade_dir: f32,
    pub sprite: Sprite,
    pub gold: bool,
}

impl Star {
    pub fn spawn<R: Rng>(rng: &mut R, bounds: Vec2) -> Self {
        let is_glyph = rng.gen::<f32>() < STAR_GLYPH_CHANCE;
        let (sprite, size) = if is_glyph {
            (
                Sprite::Glyph(pick_glyph(rng, STAR_GLYPHS)),
                rng.gen_range(GLYPH_SIZE_MIN..GLYPH_SIZE_MAX),
            )
        } else {
            (
                Sprite::Dot,
                rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            )
        };
        Self {
            pos: Vec2::new(
                rng.gen_range(0.0..bounds.x.max(1.0)),
                rng.gen_range(0.0..bounds.y.max(1.0)),
            ),
            vel: Vec2::new(
                rng.gen_range(-STAR_DRIFT_MAX..STAR_DRIFT_MAX),
                rng.gen_range(-STAR_DRIFT_MAX..STAR_DRIFT_MAX),
            ),
            size,
            opacity: rng.gen_range(STAR_OPACITY_MIN..0.6),
            fade_dir: if rng.gen::<bool>() {
                STAR_FADE_STEP
            } else {
                -STAR_FADE_STEP
            },
            sprite,
            gold: !is_glyph && rng.gen::<f32>() < STAR_GOLD_CHANCE,
        }
    }

    fn step<R: Rng>(&mut self, rng: &mut R, bounds: Vec2) {
        self.pos += self.vel;

        // Breathe between the opacity limits.
        self.opacity += self.fade_dir;
        if self.opacity > STAR_OPACITY_MAX || self.opacity < STAR_OPACITY_MIN {
            self.fade_dir = -self.fade_dir;
        }

        if self.pos.x < 0.0 || self.pos.x > bounds.x || self.pos.y < 0.0 || self.pos.y > bounds.y {
            *self = Star::spawn(rng, bounds);
        }
    }
}

/// Fixed-size pool of drifting background stars.
#[derive(Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Populate (or fully repopulate) the pool for the given surface size.
    /// Called at load and whenever the viewport width changes structurally.
    pub fn reset<R: Rng>(&mut self, rng: &mut R, bounds: Vec2) {
        self.stars.clear();
        self.stars
            .extend((0..STAR_COUNT).map(|_| Star::spawn(rng, bounds)));
    }

    pub fn step<R: Rng>(&mut self, rng: &mut R, bounds: Vec2) {
        for star in &mut self.stars {
            star.step(rng, bounds);
        }
    }
}

/// One pointer-trail particle. Finite life, removed on expiry.
#[derive(Clone, Debug)]
pub struct TrailParticle {
    pub pos: Vec2,
    vel: Vec2,
    pub size: f32,
    pub life: f32,
    decay: f32,
    pub sprite: Sprite,
}

impl TrailParticle {
    pub fn spawn<R: Rng>(rng: &mut R, at: Vec2) -> Self {
        let is_glyph = rng.gen::<f32>() < TRAIL_GLYPH_CHANCE;
        let (sprite, size) = if is_glyph {
            (
                Sprite::Glyph(pick_glyph(rng, TRAIL_GLYPHS)),
                rng.gen_range(GLYPH_SIZE_MIN..GLYPH_SIZE_MAX),
            )
        } else {
            (
                Sprite::Dot,
                rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            )
        };
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(TRAIL_SPEED_MIN..TRAIL_SPEED_MAX);
        Self {
            pos: at,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            size,
            life: 1.0,
            decay: rng.gen_range(TRAIL_DECAY_MIN..TRAIL_DECAY_MAX),
            sprite,
        }
    }

    /// Life doubles as draw opacity.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.life.max(0.0)
    }
}

/// Live set of trail particles. Unordered: expiry removal is swap-and-pop.
#[derive(Default)]
pub struct TrailPool {
    particles: Vec<TrailParticle>,
}

impl TrailPool {
    /// Spawn one frame's batch at the latest recorded pointer position.
    /// The caller throttles this to at most once per rendered frame.
    pub fn spawn_batch<R: Rng>(&mut self, rng: &mut R, at: Vec2) {
        for _ in 0..TRAIL_SPAWN_BATCH {
            self.particles.push(TrailParticle::spawn(rng, at));
        }
    }

    /// Advance every particle one frame, removing the ones whose life
    /// reached zero this frame. Draw order is not meaningful, so removal is
    /// O(1) swap-with-last rather than order-preserving.
    pub fn step(&mut self) {
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.pos += p.vel;
            p.life -= p.decay;
            if p.life <= 0.0 {
                self.particles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailParticle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
