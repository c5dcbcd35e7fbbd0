// Tests for the stardust populations, driven with a seeded rng so every run
// sees the same particles.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{
    Starfield, TrailPool, STAR_COUNT, STAR_OPACITY_MAX, STAR_OPACITY_MIN, TRAIL_SPAWN_BATCH,
};

const BOUNDS: Vec2 = Vec2::new(1280.0, 800.0);

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn starfield_reset_fills_the_pool() {
    let mut rng = rng();
    let mut field = Starfield::default();
    field.reset(&mut rng, BOUNDS);
    assert_eq!(field.stars.len(), STAR_COUNT);

    // Reset is a full repopulation, not an append.
    field.reset(&mut rng, BOUNDS);
    assert_eq!(field.stars.len(), STAR_COUNT);
}

#[test]
fn stars_spawn_inside_the_bounds() {
    let mut rng = rng();
    let mut field = Starfield::default();
    field.reset(&mut rng, BOUNDS);
    for star in &field.stars {
        assert!(star.pos.x >= 0.0 && star.pos.x <= BOUNDS.x);
        assert!(star.pos.y >= 0.0 && star.pos.y <= BOUNDS.y);
    }
}

#[test]
fn star_pool_size_is_invariant_under_stepping() {
    let mut rng = rng();
    let mut field = Starfield::default();
    field.reset(&mut rng, BOUNDS);

    // Long run: drifting stars leave the bounds and respawn in place.
    for _ in 0..10_000 {
        field.step(&mut rng, BOUNDS);
    }
    assert_eq!(field.stars.len(), STAR_COUNT);
    for star in &field.stars {
        assert!(star.opacity.is_finite());
        // One breathing step of slack on either side of the limits.
        assert!(star.opacity > STAR_OPACITY_MIN - 0.01);
        assert!(star.opacity < STAR_OPACITY_MAX + 0.01);
    }
}

#[test]
fn trail_spawn_batch_has_fixed_size() {
    let mut rng = rng();
    let mut pool = TrailPool::default();
    pool.spawn_batch(&mut rng, Vec2::new(100.0, 100.0));
    assert_eq!(pool.len(), TRAIL_SPAWN_BATCH);
    pool.spawn_batch(&mut rng, Vec2::new(200.0, 200.0));
    assert_eq!(pool.len(), TRAIL_SPAWN_BATCH * 2);
}

#[test]
fn trail_life_decreases_strictly_every_frame() {
    let mut rng = rng();
    let mut pool = TrailPool::default();
    pool.spawn_batch(&mut rng, Vec2::new(50.0, 50.0));

    let mut previous: Vec<f32> = pool.iter().map(|p| p.life).collect();
    for _ in 0..5 {
        pool.step();
        let lives: Vec<f32> = pool.iter().map(|p| p.life).collect();
        for (now, before) in lives.iter().zip(&previous) {
            assert!(now < before, "life must strictly decrease");
        }
        previous = lives;
    }
}

#[test]
fn expired_particles_leave_the_pool_the_same_frame() {
    let mut rng = rng();
    let mut pool = TrailPool::default();
    pool.spawn_batch(&mut rng, Vec2::ZERO);

    // Slowest allowed decay is 0.01 from life 1.0: everything is gone
    // within 101 steps, and nothing with life <= 0 may linger a frame.
    for _ in 0..101 {
        pool.step();
        assert!(pool.iter().all(|p| p.life > 0.0));
    }
    assert!(pool.is_empty());
}

#[test]
fn trail_opacity_tracks_life_and_never_goes_negative() {
    let mut rng = rng();
    let mut pool = TrailPool::default();
    pool.spawn_batch(&mut rng, Vec2::ZERO);
    for _ in 0..200 {
        for p in pool.iter() {
            assert!(p.opacity() >= 0.0);
            assert!(p.opacity() <= 1.0);
        }
        pool.step();
    }
}
