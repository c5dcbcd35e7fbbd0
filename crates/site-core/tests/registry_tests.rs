// Tests for registry reconciliation: the live DOM set changes, animation
// state must survive where the element survives.

use site_core::{Registry, Viewport};

const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

#[test]
fn reconcile_adds_new_entries_with_their_seed() {
    let mut registry: Registry<u32> = Registry::new();
    registry.reconcile(&[(1, 0.0), (2, 0.5)]);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get(&1).unwrap().current.opacity, 0.0);
    assert_eq!(registry.get(&2).unwrap().current.opacity, 0.5);
}

#[test]
fn reconcile_removes_entries_missing_from_the_live_set() {
    let mut registry: Registry<u32> = Registry::new();
    registry.reconcile(&[(1, 0.0), (2, 0.0), (3, 0.0)]);
    registry.reconcile(&[(2, 0.0)]);

    assert_eq!(registry.len(), 1);
    assert!(registry.get(&1).is_none());
    assert!(registry.get(&2).is_some());
    assert!(registry.get(&3).is_none());
}

#[test]
fn reconcile_never_replaces_an_existing_entry() {
    let mut registry: Registry<u32> = Registry::new();
    registry.reconcile(&[(7, 0.0)]);

    // Advance the entry partway through an animation.
    {
        let state = registry.get_mut(&7).unwrap();
        state.update_target(VIEWPORT.center_line() - 50.0, 100.0, VIEWPORT);
        for _ in 0..3 {
            state.update_current();
        }
    }
    let mid_opacity = registry.get(&7).unwrap().current.opacity;
    assert!(mid_opacity > 0.0 && mid_opacity < 1.0);

    // A panel swap re-runs reconcile with a different seed; the easing
    // element must keep its state, not restart from the seed.
    registry.reconcile(&[(7, 0.9)]);
    assert_eq!(registry.get(&7).unwrap().current.opacity, mid_opacity);
}

#[test]
fn reconcile_is_idempotent() {
    let mut registry: Registry<u32> = Registry::new();
    let live = [(1, 0.2), (2, 0.4)];
    registry.reconcile(&live);
    registry.reconcile(&live);
    registry.reconcile(&live);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get(&1).unwrap().current.opacity, 0.2);
}

#[test]
fn empty_live_set_clears_the_registry() {
    let mut registry: Registry<u32> = Registry::new();
    registry.reconcile(&[(1, 0.0)]);
    registry.reconcile(&[]);
    assert!(registry.is_empty());
}
