// Tests for the idle-aware frame loop state machine.

use site_core::FrameLoop;

#[test]
fn kick_from_idle_schedules_exactly_once() {
    let mut frame_loop = FrameLoop::new();
    assert!(!frame_loop.is_running());

    assert!(frame_loop.kick(), "first kick must schedule");
    assert!(frame_loop.is_running());

    // Further kicks while running must not schedule duplicate frames.
    assert!(!frame_loop.kick());
    assert!(!frame_loop.kick());
}

#[test]
fn loop_parks_when_nothing_moves() {
    let mut frame_loop = FrameLoop::new();
    frame_loop.kick();

    assert!(frame_loop.frame_complete(true), "motion continues the loop");
    assert!(frame_loop.is_running());

    assert!(!frame_loop.frame_complete(false), "settled frame parks");
    assert!(!frame_loop.is_running());
}

#[test]
fn parked_loop_wakes_on_the_next_kick() {
    let mut frame_loop = FrameLoop::new();

    // Scroll burst, lerp tail, settle, then a later scroll.
    assert!(frame_loop.kick());
    for _ in 0..5 {
        assert!(frame_loop.frame_complete(true));
    }
    assert!(!frame_loop.frame_complete(false));

    assert!(frame_loop.kick(), "kick after parking schedules again");
}
