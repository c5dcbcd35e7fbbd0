// Tests for the shared UI session flags.

use site_core::{UiSession, CURSOR_DELAY_NORMAL, CURSOR_DELAY_SNAP};

#[test]
fn default_session_is_unsuppressed() {
    let session = UiSession::default();
    assert!(!session.effects_suppressed);
    assert!(!session.menu_open);
    assert_eq!(session.cursor_delay, CURSOR_DELAY_NORMAL);
}

#[test]
fn video_overlay_suppresses_effects_and_snaps_the_cursor() {
    let mut session = UiSession::default();
    session.enter_video_overlay();
    assert!(session.effects_suppressed);
    assert_eq!(session.cursor_delay, CURSOR_DELAY_SNAP);

    session.exit_video_overlay();
    assert!(!session.effects_suppressed);
    assert_eq!(session.cursor_delay, CURSOR_DELAY_NORMAL);
}

#[test]
fn overlay_transitions_do_not_touch_the_menu_flag() {
    let mut session = UiSession::default();
    session.menu_open = true;
    session.enter_video_overlay();
    session.exit_video_overlay();
    assert!(session.menu_open);
}
