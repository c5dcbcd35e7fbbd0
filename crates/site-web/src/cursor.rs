//! Custom two-part cursor: the dot rides the pointer directly, the outline
//! trails it with a lerp whose factor comes from the shared session (snappy
//! while the video overlay is open).

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use site_core::{lerp, UiSession};

use crate::dom;
use crate::hooks;
use crate::raf::FrameHandle;

const CLICK_PULSE_RESET_MS: i32 = 400;

#[derive(Default)]
struct CursorState {
    mouse: Vec2,
    outline: Vec2,
    visible: bool,
}

/// Wire the cursor. Missing hooks (e.g. a page variant without the custom
/// cursor) degrade to a no-op.
pub fn attach(document: &web::Document, session: Rc<RefCell<UiSession>>) {
    let Some(dot) = dom::query(document, hooks::CURSOR_DOT) else {
        log::warn!("cursor: no {} element, skipping", hooks::CURSOR_DOT);
        return;
    };
    let Some(outline) = dom::query(document, hooks::CURSOR_OUTLINE) else {
        log::warn!("cursor: no {} element, skipping", hooks::CURSOR_OUTLINE);
        return;
    };
    let Some(window) = web::window() else { return };

    let state = Rc::new(RefCell::new(CursorState::default()));

    // Pointer tracking: the dot is written synchronously (it must not lag),
    // the outline only records the target for the frame loop.
    {
        let state = state.clone();
        let dot = dot.clone();
        let outline = outline.clone();
        dom::listen_mouse(&window, "mousemove", move |ev| {
            let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let mut st = state.borrow_mut();
            st.mouse = pos;
            dom::set_style(&dot, "transform", &translate_centered(pos));
            if !st.visible {
                // First move: reveal both halves and snap the outline so it
                // does not sweep in from (0, 0).
                st.visible = true;
                st.outline = pos;
                dom::set_style(&dot, "opacity", "1");
                dom::set_style(&outline, "opacity", "1");
            }
        });
    }

    // Click pulse, reset after the CSS animation finishes.
    {
        let outline = outline.clone();
        dom::listen_mouse(&window, "mousedown", move |_| {
            let _ = outline.class_list().add_1(hooks::CURSOR_CLICK_CLASS);
        });
    }
    {
        let outline_reset = outline.clone();
        let pulse_reset = Rc::new(dom::OneShot::new(move || {
            let _ = outline_reset.class_list().remove_1(hooks::CURSOR_CLICK_CLASS);
        }));
        dom::listen_mouse(&window, "mouseup", move |_| {
            pulse_reset.arm(CLICK_PULSE_RESET_MS);
        });
    }

    // Hide when the pointer leaves the window, restore on re-entry.
    {
        let doc = document.clone();
        dom::listen_mouse(document, "mouseout", move |ev| {
            if ev.related_target().is_none() {
                set_hidden(&doc, true);
            }
        });
    }
    {
        let doc = document.clone();
        dom::listen_mouse(document, "mouseover", move |_| {
            set_hidden(&doc, false);
        });
    }

    // Outline follow loop. Perpetual: the lerp target moves with every
    // mousemove and the work per frame is one style write.
    let frames = FrameHandle::new(move || {
        let factor = session.borrow().cursor_delay;
        let mut st = state.borrow_mut();
        st.outline.x = lerp(st.outline.x, st.mouse.x, factor);
        st.outline.y = lerp(st.outline.y, st.mouse.y, factor);
        dom::set_style(&outline, "transform", &translate_centered(st.outline));
        true
    });
    frames.request();
}

/// Show or hide both cursor halves; used by the volume sliders and the
/// fullscreen handler where the native cursor should win.
pub fn set_hidden(document: &web::Document, hidden: bool) {
    let opacity = if hidden { "0" } else { "1" };
    if let Some(dot) = dom::query(document, hooks::CURSOR_DOT) {
        dom::set_style(&dot, "opacity", opacity);
    }
    if let Some(outline) = dom::query(document, hooks::CURSOR_OUTLINE) {
        dom::set_style(&outline, "opacity", opacity);
    }
}

fn translate_centered(pos: Vec2) -> String {
    format!(
        "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%)",
        pos.x, pos.y
    )
}
