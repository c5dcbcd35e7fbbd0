//! Class-based reveal effects driven by intersection observers.
//!
//! Elements entering the viewport get the reveal class; elements leaving get
//! a direction-specific class so the exit animation matches which edge they
//! crossed. Complements the lerp driver, which owns the continuous
//! scroll-linked motion.

use web_sys as web;

use crate::dom;
use crate::hooks;

const REVEAL_THRESHOLD: f64 = 0.15;
const REVEAL_ROOT_MARGIN: &str = "-50px 0px -50px 0px";
const TOOLS_THRESHOLD: f64 = 0.3;

pub fn attach(document: &web::Document) {
    wire_reveals(document);
    wire_tools_strip(document);
}

fn wire_reveals(document: &web::Document) {
    let observer = dom::intersection_observer(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |entry| {
        let target = entry.target();
        let classes = target.class_list();
        if entry.is_intersecting() {
            let _ = classes.add_1(hooks::REVEAL_IN);
            let _ = classes.remove_2(hooks::REVEAL_HIDDEN_BOTTOM, hooks::REVEAL_OUT_TOP);
        } else if target.get_bounding_client_rect().top() < 0.0 {
            // Left through the top edge.
            let _ = classes.add_1(hooks::REVEAL_OUT_TOP);
            let _ = classes.remove_1(hooks::REVEAL_IN);
        } else {
            // Left through the bottom edge, or started below the fold.
            let _ = classes.remove_2(hooks::REVEAL_IN, hooks::REVEAL_OUT_TOP);
            let _ = classes.add_1(hooks::REVEAL_HIDDEN_BOTTOM);
        }
    });
    let Some(observer) = observer else { return };
    for el in dom::query_all(document, hooks::ANIMATED) {
        observer.observe(&el);
    }
}

/// The logo strip colors in as a block once 30% of it is visible.
fn wire_tools_strip(document: &web::Document) {
    let Some(strip) = dom::query(document, hooks::TOOLS_STRIP) else {
        return;
    };
    let strip_toggle = strip.clone();
    let observer = dom::intersection_observer(TOOLS_THRESHOLD, None, move |entry| {
        if entry.is_intersecting() {
            let _ = strip_toggle.class_list().add_1("in-view");
        } else {
            let _ = strip_toggle.class_list().remove_1("in-view");
        }
    });
    if let Some(observer) = observer {
        observer.observe(&strip);
    }
}
