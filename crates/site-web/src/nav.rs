//! Navigation chrome and page-level glue: the merged scroll handler, the
//! mobile menu, the works toggle, and the gallery's drag/auto scrolling.

use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use site_core::UiSession;

use crate::dom;
use crate::hooks;
use crate::raf::FrameHandle;
use crate::scroll::ScrollAnimator;

const NAV_GLASS_THRESHOLD_PX: f64 = 50.0;
const AUTO_SCROLL_SPEED: f64 = 0.5;
const DRAG_SCROLL_GAIN: i32 = 2;

pub fn attach(
    document: &web::Document,
    session: Rc<RefCell<UiSession>>,
    animator: Rc<ScrollAnimator>,
) {
    wire_mobile_menu(document, session.clone());
    wire_scroll_handler(document, session, animator.clone());
    wire_works_toggle(document, animator);
    wire_gallery_drag(document);
    wire_gallery_autoscroll(document);
}

fn wire_mobile_menu(document: &web::Document, session: Rc<RefCell<UiSession>>) {
    let Some(hamburger) = dom::query(document, hooks::HAMBURGER) else {
        return;
    };
    let Some(menu) = dom::query(document, hooks::MOBILE_MENU) else {
        return;
    };

    let close_menu = {
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        let document = document.clone();
        let session = session.clone();
        move || {
            let _ = hamburger.class_list().remove_1("open");
            let _ = menu.class_list().remove_1("active");
            dom::set_body_scroll_locked(&document, false);
            session.borrow_mut().menu_open = false;
        }
    };

    {
        let hamburger_toggle = hamburger.clone();
        let menu = menu.clone();
        let document = document.clone();
        dom::listen(&hamburger, "click", move || {
            let _ = hamburger_toggle.class_list().toggle("open");
            let open = menu.class_list().toggle("active").unwrap_or(false);
            dom::set_body_scroll_locked(&document, open);
            session.borrow_mut().menu_open = open;
        });
    }
    if let Some(close_btn) = dom::query(document, hooks::MOBILE_MENU_CLOSE) {
        let close_menu = close_menu.clone();
        dom::listen(&close_btn, "click", move || close_menu());
    }
    for link in dom::query_all(document, hooks::MOBILE_NAV_ITEM) {
        let close_menu = close_menu.clone();
        dom::listen(&link, "click", move || close_menu());
    }
}

/// The single window scroll handler: kicks the animation driver on every
/// event, and runs the nav chrome (glass effect, footer hide) at most once
/// per frame through a one-shot frame handle.
fn wire_scroll_handler(
    document: &web::Document,
    session: Rc<RefCell<UiSession>>,
    animator: Rc<ScrollAnimator>,
) {
    let Some(window) = web::window() else { return };
    let nav = dom::query(document, hooks::NAV_OVERLAY);
    let footer = dom::query(document, hooks::FOOTER);

    let chrome = FrameHandle::new(move || {
        // Chrome is frozen while the mobile menu owns the viewport.
        if !session.borrow().menu_open {
            if let Some(nav) = &nav {
                if dom::scroll_y() > NAV_GLASS_THRESHOLD_PX {
                    let _ = nav.class_list().add_1("scrolled");
                } else {
                    let _ = nav.class_list().remove_1("scrolled");
                }
                if let Some(footer) = &footer {
                    let viewport_height = dom::viewport_now().height as f64;
                    if footer.get_bounding_client_rect().top() < viewport_height {
                        let _ = nav.class_list().add_1("hidden");
                    } else {
                        let _ = nav.class_list().remove_1("hidden");
                    }
                }
            }
        }
        false // one frame per request; scroll events re-request
    });

    dom::listen_passive(&window, "scroll", move || {
        animator.kick();
        chrome.request();
    });
}

fn wire_works_toggle(document: &web::Document, animator: Rc<ScrollAnimator>) {
    let buttons = dom::query_all(document, hooks::TOGGLE_BTN);
    let containers = dom::query_all(document, hooks::WORKS_CONTAINER);
    if buttons.is_empty() {
        return;
    }

    for button in buttons.clone() {
        let buttons = buttons.clone();
        let containers = containers.clone();
        let document = document.clone();
        let animator = animator.clone();
        let clicked = button.clone();
        dom::listen(&button, "click", move || {
            for b in &buttons {
                let _ = b.class_list().remove_1("active");
            }
            let _ = clicked.class_list().add_1("active");

            let Some(kind) = clicked.get_attribute("data-type") else {
                return;
            };
            let target_id = format!("{kind}-works");
            for container in &containers {
                if container.id() == target_id {
                    let _ = container.class_list().add_1("active");
                } else {
                    let _ = container.class_list().remove_1("active");
                }
            }

            // Audio keeps playing across the switch; videos do not.
            pause_all_videos(&document);

            // Force-reveal the incoming panel so its items do not replay
            // their entrance animation mid-switch.
            if let Some(incoming) = document.get_element_by_id(&target_id) {
                if let Ok(items) = incoming.query_selector_all(hooks::ANIMATED) {
                    for i in 0..items.length() {
                        if let Some(el) = items.get(i).and_then(|n| n.dyn_into::<web::Element>().ok())
                        {
                            let _ = el.class_list().add_1(hooks::REVEAL_IN);
                            let _ = el.class_list().remove_1(hooks::REVEAL_HIDDEN_BOTTOM);
                        }
                    }
                }
            }

            // The visible candidate set changed: re-sync and wake the driver.
            animator.reconcile(&document);
            animator.kick();
        });
    }
}

pub(crate) fn pause_all_videos(document: &web::Document) {
    if let Ok(list) = document.query_selector_all("video") {
        for i in 0..list.length() {
            if let Some(video) = list
                .get(i)
                .and_then(|n| n.dyn_into::<web::HtmlVideoElement>().ok())
            {
                let _ = video.pause();
            }
        }
    }
}

/// Drag-to-scroll for the horizontal gallery. Pointer deltas are doubled so
/// a short drag covers a long strip.
fn wire_gallery_drag(document: &web::Document) {
    let Some(gallery) = dom::query(document, hooks::GALLERY_SCROLL) else {
        return;
    };

    let dragging = Rc::new(Cell::new(false));
    let start_x = Rc::new(Cell::new(0));
    let start_scroll = Rc::new(Cell::new(0));

    {
        let gallery_down = gallery.clone();
        let dragging = dragging.clone();
        let start_x = start_x.clone();
        let start_scroll = start_scroll.clone();
        dom::listen_mouse(&gallery, "mousedown", move |ev| {
            dragging.set(true);
            let _ = gallery_down.class_list().add_1("active");
            start_x.set(ev.page_x() - gallery_down.offset_left());
            start_scroll.set(gallery_down.scroll_left());
        });
    }
    for kind in ["mouseleave", "mouseup"] {
        let gallery_end = gallery.clone();
        let dragging = dragging.clone();
        dom::listen_mouse(&gallery, kind, move |_| {
            dragging.set(false);
            let _ = gallery_end.class_list().remove_1("active");
        });
    }
    {
        let gallery_move = gallery.clone();
        dom::listen_mouse(&gallery, "mousemove", move |ev| {
            if !dragging.get() {
                return;
            }
            ev.prevent_default();
            let x = ev.page_x() - gallery_move.offset_left();
            let walk = (x - start_x.get()) * DRAG_SCROLL_GAIN;
            gallery_move.set_scroll_left(start_scroll.get() - walk);
        });
    }
}

/// Narrow screens: crawl the gallery sideways on its own, looping back at
/// the end. The first touch or click hands control to the user for good;
/// scrolling the strip out of view only pauses it.
fn wire_gallery_autoscroll(document: &web::Document) {
    if !dom::viewport_now().is_narrow() {
        return;
    }
    let Some(gallery) = dom::query(document, &format!("#visual-works {}", hooks::GALLERY_SCROLL))
    else {
        return;
    };

    let interacted = Rc::new(Cell::new(false));
    // scrollLeft is integral; a fractional accumulator keeps the sub-pixel
    // speed from rounding to zero.
    let position = Rc::new(Cell::new(0.0f64));

    let frames = {
        let gallery = gallery.clone();
        let interacted = interacted.clone();
        FrameHandle::new(move || {
            if interacted.get() {
                return false;
            }
            let next = position.get() + AUTO_SCROLL_SPEED;
            let end = (gallery.scroll_width() - gallery.client_width() - 1) as f64;
            position.set(if next >= end { 0.0 } else { next });
            gallery.set_scroll_left(position.get() as i32);
            true
        })
    };

    {
        let interacted = interacted.clone();
        let frames = frames.clone();
        dom::listen_touch(&gallery, "touchstart", true, move |_| {
            interacted.set(true);
            frames.cancel();
        });
    }
    {
        let interacted = interacted.clone();
        let frames = frames.clone();
        dom::listen_mouse(&gallery, "mousedown", move |_| {
            interacted.set(true);
            frames.cancel();
        });
    }

    // Run only while the strip is actually on screen.
    let observer = dom::intersection_observer(0.5, None, move |entry| {
        if entry.is_intersecting() && !interacted.get() {
            frames.request();
        } else {
            frames.cancel();
        }
    });
    if let Some(observer) = observer {
        observer.observe(&gallery);
    }
}
