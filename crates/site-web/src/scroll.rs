//! Scroll-linked animation driver: wires the core registry and frame loop to
//! real DOM geometry.
//!
//! Per frame: one viewport snapshot, then a batched read phase
//! (`getBoundingClientRect` for every tracked element), then the
//! compute+write phase (lerp, composited transform, opacity). The loop parks
//! once every element reports settled and wakes again on `kick()`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

use site_core::{FrameLoop, Registry};

use crate::dom;
use crate::hooks;
use crate::raf::FrameHandle;

pub struct ScrollAnimator {
    selector: &'static str,
    registry: RefCell<Registry<u32>>,
    elements: RefCell<Vec<(u32, web::HtmlElement)>>,
    next_id: Cell<u32>,
    state: RefCell<FrameLoop>,
    frames: RefCell<Option<FrameHandle>>,
}

impl ScrollAnimator {
    pub fn new(document: &web::Document, selector: &'static str) -> Rc<Self> {
        let animator = Rc::new(Self {
            selector,
            registry: RefCell::new(Registry::new()),
            elements: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            state: RefCell::new(FrameLoop::new()),
            frames: RefCell::new(None),
        });

        let weak = Rc::downgrade(&animator);
        let handle = FrameHandle::new(move || match weak.upgrade() {
            Some(a) => a.frame(),
            None => false,
        });
        *animator.frames.borrow_mut() = Some(handle);

        animator.reconcile(document);
        animator
    }

    /// Sync tracked elements to the candidate set currently in the DOM.
    /// Elements keep easing across calls; only genuinely new ones are seeded.
    pub fn reconcile(&self, document: &web::Document) {
        let found = dom::query_all(document, self.selector);
        let mut live: Vec<(u32, f32)> = Vec::with_capacity(found.len());
        let mut elements = Vec::with_capacity(found.len());
        for el in found {
            let id = self.element_id(&el);
            live.push((id, dom::inline_opacity(&el)));
            elements.push((id, el));
        }
        self.registry.borrow_mut().reconcile(&live);
        *self.elements.borrow_mut() = elements;
    }

    /// Stable numeric key for an element, stamped into a data attribute the
    /// first time we see it so state survives reconciles.
    fn element_id(&self, el: &web::HtmlElement) -> u32 {
        if let Some(attr) = el.get_attribute(hooks::ANIM_ID_ATTR) {
            if let Ok(id) = attr.parse::<u32>() {
                return id;
            }
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let _ = el.set_attribute(hooks::ANIM_ID_ATTR, &id.to_string());
        id
    }

    /// Wake the driver. Idempotent: a kick while running schedules nothing.
    pub fn kick(&self) {
        if self.state.borrow_mut().kick() {
            if let Some(frames) = self.frames.borrow().as_ref() {
                frames.request();
            }
        }
    }

    /// One full measure/advance/render pass. Returns whether another frame
    /// should run.
    fn frame(&self) -> bool {
        let viewport = dom::viewport_now();
        let elements = self.elements.borrow();
        let mut registry = self.registry.borrow_mut();

        // Read phase: measure everything against the same viewport snapshot
        // before any style write can disturb layout.
        for (id, el) in elements.iter() {
            // An element yanked out of the document mid-frame is left alone
            // here and dropped by the next reconcile.
            if !el.is_connected() {
                continue;
            }
            if let Some(state) = registry.get_mut(id) {
                let rect = el.get_bounding_client_rect();
                state.update_target(rect.top() as f32, el.offset_height() as f32, viewport);
            }
        }

        // Compute + write phase.
        let mut any_moving = false;
        for (id, el) in elements.iter() {
            if !el.is_connected() {
                continue;
            }
            if let Some(state) = registry.get_mut(id) {
                any_moving |= state.update_current();
                render(el, state.current.opacity, state.current.translate_y, state.current.scale);
            }
        }

        self.state.borrow_mut().frame_complete(any_moving)
    }
}

/// Composited transform + opacity write. translate3d keeps the element on
/// its own layer; nothing here triggers layout.
fn render(el: &web::HtmlElement, opacity: f32, translate_y: f32, scale: f32) {
    dom::set_style(
        el,
        "transform",
        &format!("translate3d(0, {translate_y:.2}px, 0) scale({scale:.4})"),
    );
    dom::set_style(el, "opacity", &format!("{opacity:.3}"));
}
