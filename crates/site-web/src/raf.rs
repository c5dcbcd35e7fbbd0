//! `requestAnimationFrame` plumbing.
//!
//! One [`FrameHandle`] owns one long-lived frame closure. Input handlers call
//! `request()` — at most one callback is ever pending, so a burst of events
//! coalesces into a single frame of work. The frame function returns whether
//! it wants another frame; a parked loop keeps its closure and resumes on the
//! next `request()`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FrameInner {
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    pending: Cell<Option<i32>>,
}

#[derive(Clone)]
pub struct FrameHandle {
    inner: Rc<FrameInner>,
}

impl FrameHandle {
    /// Build a handle around a frame function. Nothing is scheduled until
    /// `request()` is called.
    pub fn new(mut frame: impl FnMut() -> bool + 'static) -> Self {
        let inner = Rc::new(FrameInner {
            tick: RefCell::new(None),
            pending: Cell::new(None),
        });
        let inner_tick = inner.clone();
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner_tick.pending.set(None);
            if frame() {
                schedule(&inner_tick);
            }
        }) as Box<dyn FnMut()>));
        Self { inner }
    }

    /// Schedule a frame unless one is already pending.
    pub fn request(&self) {
        if self.inner.pending.get().is_none() {
            schedule(&self.inner);
        }
    }

    /// Cancel a pending frame, if any. Used by the gallery auto-scroll when
    /// user interaction takes over.
    pub fn cancel(&self) {
        if let Some(id) = self.inner.pending.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }
}

fn schedule(inner: &Rc<FrameInner>) {
    let Some(w) = web::window() else { return };
    let tick = inner.tick.borrow();
    let Some(cb) = tick.as_ref() else { return };
    if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        inner.pending.set(Some(id));
    }
}
