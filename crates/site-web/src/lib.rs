#![cfg(target_arch = "wasm32")]
//! Browser entry point: wires every interactive component of the page to the
//! DOM on load. The pure animation/particle logic lives in `site-core`; this
//! crate owns all the `web-sys` plumbing.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use site_core::UiSession;

mod cursor;
mod dom;
mod fmt;
mod form;
mod hooks;
mod lightbox;
mod nav;
mod player;
mod raf;
mod reveal;
mod scroll;
mod stardust;
mod validate;

use scroll::ScrollAnimator;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // One session shared by everything that reacts to the video overlay or
    // the mobile menu.
    let session = Rc::new(RefCell::new(UiSession::default()));

    let animator = ScrollAnimator::new(&document, hooks::ANIMATED);

    cursor::attach(&document, session.clone());
    let stardust = stardust::attach(&document, session.clone());
    let audio_player = player::attach(&document);
    lightbox::attach(&document, session.clone(), stardust, audio_player);
    nav::attach(&document, session, animator.clone());
    reveal::attach(&document);
    form::attach(&document, animator.clone());

    // Resize changes every measurement; wake the driver so elements ease to
    // their new targets instead of jumping on the next scroll.
    {
        let animator = animator.clone();
        dom::listen(&window, "resize", move || animator.kick());
    }

    // First frame: settle everything toward its initial targets.
    animator.kick();
    log::info!("site-web ready");
    Ok(())
}
