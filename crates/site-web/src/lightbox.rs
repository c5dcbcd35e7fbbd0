//! Video lightbox with custom transport controls.
//!
//! While the modal is open, heavy page effects are suppressed through the
//! shared session so the decoder gets the frame budget: the stardust
//! canvases are hidden, the scroll driver and trail go quiet, and the cursor
//! outline switches to its snappy follow factor.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use site_core::UiSession;

use crate::dom;
use crate::fmt;
use crate::hooks;
use crate::player::{paint_volume_icon, paint_volume_slider, Player};
use crate::raf::FrameHandle;
use crate::stardust::Stardust;

const AUTOPLAY_DELAY_MS: i32 = 100;
const CONTROLS_HIDE_MS: i32 = 1500;

pub struct Lightbox {
    modal: web::HtmlElement,
    video: web::HtmlVideoElement,
    title: Option<web::HtmlElement>,
    controls: Option<web::HtmlElement>,
    play_icon: Option<web::HtmlElement>,
    time_label: Option<web::HtmlElement>,
    seek_container: Option<web::HtmlElement>,
    seek_bar: Option<web::HtmlElement>,
    open: Cell<bool>,
    seek_dragging: Cell<bool>,
    last_volume: Cell<f64>,
    autoplay: RefCell<Option<dom::OneShot>>,
    controls_hide: RefCell<Option<dom::OneShot>>,
    seek_frames: RefCell<Option<FrameHandle>>,
    session: Rc<RefCell<UiSession>>,
    stardust: Option<Rc<Stardust>>,
    audio_player: Option<Rc<Player>>,
    document: web::Document,
}

pub fn attach(
    document: &web::Document,
    session: Rc<RefCell<UiSession>>,
    stardust: Option<Rc<Stardust>>,
    audio_player: Option<Rc<Player>>,
) -> Option<Rc<Lightbox>> {
    let modal = dom::by_id(document, hooks::VIDEO_MODAL_ID)?;
    let video = document
        .get_element_by_id(hooks::MODAL_VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())?;

    let lightbox = Rc::new(Lightbox {
        modal,
        video,
        title: dom::query(document, hooks::VIDEO_TITLE),
        controls: dom::query(document, hooks::VIDEO_CONTROLS),
        play_icon: dom::query(document, &format!("{} span", hooks::VIDEO_PLAY_BTN)),
        time_label: dom::query(document, hooks::VIDEO_TIME),
        seek_container: dom::query(document, hooks::VIDEO_SEEK_CONTAINER),
        seek_bar: dom::query(document, hooks::VIDEO_SEEK_BAR),
        open: Cell::new(false),
        seek_dragging: Cell::new(false),
        last_volume: Cell::new(1.0),
        autoplay: RefCell::new(None),
        controls_hide: RefCell::new(None),
        seek_frames: RefCell::new(None),
        session,
        stardust,
        audio_player,
        document: document.clone(),
    });

    // Deferred autoplay: let the open transition land before decode starts.
    {
        let weak = Rc::downgrade(&lightbox);
        *lightbox.autoplay.borrow_mut() = Some(dom::OneShot::new(move || {
            if let Some(lb) = weak.upgrade() {
                lb.play_best_effort();
            }
        }));
    }

    // Seek/time rendering while the video is playing.
    {
        let weak = Rc::downgrade(&lightbox);
        let frames = FrameHandle::new(move || match weak.upgrade() {
            Some(lb) => lb.render_seek_frame(),
            None => false,
        });
        let frames_on_play = frames.clone();
        dom::listen(&lightbox.video, "play", move || frames_on_play.request());
        *lightbox.seek_frames.borrow_mut() = Some(frames);
    }

    // Gallery tiles open the modal with their own source.
    for item in dom::query_all(document, hooks::GALLERY_ITEM) {
        let lb = lightbox.clone();
        let item_for_click = item.clone();
        dom::listen(&item, "click", move || {
            let Some(src) = item_for_click.get_attribute("data-video") else {
                return;
            };
            let title = item_for_click
                .query_selector(&format!("{} h3", hooks::GALLERY_INFO))
                .ok()
                .flatten()
                .and_then(|el| el.text_content());
            lb.open(&src, title.as_deref());
        });
    }

    // Close paths: button, backdrop, Escape. Space toggles playback.
    {
        let lb = lightbox.clone();
        if let Some(btn) = dom::query(document, hooks::MODAL_CLOSE_BTN) {
            dom::listen(&btn, "click", move || lb.close());
        }
    }
    {
        let lb = lightbox.clone();
        dom::listen_mouse(&lightbox.modal, "click", move |ev| {
            // Only the backdrop itself, not clicks inside the content box.
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
                .is_some_and(|el| el.id() == hooks::VIDEO_MODAL_ID);
            if on_backdrop {
                lb.close();
            }
        });
    }
    {
        let lb = lightbox.clone();
        dom::listen_key(document, move |ev| {
            if !lb.open.get() {
                return;
            }
            match ev.key().as_str() {
                "Escape" => lb.close(),
                " " => {
                    ev.prevent_default();
                    lb.toggle();
                }
                _ => {}
            }
        });
    }

    // Transport: the button and the video surface itself both toggle.
    if let Some(btn) = dom::query(document, hooks::VIDEO_PLAY_BTN) {
        let lb = lightbox.clone();
        dom::listen(&btn, "click", move || lb.toggle());
    }
    {
        let lb = lightbox.clone();
        dom::listen(&lightbox.video, "click", move || lb.toggle());
    }
    {
        let lb = lightbox.clone();
        dom::listen(&lightbox.video, "ended", move || lb.show_paused_ui());
    }
    wire_seek(&lightbox);
    wire_volume(document, &lightbox);
    wire_fullscreen(document, &lightbox);
    wire_controls_autohide(document, &lightbox);

    Some(lightbox)
}

impl Lightbox {
    pub fn open(&self, src: &str, title: Option<&str>) {
        self.open.set(true);
        self.session.borrow_mut().enter_video_overlay();
        if let Some(stardust) = &self.stardust {
            stardust.set_hidden(true);
        }
        if let Some(player) = &self.audio_player {
            player.pause();
        }
        dom::set_body_scroll_locked(&self.document, true);

        self.video.set_src(src);
        if let (Some(label), Some(title)) = (&self.title, title) {
            label.set_text_content(Some(title));
        }
        if let Some(bar) = &self.seek_bar {
            dom::set_style(bar, "width", "0%");
        }
        let _ = self.modal.class_list().add_1("active");
        self.show_controls();
        if let Some(autoplay) = self.autoplay.borrow().as_ref() {
            autoplay.arm(AUTOPLAY_DELAY_MS);
        }
    }

    pub fn close(&self) {
        if !self.open.get() {
            return;
        }
        self.open.set(false);
        if let Some(autoplay) = self.autoplay.borrow().as_ref() {
            autoplay.clear();
        }
        let _ = self.video.pause();
        // Dropping the source releases the decoder immediately.
        self.video.set_src("");
        let _ = self.video.remove_attribute("src");
        let _ = self.modal.class_list().remove_1("active");

        dom::set_body_scroll_locked(&self.document, false);
        self.session.borrow_mut().exit_video_overlay();
        if let Some(stardust) = &self.stardust {
            stardust.set_hidden(false);
        }
        crate::cursor::set_hidden(&self.document, false);
    }

    fn toggle(&self) {
        if self.video.paused() {
            self.play_best_effort();
        } else {
            let _ = self.video.pause();
            self.show_paused_ui();
        }
    }

    fn play_best_effort(&self) {
        if let Ok(promise) = self.video.play() {
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("video play rejected: {e:?}");
                }
            });
        }
        if let Some(icon) = &self.play_icon {
            icon.set_class_name("icon-pause");
            icon.set_text_content(Some("\u{2759}\u{2759}"));
        }
    }

    fn show_paused_ui(&self) {
        if let Some(icon) = &self.play_icon {
            icon.set_class_name("icon-play");
            icon.set_text_content(Some("\u{25b6}"));
        }
        self.show_controls();
    }

    fn render_seek_frame(&self) -> bool {
        let duration = self.video.duration();
        if duration.is_finite() && duration > 0.0 {
            if !self.seek_dragging.get() {
                if let Some(bar) = &self.seek_bar {
                    let fraction = self.video.current_time() / duration;
                    dom::set_style(bar, "width", &fmt::percent_width(fraction));
                }
            }
            if let Some(label) = &self.time_label {
                let text = format!(
                    "{} / {}",
                    fmt::format_time(self.video.current_time()),
                    fmt::format_time(duration)
                );
                label.set_text_content(Some(&text));
            }
        }
        !self.video.paused()
    }

    fn commit_seek(&self, fraction: f64) {
        let duration = self.video.duration();
        if duration.is_finite() && duration > 0.0 {
            self.video.set_current_time(fraction * duration);
        }
    }

    fn show_controls(&self) {
        if let Some(controls) = &self.controls {
            let _ = controls.class_list().remove_1("controls-hidden");
        }
        if let Some(hide) = self.controls_hide.borrow().as_ref() {
            hide.arm(CONTROLS_HIDE_MS);
        }
    }
}

fn wire_seek(lightbox: &Rc<Lightbox>) {
    let Some(container) = lightbox.seek_container.clone() else {
        return;
    };
    let Some(window) = web::window() else { return };

    {
        let lb = lightbox.clone();
        let container_rect = container.clone();
        dom::listen_mouse(&container, "mousedown", move |ev| {
            let rect = container_rect.get_bounding_client_rect();
            let fraction = fmt::seek_fraction(ev.client_x() as f64, rect.left(), rect.width());
            lb.seek_dragging.set(true);
            if let Some(bar) = &lb.seek_bar {
                dom::set_style(bar, "width", &fmt::percent_width(fraction));
            }
        });
    }
    {
        let lb = lightbox.clone();
        let container_rect = container.clone();
        dom::listen_mouse(&window, "mousemove", move |ev| {
            if lb.seek_dragging.get() {
                let rect = container_rect.get_bounding_client_rect();
                let fraction = fmt::seek_fraction(ev.client_x() as f64, rect.left(), rect.width());
                if let Some(bar) = &lb.seek_bar {
                    dom::set_style(bar, "width", &fmt::percent_width(fraction));
                }
            }
        });
    }
    {
        let lb = lightbox.clone();
        dom::listen_mouse(&window, "mouseup", move |ev| {
            if lb.seek_dragging.get() {
                lb.seek_dragging.set(false);
                let rect = container.get_bounding_client_rect();
                let fraction = fmt::seek_fraction(ev.client_x() as f64, rect.left(), rect.width());
                lb.commit_seek(fraction);
                // The loop may have parked while paused mid-drag.
                if let Some(frames) = lb.seek_frames.borrow().as_ref() {
                    frames.request();
                }
            }
        });
    }
}

fn wire_volume(document: &web::Document, lightbox: &Rc<Lightbox>) {
    let (Some(slider_el), Some(button)) = (
        dom::query(document, hooks::VIDEO_VOLUME_SLIDER),
        dom::query(document, hooks::VIDEO_VOLUME_BTN),
    ) else {
        return;
    };
    let Ok(slider) = slider_el.dyn_into::<web::HtmlInputElement>() else {
        return;
    };

    {
        let lb = lightbox.clone();
        let slider_in = slider.clone();
        let button_in = button.clone();
        dom::listen(&slider, "input", move || {
            let value = slider_in.value_as_number().clamp(0.0, 1.0);
            lb.video.set_volume(value);
            paint_volume_slider(&slider_in, value);
            paint_volume_icon(&button_in, value);
        });
    }
    {
        let lb = lightbox.clone();
        let slider_click = slider.clone();
        let button_click = button.clone();
        dom::listen(&button, "click", move || {
            let volume = lb.video.volume();
            let restored = if volume > 0.0 {
                lb.last_volume.set(volume);
                0.0
            } else {
                lb.last_volume.get()
            };
            lb.video.set_volume(restored);
            slider_click.set_value_as_number(restored);
            paint_volume_slider(&slider_click, restored);
            paint_volume_icon(&button_click, restored);
        });
    }

    if let Some(wrapper) = dom::query(document, hooks::VIDEO_VOLUME_WRAPPER) {
        let doc_enter = document.clone();
        dom::listen_mouse(&wrapper, "mouseenter", move |_| {
            crate::cursor::set_hidden(&doc_enter, true);
        });
        let doc_leave = document.clone();
        dom::listen_mouse(&wrapper, "mouseleave", move |_| {
            crate::cursor::set_hidden(&doc_leave, false);
        });
    }
}

fn wire_fullscreen(document: &web::Document, lightbox: &Rc<Lightbox>) {
    let Some(btn) = dom::query(document, hooks::VIDEO_FULLSCREEN_BTN) else {
        return;
    };
    let Some(content) = dom::query(document, hooks::MODAL_CONTENT) else {
        return;
    };
    let lb = lightbox.clone();
    let doc = document.clone();
    dom::listen(&btn, "click", move || {
        if doc.fullscreen_element().is_some() {
            doc.exit_fullscreen();
        } else if let Err(e) = content.request_fullscreen() {
            log::warn!("fullscreen request rejected: {e:?}");
        }
        // Fullscreen swallows mousemove over the page, keep controls usable.
        lb.show_controls();
    });

    // The custom cursor cannot track the pointer over a fullscreened
    // element; hand control back to the native cursor for the duration.
    let doc_change = document.clone();
    dom::listen(document, "fullscreenchange", move || {
        let fullscreen = doc_change.fullscreen_element().is_some();
        crate::cursor::set_hidden(&doc_change, fullscreen);
    });
}

fn wire_controls_autohide(document: &web::Document, lightbox: &Rc<Lightbox>) {
    let Some(controls) = lightbox.controls.clone() else {
        return;
    };
    {
        let controls_hide = controls.clone();
        let lb = lightbox.clone();
        *lightbox.controls_hide.borrow_mut() = Some(dom::OneShot::new(move || {
            // Never hide while paused; the user is deciding what to do.
            if !lb.video.paused() {
                let _ = controls_hide.class_list().add_1("controls-hidden");
            }
        }));
    }
    if let Some(content) = dom::query(document, hooks::MODAL_CONTENT) {
        let lb = lightbox.clone();
        dom::listen_mouse_passive(&content, "mousemove", move |_| {
            if lb.open.get() {
                lb.show_controls();
            }
        });
    }
}
