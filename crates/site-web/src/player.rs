//! Audio player bar for the project tracks.
//!
//! Seek progress is rendered by a frame loop that runs only while audio is
//! playing (`timeupdate` alone is too coarse). Dragging the seek bar
//! previews the position visually and commits `currentTime` once, on
//! release, so audio never scrubs mid-drag.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::dom;
use crate::fmt;
use crate::hooks;
use crate::raf::FrameHandle;

const PLAY_GLYPH: &str = "\u{25b6}";
const PAUSE_GLYPH: &str = "\u{2759}\u{2759}";

struct PlayerState {
    current: Option<usize>,
    dragging: bool,
    last_volume: f64,
}

pub struct Player {
    audio: web::HtmlAudioElement,
    bar: web::HtmlElement,
    icon: web::HtmlElement,
    track_info: web::HtmlElement,
    seek_container: web::HtmlElement,
    seek_bar: web::HtmlElement,
    visualizer: Option<web::HtmlElement>,
    projects: Vec<web::HtmlElement>,
    state: RefCell<PlayerState>,
    seek_frames: RefCell<Option<FrameHandle>>,
}

pub fn attach(document: &web::Document) -> Option<Rc<Player>> {
    let audio = web::HtmlAudioElement::new().ok()?;
    let bar = dom::query(document, hooks::PLAYER_BAR)?;
    let play_btn = dom::query(document, hooks::PLAY_PAUSE_BTN)?;
    let icon = dom::query(document, &format!("{} span", hooks::PLAY_PAUSE_BTN))?;
    let track_info = dom::query(document, hooks::TRACK_INFO)?;
    let seek_container = dom::query(document, hooks::SEEK_CONTAINER)?;
    let seek_bar = dom::query(document, hooks::SEEK_BAR)?;
    let projects = dom::query_all(document, hooks::PROJECT_ITEM);
    if projects.is_empty() {
        log::warn!("player: no {} elements, skipping", hooks::PROJECT_ITEM);
        return None;
    }

    let player = Rc::new(Player {
        audio,
        bar,
        icon,
        track_info,
        seek_container,
        seek_bar,
        visualizer: dom::query(document, hooks::VISUALIZER),
        projects,
        state: RefCell::new(PlayerState {
            current: None,
            dragging: false,
            last_volume: 1.0,
        }),
        seek_frames: RefCell::new(None),
    });

    // Smooth seek rendering while playing; parks itself when paused.
    {
        let weak = Rc::downgrade(&player);
        let frames = FrameHandle::new(move || match weak.upgrade() {
            Some(p) => p.render_seek_frame(),
            None => false,
        });
        let frames_on_play = frames.clone();
        dom::listen(&player.audio, "play", move || frames_on_play.request());
        *player.seek_frames.borrow_mut() = Some(frames);
    }

    // Track list: click to play, hover for the preview wash.
    for (index, project) in player.projects.iter().enumerate() {
        let p = player.clone();
        dom::listen(project, "click", move || p.play_index(index));
    }
    if let Some(preview) = dom::query(document, hooks::PROJECT_PREVIEW) {
        for project in &player.projects {
            let enter = preview.clone();
            dom::listen_mouse(project, "mouseenter", move |_| {
                dom::set_style(&enter, "opacity", "0.4");
            });
            let leave = preview.clone();
            dom::listen_mouse(project, "mouseleave", move |_| {
                dom::set_style(&leave, "opacity", "0");
            });
        }
    }

    // Transport controls.
    {
        let p = player.clone();
        dom::listen(&play_btn, "click", move || p.toggle());
    }
    if let Some(prev) = dom::query(document, hooks::PREV_BTN) {
        let p = player.clone();
        dom::listen(&prev, "click", move || p.step_track(-1));
    }
    if let Some(next) = dom::query(document, hooks::NEXT_BTN) {
        let p = player.clone();
        dom::listen(&next, "click", move || p.step_track(1));
    }
    {
        let p = player.clone();
        dom::listen(&player.audio, "ended", move || {
            dom::set_style(&p.seek_bar, "width", "100%");
            p.step_track(1); // auto-advance
        });
    }

    wire_seek_drag(&player);
    wire_volume(document, &player);

    Some(player)
}

impl Player {
    /// Play the track behind project `index`; the same index toggles instead
    /// of restarting (matching a second click on the active row).
    pub fn play_index(&self, index: usize) {
        let Some(project) = self.projects.get(index) else {
            return;
        };
        if self.state.borrow().current == Some(index) && !self.audio.src().is_empty() {
            self.toggle();
            return;
        }

        self.state.borrow_mut().current = Some(index);
        if let Some(src) = project.get_attribute("data-audio") {
            self.audio.set_src(&src);
        }
        self.play_best_effort();

        let title = project
            .query_selector(".project-title")
            .ok()
            .flatten()
            .and_then(|el| el.text_content());
        self.update_ui(true, title.as_deref());
        let _ = self.bar.class_list().add_1("active"); // slide up
    }

    /// Toggle play/pause on the loaded track; no-op before the first track.
    pub fn toggle(&self) {
        if self.audio.src().is_empty() {
            return;
        }
        if self.audio.paused() {
            self.play_best_effort();
            self.update_ui(true, None);
        } else {
            let _ = self.audio.pause();
            self.update_ui(false, None);
        }
    }

    /// Pause playback if running; the lightbox calls this when a video opens.
    pub fn pause(&self) {
        if !self.audio.paused() {
            let _ = self.audio.pause();
            self.update_ui(false, None);
        }
    }

    fn step_track(&self, direction: isize) {
        let len = self.projects.len() as isize;
        let current = self.state.borrow().current.map(|i| i as isize).unwrap_or(0);
        let next = (current + direction).rem_euclid(len);
        self.play_index(next as usize);
    }

    /// Autoplay policies can reject `play()`; that is non-fatal by design.
    fn play_best_effort(&self) {
        if let Ok(promise) = self.audio.play() {
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("audio play rejected (interaction needed?): {e:?}");
                }
            });
        }
    }

    fn update_ui(&self, playing: bool, title: Option<&str>) {
        if let Some(title) = title {
            self.track_info.set_text_content(Some(title));
        }
        if playing {
            self.icon.set_class_name("icon-pause");
            self.icon.set_text_content(Some(PAUSE_GLYPH));
        } else {
            self.icon.set_class_name("icon-play");
            self.icon.set_text_content(Some(PLAY_GLYPH));
        }
        if let Some(visualizer) = &self.visualizer {
            dom::set_style(visualizer, "opacity", if playing { "1" } else { "0.5" });
        }
    }

    fn render_seek_frame(&self) -> bool {
        let duration = self.audio.duration();
        if !self.state.borrow().dragging && duration.is_finite() && duration > 0.0 {
            let fraction = self.audio.current_time() / duration;
            dom::set_style(&self.seek_bar, "width", &fmt::percent_width(fraction));
        }
        !self.audio.paused()
    }

    fn seek_fraction_at(&self, client_x: f64) -> f64 {
        let rect = self.seek_container.get_bounding_client_rect();
        fmt::seek_fraction(client_x, rect.left(), rect.width())
    }

    fn preview_seek(&self, client_x: f64) {
        let fraction = self.seek_fraction_at(client_x);
        dom::set_style(&self.seek_bar, "width", &fmt::percent_width(fraction));
    }

    fn commit_seek(&self, fraction: f64) {
        let duration = self.audio.duration();
        if duration.is_finite() && duration > 0.0 {
            self.audio.set_current_time(fraction * duration);
        }
    }

    fn has_duration(&self) -> bool {
        let d = self.audio.duration();
        d.is_finite() && d > 0.0
    }
}

fn wire_seek_drag(player: &Rc<Player>) {
    let Some(window) = web::window() else { return };

    {
        let p = player.clone();
        dom::listen_mouse(&player.seek_container, "mousedown", move |ev| {
            if !p.has_duration() {
                return;
            }
            p.state.borrow_mut().dragging = true;
            p.preview_seek(ev.client_x() as f64);
        });
    }
    {
        let p = player.clone();
        dom::listen_mouse(&window, "mousemove", move |ev| {
            if p.state.borrow().dragging {
                ev.prevent_default();
                p.preview_seek(ev.client_x() as f64);
            }
        });
    }
    {
        let p = player.clone();
        dom::listen_mouse(&window, "mouseup", move |ev| {
            let was_dragging = p.state.borrow().dragging;
            if was_dragging {
                p.state.borrow_mut().dragging = false;
                let fraction = p.seek_fraction_at(ev.client_x() as f64);
                p.commit_seek(fraction);
            }
        });
    }

    // Touch path commits from the rendered bar width: touchend carries no
    // coordinates of its own.
    {
        let p = player.clone();
        dom::listen_touch(&player.seek_container, "touchstart", false, move |ev| {
            if !p.has_duration() {
                return;
            }
            p.state.borrow_mut().dragging = true;
            if let Some(touch) = ev.touches().get(0) {
                p.preview_seek(touch.client_x() as f64);
            }
            ev.prevent_default();
        });
    }
    {
        let p = player.clone();
        dom::listen_touch(&player.seek_container, "touchmove", false, move |ev| {
            if p.state.borrow().dragging {
                if let Some(touch) = ev.touches().get(0) {
                    p.preview_seek(touch.client_x() as f64);
                }
                ev.prevent_default();
            }
        });
    }
    {
        let p = player.clone();
        dom::listen_touch(&player.seek_container, "touchend", true, move |_| {
            let was_dragging = p.state.borrow().dragging;
            if was_dragging {
                p.state.borrow_mut().dragging = false;
                let container = p.seek_container.get_bounding_client_rect().width();
                let bar = p.seek_bar.get_bounding_client_rect().width();
                if container > 0.0 {
                    p.commit_seek((bar / container).clamp(0.0, 1.0));
                }
            }
        });
    }
}

fn wire_volume(document: &web::Document, player: &Rc<Player>) {
    let (Some(slider_el), Some(button)) = (
        dom::query(document, hooks::VOLUME_SLIDER),
        dom::query(document, hooks::VOLUME_BTN),
    ) else {
        return;
    };
    let Ok(slider) = slider_el.dyn_into::<web::HtmlInputElement>() else {
        return;
    };

    paint_volume_slider(&slider, player.audio.volume());
    paint_volume_icon(&button, player.audio.volume());

    {
        let p = player.clone();
        let slider_in = slider.clone();
        let button_in = button.clone();
        dom::listen(&slider, "input", move || {
            let value = slider_in.value_as_number().clamp(0.0, 1.0);
            p.audio.set_volume(value);
            paint_volume_slider(&slider_in, value);
            paint_volume_icon(&button_in, value);
        });
    }
    {
        let p = player.clone();
        let slider_click = slider.clone();
        let button_click = button.clone();
        dom::listen(&button, "click", move || {
            let volume = p.audio.volume();
            let restored = if volume > 0.0 {
                p.state.borrow_mut().last_volume = volume;
                0.0
            } else {
                p.state.borrow().last_volume
            };
            p.audio.set_volume(restored);
            slider_click.set_value_as_number(restored);
            paint_volume_slider(&slider_click, restored);
            paint_volume_icon(&button_click, restored);
        });
    }

    // The range input wants the native cursor.
    if let Some(wrapper) = dom::query(document, hooks::VOLUME_WRAPPER) {
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

pub(crate) fn paint_volume_slider(slider: &web::HtmlInputElement, value: f64) {
    let percent = value * 100.0;
    dom::set_style(
        slider,
        "background",
        &format!(
            "linear-gradient(to right, var(--color-accent) {percent:.0}%, rgba(255, 255, 255, 0.1) {percent:.0}%)"
        ),
    );
}

/// Tri-state speaker icon: muted, quiet (one wave), loud (two waves).
pub(crate) fn paint_volume_icon(button: &web::HtmlElement, volume: f64) {
    const SVG_OPEN: &str = "<svg class=\"volume-icon\" width=\"20\" height=\"20\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\">";
    const SPEAKER: &str = "<polygon points=\"11 5 6 9 2 9 2 15 6 15 11 19 11 5\"></polygon>";
    const MUTE_CROSS: &str = "<line x1=\"23\" y1=\"9\" x2=\"17\" y2=\"15\"></line><line x1=\"17\" y1=\"9\" x2=\"23\" y2=\"15\"></line>";
    const WAVE_NEAR: &str = "<path d=\"M15.54 8.46a5 5 0 0 1 0 7.07\"></path>";
    const WAVE_FAR: &str = "<path d=\"M19.07 4.93a10 10 0 0 1 0 14.14\"></path>";

    let (body, dimmed) = if volume <= 0.0 {
        (format!("{SPEAKER}{MUTE_CROSS}"), true)
    } else if volume < 0.5 {
        (format!("{SPEAKER}{WAVE_NEAR}"), false)
    } else {
        (format!("{SPEAKER}{WAVE_FAR}{WAVE_NEAR}"), false)
    };
    button.set_inner_html(&format!("{SVG_OPEN}{body}</svg>"));
    dom::set_style(button, "opacity", if dimmed { "0.5" } else { "1" });
}
