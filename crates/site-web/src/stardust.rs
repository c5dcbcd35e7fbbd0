//! Stardust background: the ambient starfield canvas plus the pointer-trail
//! canvas, driven by one perpetual frame loop.
//!
//! Input handlers only record the latest pointer position; the loop consumes
//! at most one spawn batch per rendered frame. While the suppression flag is
//! set the loop keeps scheduling (so it notices when suppression ends) but
//! does no simulation or drawing at all.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use site_core::{Sprite, Star, Starfield, TrailParticle, TrailPool, UiSession};

use crate::dom;
use crate::hooks;
use crate::raf::FrameHandle;

const GOLD: (u8, u8, u8) = (212, 175, 55);
const GLYPH_FONT_FAMILY: &str = "'Cormorant Garamond', serif";

pub struct Stardust {
    bg_canvas: web::HtmlCanvasElement,
    bg_ctx: web::CanvasRenderingContext2d,
    trail_canvas: web::HtmlCanvasElement,
    trail_ctx: web::CanvasRenderingContext2d,
    stars: RefCell<Starfield>,
    trail: RefCell<TrailPool>,
    rng: RefCell<StdRng>,
    pending_spawn: Cell<Option<Vec2>>,
    bounds: Cell<Vec2>,
    last_width: Cell<f32>,
    session: Rc<RefCell<UiSession>>,
}

pub fn attach(document: &web::Document, session: Rc<RefCell<UiSession>>) -> Option<Rc<Stardust>> {
    let bg_canvas = canvas_by_id(document, hooks::STARFIELD_CANVAS_ID)?;
    let trail_canvas = canvas_by_id(document, hooks::TRAIL_CANVAS_ID)?;
    let bg_ctx = context_2d(&bg_canvas)?;
    let trail_ctx = context_2d(&trail_canvas)?;
    let window = web::window()?;

    let stardust = Rc::new(Stardust {
        bg_canvas,
        bg_ctx,
        trail_canvas,
        trail_ctx,
        stars: RefCell::new(Starfield::default()),
        trail: RefCell::new(TrailPool::default()),
        rng: RefCell::new(StdRng::from_entropy()),
        pending_spawn: Cell::new(None),
        bounds: Cell::new(Vec2::ZERO),
        last_width: Cell::new(0.0),
        session,
    });
    stardust.init_surfaces();

    // Trail input: record coordinates only, never simulate in the handler.
    {
        let sd = stardust.clone();
        dom::listen_mouse_passive(&window, "mousemove", move |ev| {
            sd.record_pointer(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        });
    }
    {
        let sd = stardust.clone();
        dom::listen_touch(&window, "touchmove", true, move |ev| {
            if let Some(touch) = ev.touches().get(0) {
                sd.record_pointer(Vec2::new(touch.client_x() as f32, touch.client_y() as f32));
            }
        });
    }

    // Width change is structural (orientation/breakpoint): rebuild the pool.
    // Height-only change (mobile browser chrome) keeps the simulation.
    {
        let sd = stardust.clone();
        dom::listen(&window, "resize", move || {
            let viewport = dom::viewport_now();
            if viewport.width != sd.last_width.get() {
                sd.init_surfaces();
            } else {
                sd.resize_height(viewport.height);
            }
        });
    }

    let sd = stardust.clone();
    let frames = FrameHandle::new(move || sd.frame());
    frames.request();

    Some(stardust)
}

impl Stardust {
    /// Full reinitialization: resize both surfaces and recreate the pool.
    fn init_surfaces(&self) {
        let viewport = dom::viewport_now();
        let bounds = Vec2::new(viewport.width.max(1.0), viewport.height.max(1.0));
        self.bounds.set(bounds);
        self.last_width.set(viewport.width);
        for canvas in [&self.bg_canvas, &self.trail_canvas] {
            canvas.set_width(bounds.x as u32);
            canvas.set_height(bounds.y as u32);
        }
        self.stars
            .borrow_mut()
            .reset(&mut *self.rng.borrow_mut(), bounds);
    }

    fn resize_height(&self, height: f32) {
        let mut bounds = self.bounds.get();
        bounds.y = height.max(1.0);
        self.bounds.set(bounds);
        self.bg_canvas.set_height(bounds.y as u32);
        self.trail_canvas.set_height(bounds.y as u32);
    }

    /// Display-toggle both canvases; the lightbox hides them entirely while
    /// a video is decoding.
    pub fn set_hidden(&self, hidden: bool) {
        let display = if hidden { "none" } else { "" };
        dom::set_style(&self.bg_canvas, "display", display);
        dom::set_style(&self.trail_canvas, "display", display);
    }

    fn record_pointer(&self, at: Vec2) {
        if self.session.borrow().effects_suppressed {
            return;
        }
        self.pending_spawn.set(Some(at));
    }

    fn frame(&self) -> bool {
        if self.session.borrow().effects_suppressed {
            // Keep the loop alive so un-suppression resumes without a kick,
            // but skip every cycle of simulation and drawing.
            self.pending_spawn.set(None);
            return true;
        }

        let bounds = self.bounds.get();
        self.bg_ctx
            .clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
        self.trail_ctx
            .clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);

        let mut rng = self.rng.borrow_mut();

        let mut stars = self.stars.borrow_mut();
        stars.step(&mut *rng, bounds);
        for star in &stars.stars {
            draw_star(&self.bg_ctx, star);
        }

        let mut trail = self.trail.borrow_mut();
        if let Some(at) = self.pending_spawn.take() {
            trail.spawn_batch(&mut *rng, at);
        }
        trail.step();
        for particle in trail.iter() {
            draw_trail_particle(&self.trail_ctx, particle);
        }

        true
    }
}

fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    let canvas = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    if canvas.is_none() {
        log::warn!("stardust: no #{id} canvas, skipping");
    }
    canvas
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

fn rgba(color: (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({}, {}, {}, {:.3})", color.0, color.1, color.2, alpha)
}

fn draw_star(ctx: &web::CanvasRenderingContext2d, star: &Star) {
    match star.sprite {
        Sprite::Glyph(glyph) => {
            ctx.set_font(&format!("{}px {}", star.size, GLYPH_FONT_FAMILY));
            ctx.set_fill_style_str(&rgba(GOLD, star.opacity * 0.8));
            let _ = ctx.fill_text(&glyph.to_string(), star.pos.x as f64, star.pos.y as f64);
        }
        Sprite::Dot => {
            ctx.begin_path();
            let _ = ctx.arc(
                star.pos.x as f64,
                star.pos.y as f64,
                star.size as f64,
                0.0,
                std::f64::consts::TAU,
            );
            let color = if star.gold {
                rgba(GOLD, star.opacity)
            } else {
                rgba((255, 255, 255), star.opacity)
            };
            ctx.set_fill_style_str(&color);
            ctx.fill();
        }
    }
}

fn draw_trail_particle(ctx: &web::CanvasRenderingContext2d, particle: &TrailParticle) {
    let opacity = particle.opacity();
    match particle.sprite {
        Sprite::Glyph(glyph) => {
            ctx.set_font(&format!("{}px {}", particle.size, GLYPH_FONT_FAMILY));
            ctx.set_fill_style_str(&rgba(GOLD, opacity * 0.6));
            let _ = ctx.fill_text(
                &glyph.to_string(),
                particle.pos.x as f64,
                particle.pos.y as f64,
            );
        }
        Sprite::Dot => {
            ctx.begin_path();
            let _ = ctx.arc(
                particle.pos.x as f64,
                particle.pos.y as f64,
                particle.size as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.set_fill_style_str(&rgba(GOLD, opacity));
            ctx.fill();
        }
    }
}
