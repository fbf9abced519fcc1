//! Particle engines bound to `<canvas>` elements.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom;
use super::timers::DeadlineTimer;
use crate::core::{now_ms, Debounce, ParticleConfig, Result, Scheduled, SiteError};
use crate::particles::{ParticleBehavior, ParticleEngine, Rgba, Surface2d};

/// [`Surface2d`] over a 2D canvas context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Get the 2D context of a canvas.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| SiteError::Js("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SiteError::Js("unexpected context type".into()))?;
        Ok(Self { ctx })
    }
}

impl Surface2d for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_err() {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }
}

struct CanvasLoop<B: ParticleBehavior> {
    canvas: HtmlCanvasElement,
    surface: RefCell<CanvasSurface>,
    engine: RefCell<ParticleEngine<B>>,
    frame: RefCell<Option<AnimationFrame>>,
    resize: RefCell<Debounce>,
    resize_timer: DeadlineTimer,
}

impl<B: ParticleBehavior + 'static> CanvasLoop<B> {
    /// Match the backing store to the element's layout size.
    fn fit(canvas: &HtmlCanvasElement) -> (f64, f64) {
        let width = canvas.offset_width().max(0) as u32;
        let height = canvas.offset_height().max(0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        (width as f64, height as f64)
    }

    fn request_frame(self: &Rc<Self>) {
        let this = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(this) = this.upgrade() {
                this.frame.borrow_mut().take();
                this.engine
                    .borrow_mut()
                    .frame(timestamp, &mut *this.surface.borrow_mut());
                this.request_frame();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_resize(self: &Rc<Self>) {
        self.resize.borrow_mut().trigger(now_ms());
        self.arm_resize();
    }

    fn arm_resize(self: &Rc<Self>) {
        let this: Weak<Self> = Rc::downgrade(self);
        let deadline = self.resize.borrow().next_deadline();
        self.resize_timer.schedule(deadline, move || {
            let Some(this) = this.upgrade() else {
                return;
            };
            if this.resize.borrow_mut().poll(now_ms()) {
                let (width, height) = Self::fit(&this.canvas);
                this.engine.borrow_mut().resize(width, height);
                log::debug!("particle canvas resized to {width}x{height}");
            } else {
                this.arm_resize();
            }
        });
    }
}

/// A running particle background.
///
/// Dropping it cancels the animation frame and removes the resize listener.
pub struct ParticleCanvas<B: ParticleBehavior> {
    state: Rc<CanvasLoop<B>>,
    _resize: EventListener,
}

impl<B: ParticleBehavior + 'static> ParticleCanvas<B> {
    /// Start `count` particles of `behavior` on the canvas `canvas_id`.
    ///
    /// Returns `None`, without error, when the canvas is absent: the
    /// backgrounds are decoration.
    pub fn attach(canvas_id: &str, count: usize, behavior: B, config: &ParticleConfig) -> Option<Self> {
        match Self::try_attach(canvas_id, count, behavior, config) {
            Ok(canvas) => Some(canvas),
            Err(e) => {
                log::debug!("particle canvas '{canvas_id}' skipped: {e}");
                None
            }
        }
    }

    fn try_attach(canvas_id: &str, count: usize, behavior: B, config: &ParticleConfig) -> Result<Self> {
        let canvas: HtmlCanvasElement = dom::by_id(canvas_id)?;
        let surface = CanvasSurface::new(&canvas)?;
        let (width, height) = CanvasLoop::<B>::fit(&canvas);

        let engine = ParticleEngine::new(behavior, count, width, height, fastrand::Rng::new())
            .with_target_fps(config.target_fps)
            .with_resize_policy(config.resize_policy);

        let state = Rc::new(CanvasLoop {
            canvas,
            surface: RefCell::new(surface),
            engine: RefCell::new(engine),
            frame: RefCell::new(None),
            resize: RefCell::new(Debounce::new(config.resize_debounce_ms)),
            resize_timer: DeadlineTimer::default(),
        });

        let window = dom::window()?;
        let weak = Rc::downgrade(&state);
        let resize = EventListener::new(&window, "resize", move |_| {
            if let Some(state) = weak.upgrade() {
                state.on_resize();
            }
        });

        state.request_frame();
        log::debug!("particle canvas '{canvas_id}' started with {count} particles");

        Ok(Self {
            state,
            _resize: resize,
        })
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.state.engine.borrow().frames()
    }
}

impl<B: ParticleBehavior> Drop for ParticleCanvas<B> {
    fn drop(&mut self) {
        self.state.frame.borrow_mut().take();
        self.state.resize_timer.cancel();
    }
}
