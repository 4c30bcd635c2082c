use crate::constants::{ATTR_LOGO_SRC, ATTR_WORDMARK, PIXEL_CLASS};
use crate::core::constants::{
    DEFAULT_LOGO_SRC, DEFAULT_WORDMARK, WORDMARK_BASELINE_DROP, WORDMARK_FONT_FAMILY,
    WORDMARK_FONT_NARROW_PX, WORDMARK_FONT_WIDE_PX,
};
use crate::core::{stage_offset, ParticleField, Phase, PhaseTimeline, Raster, StudioError};
use crate::dom::{self, js_error};
use crate::timers::TimerSet;
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    pub logo_src: String,
    pub wordmark: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            logo_src: DEFAULT_LOGO_SRC.to_string(),
            wordmark: DEFAULT_WORDMARK.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Defaults overridden by `data-logo-src` / `data-wordmark` on the stage.
    pub fn from_stage(stage: &web::Element) -> Self {
        let mut cfg = Self::default();
        if let Some(src) = dom::data_attr(stage, ATTR_LOGO_SRC) {
            cfg.logo_src = src;
        }
        if let Some(text) = dom::data_attr(stage, ATTR_WORDMARK) {
            cfg.wordmark = text;
        }
        cfg
    }
}

struct Scene {
    ctx: web::CanvasRenderingContext2d,
    size: Vec2,
    offset: Vec2,
    field: ParticleField,
    pixels: Vec<web::HtmlElement>,
    started: Instant,
}

struct LoaderState {
    config: LoaderConfig,
    stage: web::HtmlElement,
    timeline: PhaseTimeline,
    timers: TimerSet,
    scene: Option<Scene>,
    rng: StdRng,
    on_complete: Option<Box<dyn FnOnce()>>,
}

/// A running loader. Dropping it tears the animation down.
pub struct LoaderHandle {
    state: Rc<RefCell<LoaderState>>,
    image: web::HtmlImageElement,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

impl LoaderHandle {
    /// Stops pending phases and removes the particles; completion never fires.
    pub fn cancel(&self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
        let mut st = self.state.borrow_mut();
        if st.timeline.is_cancelled() {
            return;
        }
        st.timeline.cancel();
        st.timers.cancel();
        st.on_complete = None;
        if let Some(scene) = st.scene.take() {
            for px in &scene.pixels {
                px.remove();
            }
        }
        log::info!("[loader] cancelled");
    }
}

impl Drop for LoaderHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Starts the loader on `stage`; `on_complete` runs once when the sequence ends.
pub fn mount(
    stage: web::HtmlElement,
    config: LoaderConfig,
    on_complete: impl FnOnce() + 'static,
) -> Result<LoaderHandle, StudioError> {
    let image = web::HtmlImageElement::new().map_err(js_error)?;
    let state = Rc::new(RefCell::new(LoaderState {
        config,
        stage,
        timeline: PhaseTimeline::new(),
        timers: TimerSet::new(),
        scene: None,
        rng: StdRng::from_entropy(),
        on_complete: Some(Box::new(on_complete)),
    }));

    let weak = Rc::downgrade(&state);
    let image_for_load = image.clone();
    let on_load = Closure::wrap(Box::new(move || {
        let Some(state) = weak.upgrade() else {
            return;
        };
        {
            let st = state.borrow();
            if st.timeline.is_cancelled() || st.timeline.is_complete() {
                return;
            }
        }
        if let Err(e) = start_scene(&state, &image_for_load) {
            log::warn!("[loader] {}", e);
            finish(&state);
        }
    }) as Box<dyn FnMut()>);

    let weak = Rc::downgrade(&state);
    let on_error = Closure::wrap(Box::new(move || {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let src = state.borrow().config.logo_src.clone();
        log::warn!("[loader] {}", StudioError::ImageDecode(src));
        finish(&state);
    }) as Box<dyn FnMut()>);

    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(&state.borrow().config.logo_src);

    Ok(LoaderHandle {
        state,
        image,
        _on_load: on_load,
        _on_error: on_error,
    })
}

fn start_scene(
    state: &Rc<RefCell<LoaderState>>,
    image: &web::HtmlImageElement,
) -> Result<(), StudioError> {
    let (w, h) = (image.natural_width(), image.natural_height());
    if w == 0 || h == 0 {
        return Err(StudioError::ImageDecode(image.src()));
    }
    let document = dom::window_document().ok_or_else(|| StudioError::Js("no document".into()))?;
    let canvas = document
        .create_element("canvas")
        .map_err(js_error)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| StudioError::Js("canvas element expected".into()))?;
    canvas.set_width(w);
    canvas.set_height(h);
    let ctx = canvas
        .get_context("2d")
        .map_err(js_error)?
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or_else(|| StudioError::Js("2d context unavailable".into()))?;
    ctx.draw_image_with_html_image_element(image, 0.0, 0.0)
        .map_err(js_error)?;
    let logo = read_raster(&ctx, w, h)?;

    let mut st = state.borrow_mut();
    let size = Vec2::new(w as f32, h as f32);
    let stage_size = Vec2::new(
        st.stage.client_width() as f32,
        st.stage.client_height() as f32,
    );
    let offset = stage_offset(stage_size, size);
    let field = ParticleField::from_logo(&logo, offset);

    let mut pixels = Vec::with_capacity(field.len());
    for p in field.particles() {
        let px = dom::create_div(&document, PIXEL_CLASS)?;
        dom::set_style(&px, "left", &format!("{}px", p.origin.x));
        dom::set_style(&px, "top", &format!("{}px", p.origin.y));
        dom::set_style(&px, "background-color", &p.css_color());
        st.stage.append_child(&px).map_err(js_error)?;
        pixels.push(px);
    }
    log::info!(
        "[loader] {} particles from {}x{} logo",
        field.len(),
        w,
        h
    );

    st.scene = Some(Scene {
        ctx,
        size,
        offset,
        field,
        pixels,
        started: Instant::now(),
    });

    for phase in Phase::ALL {
        let weak = Rc::downgrade(state);
        st.timers
            .schedule(phase.at_ms(), move || fire(&weak, phase))?;
    }
    Ok(())
}

/// Timer callback for `phase`. Polls the timeline so phases stay in order.
fn fire(weak: &Weak<RefCell<LoaderState>>, phase: Phase) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let completed = {
        let mut st = state.borrow_mut();
        let LoaderState {
            config,
            timeline,
            scene,
            rng,
            on_complete,
            ..
        } = &mut *st;
        let Some(scene) = scene.as_mut() else {
            return;
        };
        // the timer for `phase` guarantees it is due even if clocks disagree slightly
        let elapsed = (scene.started.elapsed().as_secs_f64() * 1000.0).max(phase.at_ms() as f64);
        let mut completed = None;
        for due in timeline.poll(elapsed) {
            log::debug!("[loader] {:?} at {:.0}ms", due, elapsed);
            if due == Phase::Complete {
                completed = on_complete.take();
                continue;
            }
            if let Err(e) = apply_phase(scene, due, &config.wordmark, rng) {
                log::warn!("[loader] {:?} failed: {}", due, e);
            }
        }
        completed
    };
    if let Some(cb) = completed {
        log::info!("[loader] complete");
        cb();
    }
}

fn apply_phase(
    scene: &mut Scene,
    phase: Phase,
    wordmark: &str,
    rng: &mut StdRng,
) -> Result<(), StudioError> {
    match phase {
        Phase::Explode => scene.field.explode(rng),
        Phase::FormText => {
            let text = render_wordmark(&scene.ctx, scene.size, wordmark, dom::is_narrow_viewport())?;
            let targets = ParticleField::target_points(&text, scene.offset);
            scene.field.form_text(&targets);
        }
        Phase::Return => scene.field.return_home(),
        Phase::Complete => {}
    }
    if let Some(transition) = phase.transition() {
        for (px, p) in scene.pixels.iter().zip(scene.field.particles()) {
            dom::set_style(px, "transition", transition);
            dom::set_style(px, "transform", &p.css_translate());
        }
    }
    Ok(())
}

fn render_wordmark(
    ctx: &web::CanvasRenderingContext2d,
    size: Vec2,
    text: &str,
    narrow: bool,
) -> Result<Raster, StudioError> {
    let (w, h) = (size.x as f64, size.y as f64);
    let font_px = if narrow {
        WORDMARK_FONT_NARROW_PX
    } else {
        WORDMARK_FONT_WIDE_PX
    };
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_font(&format!("bold {}px {}", font_px, WORDMARK_FONT_FAMILY));
    ctx.set_text_align("center");
    ctx.set_fill_style_str("#FFFFFF");
    ctx.fill_text(text, w / 2.0, h / 2.0 + WORDMARK_BASELINE_DROP)
        .map_err(js_error)?;
    read_raster(ctx, size.x as u32, size.y as u32)
}

fn read_raster(
    ctx: &web::CanvasRenderingContext2d,
    w: u32,
    h: u32,
) -> Result<Raster, StudioError> {
    let data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(js_error)?;
    Raster::new(w as usize, h as usize, data.data().0)
        .ok_or_else(|| StudioError::ImageDecode("pixel buffer size mismatch".into()))
}

/// Ends the run without animating; used when the logo cannot be decoded.
fn finish(state: &Rc<RefCell<LoaderState>>) {
    let cb = {
        let mut st = state.borrow_mut();
        st.timeline.cancel();
        st.on_complete.take()
    };
    if let Some(cb) = cb {
        cb();
    }
}
