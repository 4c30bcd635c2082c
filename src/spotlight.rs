use crate::constants::{
    SPOTLIGHT_CARD_SELECTOR, SPOTLIGHT_DIAMETER_PX, SPOTLIGHT_FADE_IN, SPOTLIGHT_FADE_OUT,
};
use crate::core::constants::{SPOTLIGHT_GLOW_RGB, SPOTLIGHT_RADIUS, SPOTLIGHT_VISIBLE_OPACITY};
use crate::core::{SpotlightChange, SpotlightField, StudioError, Tilt};
use crate::dom::{self, js_error, Listener};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Debug, PartialEq)]
pub struct SpotlightConfig {
    pub radius: f32,
    pub glow_rgb: String,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            radius: SPOTLIGHT_RADIUS,
            glow_rgb: SPOTLIGHT_GLOW_RGB.to_string(),
        }
    }
}

struct SpotlightInner {
    grid: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    field: SpotlightField,
}

impl SpotlightInner {
    /// Re-reads grid and card rects; only called when layout may have moved.
    fn refresh_geometry(&mut self) {
        self.field.set_grid(dom::client_rect(&self.grid));
        for (i, card) in self.cards.iter().enumerate() {
            self.field.set_card(i, dom::client_rect(card));
        }
    }
}

/// Light and listeners of a running spotlight. Dropping it removes the light
/// and leaves the cards flat.
struct Active {
    light: web::HtmlElement,
    inner: Rc<RefCell<SpotlightInner>>,
    _listeners: Vec<Listener>,
}

impl Drop for Active {
    fn drop(&mut self) {
        self.light.remove();
        if let Ok(st) = self.inner.try_borrow() {
            for card in &st.cards {
                dom::set_style(card, "transform", &Tilt::default().css());
                _ = card.style().remove_property("--glow");
            }
        }
    }
}

struct Mount {
    grid: web::HtmlElement,
    config: SpotlightConfig,
    active: Option<Active>,
}

impl Mount {
    fn on_resize(&mut self, viewport_width: f64) -> Result<(), StudioError> {
        match SpotlightChange::on_resize(self.active.is_some(), viewport_width) {
            SpotlightChange::Enable => {
                self.active = Some(activate(&self.grid, &self.config)?);
            }
            SpotlightChange::Disable => {
                self.active = None;
                log::info!("[spotlight] disabled on narrow viewport");
            }
            SpotlightChange::Refresh => {
                if let Some(active) = &self.active {
                    active.inner.borrow_mut().refresh_geometry();
                }
            }
            SpotlightChange::Idle => {}
        }
        Ok(())
    }
}

/// Spotlight on the services grid. It runs only above the narrow breakpoint
/// and switches itself on or off as the window crosses it.
pub struct SpotlightHandle {
    _mount: Rc<RefCell<Mount>>,
    _resize: Listener,
}

pub fn mount(grid: web::HtmlElement, config: SpotlightConfig) -> Result<SpotlightHandle, StudioError> {
    let window = web::window().ok_or_else(|| StudioError::Js("no window".into()))?;
    let mount = Rc::new(RefCell::new(Mount {
        grid,
        config,
        active: None,
    }));
    mount.borrow_mut().on_resize(dom::viewport_width())?;
    if mount.borrow().active.is_none() {
        log::info!("[spotlight] disabled on narrow viewport");
    }

    let weak: Weak<RefCell<Mount>> = Rc::downgrade(&mount);
    let resize = Listener::new(&window, "resize", move |_| {
        let Some(mount) = weak.upgrade() else {
            return;
        };
        if let Err(e) = mount.borrow_mut().on_resize(dom::viewport_width()) {
            log::warn!("[spotlight] {}", e);
        }
    })?;
    Ok(SpotlightHandle {
        _mount: mount,
        _resize: resize,
    })
}

fn activate(grid: &web::HtmlElement, config: &SpotlightConfig) -> Result<Active, StudioError> {
    let window = web::window().ok_or_else(|| StudioError::Js("no window".into()))?;
    let document = dom::window_document().ok_or_else(|| StudioError::Js("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| StudioError::MissingElement("body".into()))?;

    let light = dom::create_div(&document, "spotlight")?;
    _ = light.set_attribute("style", &light_css(&config.glow_rgb));
    body.append_child(&light).map_err(js_error)?;

    let nodes = grid
        .query_selector_all(SPOTLIGHT_CARD_SELECTOR)
        .map_err(js_error)?;
    let mut cards = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(card) = nodes.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
            dom::set_style(&card, "--glow-color", &config.glow_rgb);
            dom::set_style(&card, "transition", "transform 0.2s");
            cards.push(card);
        }
    }

    let inner = Rc::new(RefCell::new(SpotlightInner {
        grid: grid.clone(),
        cards,
        field: SpotlightField::new(config.radius),
    }));
    inner.borrow_mut().refresh_geometry();

    let mut listeners = Vec::new();
    {
        let inner = inner.clone();
        let light = light.clone();
        listeners.push(Listener::new(&window, "mousemove", move |ev| {
            if let Some(p) = pointer(&ev) {
                on_move(&inner.borrow(), &light, p);
            }
        })?);
    }
    {
        let inner = inner.clone();
        listeners.push(Listener::new(&window, "scroll", move |_| {
            inner.borrow_mut().refresh_geometry();
        })?);
    }

    let cards = inner.borrow().cards.clone();
    for (i, card) in cards.iter().enumerate() {
        let tilt_inner = inner.clone();
        let tilt_card = card.clone();
        listeners.push(Listener::new(card, "mousemove", move |ev| {
            let Some(p) = pointer(&ev) else {
                return;
            };
            if let Some(tilt) = tilt_inner.borrow().field.tilt(i, p) {
                dom::set_style(&tilt_card, "transform", &tilt.css());
            }
        })?);
        let reset_card = card.clone();
        listeners.push(Listener::new(card, "mouseleave", move |_| {
            dom::set_style(&reset_card, "transform", &Tilt::default().css());
        })?);
    }

    log::info!("[spotlight] tracking {} cards", cards.len());
    Ok(Active {
        light,
        inner,
        _listeners: listeners,
    })
}

fn on_move(st: &SpotlightInner, light: &web::HtmlElement, p: Vec2) {
    if st.field.pointer_inside(p) {
        dom::set_style(light, "transition", SPOTLIGHT_FADE_IN);
        dom::set_style(light, "opacity", &SPOTLIGHT_VISIBLE_OPACITY.to_string());
        dom::set_style(light, "left", &format!("{}px", p.x));
        dom::set_style(light, "top", &format!("{}px", p.y));
    } else {
        dom::set_style(light, "transition", SPOTLIGHT_FADE_OUT);
        dom::set_style(light, "opacity", "0");
    }
    for (i, intensity) in st.field.intensities(p) {
        if let Some(card) = st.cards.get(i) {
            dom::set_style(card, "--glow", &intensity.to_string());
        }
    }
}

#[inline]
fn pointer(ev: &web::Event) -> Option<Vec2> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

fn light_css(glow_rgb: &str) -> String {
    format!(
        "position: fixed; width: {d}px; height: {d}px; border-radius: 50%; pointer-events: none; \
         background: radial-gradient(circle, rgba({c},0.18) 0%, rgba({c},0.08) 25%, transparent 65%); \
         mix-blend-mode: screen; opacity: 0; transform: translate(-50%, -50%); z-index: 30;",
        d = SPOTLIGHT_DIAMETER_PX,
        c = glow_rgb
    )
}
