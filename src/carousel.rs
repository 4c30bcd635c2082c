use crate::constants::{
    CAROUSEL_CARD_CLASS, CAROUSEL_GROUP_CLASS, CAROUSEL_NEXT_ID, CAROUSEL_PREV_ID,
    CAROUSEL_SLOT_CLASS,
};
use crate::core::constants::SPIN_INTERVAL_MS;
use crate::core::{Card, CardFocus, CardLayout, Carousel, StudioError};
use crate::dom::{self, js_error, Listener};
use crate::timers::Interval;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct CarouselInner {
    carousel: Carousel,
    layout: CardLayout,
    group: web::HtmlElement,
    slots: Vec<web::HtmlElement>,
    faces: Vec<web::HtmlElement>,
    spin: Option<Interval>,
}

/// A mounted carousel; dropping it stops the spin and detaches its listeners.
pub struct CarouselHandle {
    inner: Rc<RefCell<CarouselInner>>,
    _listeners: Vec<Listener>,
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.inner.borrow_mut().spin = None;
    }
}

pub fn mount(root: &web::HtmlElement, cards: &[Card]) -> Result<CarouselHandle, StudioError> {
    let document = dom::window_document().ok_or_else(|| StudioError::Js("no document".into()))?;
    let layout = CardLayout::for_viewport(dom::viewport_width());

    let group = dom::create_div(&document, CAROUSEL_GROUP_CLASS)?;
    dom::set_style(&group, "transform-style", "preserve-3d");
    let mut slots = Vec::with_capacity(cards.len());
    let mut faces = Vec::with_capacity(cards.len());
    for card in cards {
        let slot = dom::create_div(&document, CAROUSEL_SLOT_CLASS)?;
        let face = build_face(&document, card)?;
        slot.append_child(&face).map_err(js_error)?;
        group.append_child(&slot).map_err(js_error)?;
        slots.push(slot);
        faces.push(face);
    }
    root.append_child(&group).map_err(js_error)?;

    let inner = Rc::new(RefCell::new(CarouselInner {
        carousel: Carousel::new(cards.len()),
        layout,
        group,
        slots,
        faces,
        spin: None,
    }));
    {
        let st = inner.borrow();
        place_slots(&st);
        render(&st);
    }
    resume(&inner)?;

    let mut listeners = Vec::new();
    for (event, pause) in [
        ("pointerenter", true),
        ("touchstart", true),
        ("pointerleave", false),
        ("touchend", false),
    ] {
        let weak = Rc::downgrade(&inner);
        listeners.push(Listener::new(root, event, move |_| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if pause {
                halt(&inner);
            } else if let Err(e) = resume(&inner) {
                log::warn!("[carousel] resume failed: {}", e);
            }
        })?);
    }

    for (id, forward) in [(CAROUSEL_PREV_ID, false), (CAROUSEL_NEXT_ID, true)] {
        let Some(button) = document.get_element_by_id(id) else {
            continue;
        };
        let weak = Rc::downgrade(&inner);
        listeners.push(Listener::new(&button, "click", move |_| step(&weak, forward))?);
    }

    if let Some(window) = web::window() {
        let weak = Rc::downgrade(&inner);
        listeners.push(Listener::new(&window, "resize", move |_| relayout(&weak))?);
    }

    log::info!(
        "[carousel] {} cards, radius {}px",
        inner.borrow().carousel.card_count(),
        layout.radius
    );
    Ok(CarouselHandle {
        inner,
        _listeners: listeners,
    })
}

fn build_face(document: &web::Document, card: &Card) -> Result<web::HtmlElement, StudioError> {
    let face = dom::create_div(document, CAROUSEL_CARD_CLASS)?;
    let icon = dom::create_div(document, "card-icon")?;
    _ = icon.set_attribute("data-icon", &card.icon);
    let title = document.create_element("h3").map_err(js_error)?;
    title.set_text_content(Some(&card.title));
    let desc = document.create_element("p").map_err(js_error)?;
    desc.set_text_content(Some(&card.description));
    for child in [&*icon, &title, &desc] {
        face.append_child(child).map_err(js_error)?;
    }
    Ok(face)
}

fn place_slots(st: &CarouselInner) {
    for (i, slot) in st.slots.iter().enumerate() {
        dom::set_style(slot, "width", &format!("{}px", st.layout.width));
        dom::set_style(slot, "height", &format!("{}px", st.layout.height));
        dom::set_style(slot, "transform", &st.carousel.card_transform(i, st.layout));
    }
}

fn render(st: &CarouselInner) {
    dom::set_style(&st.group, "transform", &st.carousel.group_transform());
    for (i, face) in st.faces.iter().enumerate() {
        let focus = st.carousel.focus(i);
        _ = face.set_attribute(
            "style",
            &format!("backface-visibility: hidden; {}", focus.css()),
        );
        let classes = face.class_list();
        _ = classes.remove_2(CardFocus::Front.class_name(), CardFocus::Back.class_name());
        _ = classes.add_1(focus.class_name());
    }
}

fn halt(inner: &Rc<RefCell<CarouselInner>>) {
    let mut st = inner.borrow_mut();
    st.carousel.pause();
    st.spin = None;
}

fn resume(inner: &Rc<RefCell<CarouselInner>>) -> Result<(), StudioError> {
    {
        let st = inner.borrow();
        // touch devices send both pointerleave and touchend
        if st.spin.is_some() && !st.carousel.is_paused() {
            return Ok(());
        }
    }
    let weak = Rc::downgrade(inner);
    let interval = Interval::start(SPIN_INTERVAL_MS, move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let mut st = inner.borrow_mut();
        if st.carousel.tick() {
            render(&st);
        }
    })?;
    let mut st = inner.borrow_mut();
    st.carousel.resume();
    st.spin = Some(interval);
    Ok(())
}

fn step(weak: &Weak<RefCell<CarouselInner>>, forward: bool) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut st = inner.borrow_mut();
    if forward {
        st.carousel.next();
    } else {
        st.carousel.prev();
    }
    render(&st);
    log::debug!("[carousel] front cards {:?}", st.carousel.front_facing());
}

fn relayout(weak: &Weak<RefCell<CarouselInner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let layout = CardLayout::for_viewport(dom::viewport_width());
    let mut st = inner.borrow_mut();
    if st.layout != layout {
        st.layout = layout;
        place_slots(&st);
        log::debug!("[carousel] layout now {:?}", layout);
    }
}
