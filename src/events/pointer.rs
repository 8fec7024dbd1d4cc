use crate::constants::{CLOSE_BUTTON_SELECTOR, OVERLAY_ID};
use crate::core::ParticleField;
use crate::dom;
use crate::effects;
use crate::input;
use crate::overlay::CardOverlay;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_mousemove(mouse: Rc<RefCell<input::MouseState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let p = input::client_point(&ev);
        let mut ms = mouse.borrow_mut();
        ms.x = p.x;
        ms.y = p.y;
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

#[derive(Clone)]
pub struct ResizeWiring {
    pub canvas: web::HtmlCanvasElement,
    pub field: Rc<RefCell<ParticleField>>,
    pub rng: Rc<RefCell<StdRng>>,
    pub circles: Rc<Vec<web::Element>>,
}

/// Resize the surface and rebuild the particle set before the next frame.
pub fn wire_resize(w: ResizeWiring) {
    let closure = Closure::wrap(Box::new(move || {
        let (width, height) = dom::sync_canvas_to_viewport(&w.canvas);
        let mut field = w.field.borrow_mut();
        field.resize(width, height, &mut *w.rng.borrow_mut());
        log::info!(
            "[resize] {}x{} -> {} particles",
            width,
            height,
            field.particles.len()
        );
        effects::apply_rest_scale(&w.circles);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

/// Circle clicks open their card; close buttons and the overlay close all.
pub fn wire_card_clicks(
    document: &web::Document,
    circles: &[web::Element],
    cards: Rc<RefCell<CardOverlay>>,
) {
    for circle in circles {
        let Some(section) = circle.get_attribute("data-section") else {
            continue;
        };
        let cards = cards.clone();
        dom::add_click_listener(circle, move || cards.borrow_mut().open(&section));
    }

    for btn in dom::query_all(document, CLOSE_BUTTON_SELECTOR) {
        let cards = cards.clone();
        dom::add_click_listener(&btn, move || cards.borrow_mut().close_all());
    }

    if let Some(ov) = document.get_element_by_id(OVERLAY_ID) {
        dom::add_click_listener(&ov, move || cards.borrow_mut().close_all());
    }
}
