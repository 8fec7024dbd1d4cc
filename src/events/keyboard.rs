use crate::core::is_dismiss_key;
use crate::overlay::CardOverlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, cards: &Rc<RefCell<CardOverlay>>) {
    if is_dismiss_key(&ev.key()) {
        cards.borrow_mut().close_all();
    }
}

pub fn wire_global_keydown(document: &web::Document, cards: Rc<RefCell<CardOverlay>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        super::keyboard::handle_global_keydown(&ev, &cards);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
