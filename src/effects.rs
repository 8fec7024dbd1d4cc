//! One-shot and ambient DOM effects around the background: image fallback,
//! entrance and hover animations, the floating profile card, smooth in-page
//! scrolling and image preloading.

use crate::constants::*;
use crate::dom;
use crate::ui;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Swap a broken profile image for an initials badge.
pub fn wire_image_fallback(document: &web::Document) {
    let Some(img) = document.get_element_by_id(PROFILE_IMG_ID) else {
        return;
    };
    let doc = document.clone();
    let img_for_handler = img.clone();
    let mut badged = false;
    let closure = Closure::wrap(Box::new(move || {
        // later errors (e.g. a reassigned src) keep the one badge
        if badged {
            return;
        }
        badged = true;
        log::warn!("[profile] image failed to load, using placeholder");
        dom::set_style(&img_for_handler, "display", "none");
        let Ok(badge) = doc.create_element("div") else {
            return;
        };
        _ = badge.set_attribute("style", &ui::badge_style());
        let name = img_for_handler.get_attribute("alt").unwrap_or_default();
        badge.set_text_content(Some(&ui::initials(&name)));
        if let Some(parent) = img_for_handler.parent_node() {
            _ = parent.append_child(&badge);
        }
    }) as Box<dyn FnMut()>);
    _ = img.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Hide the circles, then fade and scale them in one after another.
pub fn run_entrance(window: &web::Window, circles: &[web::Element]) {
    for circle in circles {
        dom::set_style(circle, "opacity", "0");
        dom::set_style(circle, "transform", &ui::scale_transform(ENTRANCE_START_SCALE));
        dom::set_style(circle, "transition", ENTRANCE_TRANSITION);
    }
    for (i, circle) in circles.iter().enumerate() {
        let circle = circle.clone();
        dom::set_timeout(window, ui::entrance_delay_ms(i), move || {
            dom::set_style(&circle, "opacity", "1");
            dom::set_style(&circle, "transform", &ui::scale_transform(1.0));
        });
    }
}

pub fn wire_hover(document: &web::Document, circles: &[web::Element]) {
    for circle in circles {
        let el = circle.clone();
        let doc = document.clone();
        let enter = Closure::wrap(Box::new(move || {
            dom::set_style(&el, "transform", &ui::scale_transform(HOVER_SCALE));
            spawn_glow(&doc, &el);
        }) as Box<dyn FnMut()>);
        _ = circle.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let el = circle.clone();
        let leave = Closure::wrap(Box::new(move || {
            dom::set_style(&el, "transform", &ui::scale_transform(1.0));
        }) as Box<dyn FnMut()>);
        _ = circle.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    }
}

fn spawn_glow(document: &web::Document, target: &web::Element) {
    let (Some(body), Ok(glow)) = (document.body(), document.create_element("div")) else {
        return;
    };
    let r = target.get_bounding_client_rect();
    let rect = ui::glow_rect(r.left(), r.top(), r.width(), r.height());
    _ = glow.set_attribute("style", &ui::glow_style(rect));
    _ = body.append_child(&glow);
    if let Some(window) = web::window() {
        dom::set_timeout(&window, GLOW_LIFETIME_MS, move || glow.remove());
    }
}

pub fn start_profile_float(window: &web::Window, document: &web::Document) {
    let Ok(Some(card)) = document.query_selector(PROFILE_CARD_SELECTOR) else {
        return;
    };
    dom::set_interval(window, FLOAT_INTERVAL_MS, move || {
        let offset = ui::float_offset_px(js_sys::Date::now());
        dom::set_style(&card, "transform", &ui::float_transform(offset));
    });
}

pub fn inject_keyframes(document: &web::Document) {
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_text_content(Some(INJECTED_CSS));
    _ = head.append_child(&style);
}

pub fn apply_rest_scale(circles: &[web::Element]) {
    let Some(window) = web::window() else {
        return;
    };
    let (width, _) = dom::viewport_size(&window);
    let transform = ui::scale_transform(ui::circle_rest_scale(width));
    for circle in circles {
        dom::set_style(circle, "transform", &transform);
    }
}

pub fn wire_smooth_scroll(document: &web::Document) {
    for link in dom::query_all(document, IN_PAGE_LINK_SELECTOR) {
        let doc = document.clone();
        let href_src = link.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = href_src.get_attribute("href") else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Warm the cache for the profile image once the page has loaded.
pub fn wire_preload(window: &web::Window) {
    let closure = Closure::once_into_js(move || {
        if let Ok(img) = web::HtmlImageElement::new() {
            img.set_src(PROFILE_IMAGE_SRC);
        }
    });
    _ = window.add_event_listener_with_callback("load", closure.unchecked_ref());
}
