use crate::constants::{PROFILE_CARD_SELECTOR, SECTION_CIRCLE_SELECTOR};
use crate::core::{override_rgba, Anchor, Anchors, ColorPair, Rgba, SECTION_PALETTE};
use crate::dom;
use glam::Vec2;
use web_sys as web;

struct AnchorBinding {
    id: &'static str,
    element: Option<web::Element>,
    colors: ColorPair,
}

/// Elements the spokes are drawn between: the four section circles and the
/// profile card. Positions are read from layout every time they are sampled.
pub struct PageAnchors {
    bindings: Vec<AnchorBinding>,
    focal: Option<web::Element>,
}

impl PageAnchors {
    pub fn bind(document: &web::Document) -> Self {
        let bindings = SECTION_PALETTE
            .iter()
            .map(|&(id, defaults)| {
                let selector = format!("{SECTION_CIRCLE_SELECTOR}.{id}");
                let element = document.query_selector(&selector).ok().flatten();
                if element.is_none() {
                    log::warn!("[anchors] {} not found; its spoke is skipped", selector);
                }
                let colors = element
                    .as_ref()
                    .map_or(defaults, |el| colors_for(el, defaults));
                AnchorBinding {
                    id,
                    element,
                    colors,
                }
            })
            .collect();
        let focal = document.query_selector(PROFILE_CARD_SELECTOR).ok().flatten();
        Self { bindings, focal }
    }

    pub fn focal_center(&self) -> Option<Vec2> {
        self.focal.as_ref().map(dom::element_center)
    }

    pub fn sample(&self) -> Anchors {
        self.bindings
            .iter()
            .map(|b| Anchor {
                id: b.id,
                center: b.element.as_ref().map(dom::element_center),
                hovered: b
                    .element
                    .as_ref()
                    .and_then(|el| el.matches(":hover").ok())
                    .unwrap_or(false),
                colors: b.colors,
            })
            .collect()
    }
}

// Palette entry for the section, with optional data-color / data-hover-color overrides
fn colors_for(el: &web::Element, defaults: ColorPair) -> ColorPair {
    ColorPair {
        base: attr_color(el, "data-color", defaults.base),
        hover: attr_color(el, "data-hover-color", defaults.hover),
    }
}

fn attr_color(el: &web::Element, attr: &str, fallback: Rgba) -> Rgba {
    override_rgba(el.get_attribute(attr).as_deref(), fallback).unwrap_or_else(|e| {
        log::warn!("[anchors] ignoring {}: {}", attr, e);
        fallback
    })
}
