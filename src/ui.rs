// Pure helpers behind the DOM-side effects, kept free of web-sys.
use crate::constants::*;

/// Up to two uppercase initials from a display name, e.g. "Jane Q. Doe" -> "JD".
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name
        .split_whitespace()
        .filter(|w| w.chars().next().is_some_and(char::is_alphabetic))
        .collect();
    let picked: Vec<&str> = match words.as_slice() {
        [] => return PLACEHOLDER_INITIALS.to_string(),
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };
    picked
        .iter()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Delay before circle `index` starts its entrance transition.
#[inline]
pub fn entrance_delay_ms(index: usize) -> i32 {
    ENTRANCE_DELAY_MS + index as i32 * ENTRANCE_STAGGER_MS
}

/// Vertical bob of the profile card at wall-clock `now_ms`.
#[inline]
pub fn float_offset_px(now_ms: f64) -> f64 {
    (now_ms * FLOAT_RATE_PER_MS).sin() * FLOAT_AMPLITUDE_PX
}

pub fn float_transform(offset_px: f64) -> String {
    format!("translate(-50%, calc(-50% + {offset_px}px))")
}

#[inline]
pub fn scale_transform(scale: f32) -> String {
    format!("scale({scale})")
}

/// Resting scale of the section circles for a viewport width.
#[inline]
pub fn circle_rest_scale(viewport_width: f64) -> f32 {
    if viewport_width <= MOBILE_BREAKPOINT_PX {
        MOBILE_CIRCLE_SCALE
    } else {
        1.0
    }
}

/// Glow box around an element rect given as (left, top, width, height).
#[inline]
pub fn glow_rect(left: f64, top: f64, width: f64, height: f64) -> [f64; 4] {
    [
        left - GLOW_MARGIN_PX,
        top - GLOW_MARGIN_PX,
        width + 2.0 * GLOW_MARGIN_PX,
        height + 2.0 * GLOW_MARGIN_PX,
    ]
}

pub fn glow_style(rect: [f64; 4]) -> String {
    format!(
        "position: fixed; left: {}px; top: {}px; width: {}px; height: {}px; \
         border-radius: 50%; \
         background: radial-gradient(circle, rgba(255,255,255,0.1) 0%, transparent 70%); \
         pointer-events: none; z-index: 1; animation: glowPulse 0.6s ease-out forwards;",
        rect[0], rect[1], rect[2], rect[3]
    )
}

pub fn badge_style() -> String {
    format!(
        "width: {BADGE_SIZE_PX}px; height: {BADGE_SIZE_PX}px; border-radius: 50%; \
         background: linear-gradient(135deg, #3b82f6, #1d4ed8); \
         display: flex; align-items: center; justify-content: center; \
         color: white; font-size: 2rem; font-weight: bold; margin: 0 auto;"
    )
}

#[inline]
pub fn card_id(section: &str) -> String {
    format!("{section}{CARD_ID_SUFFIX}")
}
