#![cfg(target_arch = "wasm32")]
use crate::core::{FieldParams, ParticleField, Scene, ScrollPolicy};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod anchors;
mod constants;
mod core;
mod dom;
mod effects;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-field starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // ---------------- Background field ----------------
    let (width, height) = dom::sync_canvas_to_viewport(&canvas);
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    let field = Rc::new(RefCell::new(ParticleField::new(
        width,
        height,
        FieldParams::default(),
        &mut *rng.borrow_mut(),
    )));
    log::info!(
        "[field] {}x{} with {} particles",
        width,
        height,
        field.borrow().particles.len()
    );
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));

    // ---------------- Page interaction ----------------
    let circles = Rc::new(dom::query_all(&document, constants::SECTION_CIRCLE_SELECTOR));
    let sections: Vec<String> = circles
        .iter()
        .filter_map(|c| c.get_attribute("data-section"))
        .collect();
    let cards = Rc::new(RefCell::new(overlay::CardOverlay::bind(
        &document,
        &sections,
        ScrollPolicy::default(),
    )));

    effects::wire_image_fallback(&document);
    events::wire_card_clicks(&document, &circles, cards.clone());
    events::wire_global_keydown(&document, cards);
    effects::wire_hover(&document, &circles);
    effects::run_entrance(&window, &circles);
    effects::start_profile_float(&window, &document);
    effects::inject_keyframes(&document);
    effects::wire_smooth_scroll(&document);
    effects::wire_preload(&window);

    events::wire_mousemove(mouse_state.clone());
    events::wire_resize(events::ResizeWiring {
        canvas: canvas.clone(),
        field: field.clone(),
        rng,
        circles,
    });

    // Renderer loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        mouse: mouse_state,
        canvas,
        ctx,
        anchors: anchors::PageAnchors::bind(&document),
        focal: Vec2::ZERO,
        scene: Scene::default(),
        epoch: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    log::info!("interactive portfolio initialized");
    Ok(())
}
