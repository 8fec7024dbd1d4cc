use crate::anchors::PageAnchors;
use crate::core::{FrameInput, ParticleField, Scene};
use crate::input;
use crate::render;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub mouse: Rc<RefCell<input::MouseState>>,

    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub anchors: PageAnchors,

    // Last resolved profile card centre; kept when the card is missing
    pub focal: Vec2,
    pub scene: Scene,
    pub epoch: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let time_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        if let Some(c) = self.anchors.focal_center() {
            self.focal = c;
        }
        let anchors = self.anchors.sample();
        let mouse = self.mouse.borrow().pos();

        let input = FrameInput {
            mouse,
            focal: self.focal,
            anchors: &anchors,
            time_ms,
        };
        self.field.borrow_mut().step(&input, &mut self.scene);

        render::paint(
            &self.ctx,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
            &self.scene,
        );
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
