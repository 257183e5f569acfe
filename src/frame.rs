use crate::core::{CameraOrbit, ParticleField, ParticleSpin, SphereMotion};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick touches. Each motion state is advanced
/// through its pure `advanced(self, dt)` and handed to the renderer; nothing
/// here reads user input.
pub struct FrameContext<'a> {
    pub spin: ParticleSpin,
    pub sphere: SphereMotion,
    pub orbit: CameraOrbit,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.spin = self.spin.advanced(dt_sec);
        self.sphere = self.sphere.advanced(dt_sec);
        self.orbit = self.orbit.advanced(dt_sec);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let scene = render::SceneFrame {
                spin: self.spin,
                sphere: self.sphere,
                orbit: self.orbit,
            };
            if let Err(e) = g.render(dt_sec, &scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

/// Acquire the WebGPU surface. `None` means no rendering context; the page
/// stays usable as flat content.
pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, field).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
