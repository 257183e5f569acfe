#![cfg(target_arch = "wasm32")]
use crate::core::{PageUi, ParticleField};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod frame;
mod nav;
mod render;
mod reveal;
mod sections;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dain-web starting");

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

    let canvas_el = document
        .get_element_by_id("backdrop-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #backdrop-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Page composition: nav with its flags, then the content sections with
    // their viewport-entry reveals.
    let ui = Rc::new(RefCell::new(PageUi::default()));
    nav::build_and_wire(&document, ui)?;

    let page = document
        .get_element_by_id("page")
        .ok_or_else(|| anyhow::anyhow!("missing #page"))?;
    // leak: the observer must stay alive for the whole page session
    let reveals: &'static reveal::Reveals = Box::leak(Box::new(reveal::Reveals::new()?));
    sections::build(&document, &page, reveals)?;

    // Backdrop: generate the particle field once, then hand everything to the
    // render loop. A missing WebGPU context degrades to flat content.
    let field = ParticleField::generate(rand::random());
    let gpu = frame::init_gpu(&canvas, &field).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        spin: Default::default(),
        sphere: Default::default(),
        orbit: Default::default(),
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
