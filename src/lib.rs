#![cfg(target_arch = "wasm32")]
use spiral_core::{FieldConfig, FieldPreset};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spiral-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// `?preset=<name>` picks the field; unknown names fall back to the default.
fn preset_from_location(window: &web::Window) -> FieldPreset {
    match FieldPreset::from_query(&dom::location_search(window)) {
        Some(Ok(preset)) => preset,
        Some(Err(e)) => {
            log::warn!("{e}; using {}", FieldPreset::default());
            FieldPreset::default()
        }
        None => FieldPreset::default(),
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    let preset = preset_from_location(&window);
    let field = FieldConfig::preset(preset);
    let driver = Rc::new(RefCell::new(field.build_driver()?));
    log::info!("[field] preset={preset}");

    events::wire_canvas_click(&canvas, driver.clone());
    events::wire_global_keydown(driver.clone());

    let gpu = match render::GpuState::new(&canvas, &field, &driver).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(driver, canvas, gpu)));
    frame::start_loop(frame_ctx);
    Ok(())
}
