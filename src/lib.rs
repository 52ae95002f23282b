#![cfg(target_arch = "wasm32")]
use garden_core::{Garden, GardenConfig, OrbitCamera, PopupConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod popup;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("memory-garden starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let popup_el: web::HtmlElement = dom::element_or_create(
        &document,
        constants::POPUP_ID,
        "div",
        constants::POPUP_FALLBACK_STYLE,
    )?
    .dyn_into::<web::HtmlElement>()
    .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // a page that renders deterministically pins the seed with <body data-seed="..">
    let seed = dom::body_seed(&document).unwrap_or_else(rand::random::<u32>);
    let garden = Garden::build(&GardenConfig {
        seed: u64::from(seed),
        ..GardenConfig::default()
    })?;
    let garden = Rc::new(RefCell::new(garden));
    let orbit = Rc::new(RefCell::new(OrbitCamera::default()));
    host::publish(host::HostView {
        garden: garden.clone(),
        orbit: orbit.clone(),
    });
    let presenter = popup::build_presenter(popup_el, PopupConfig::default());

    events::wire_input_handlers(events::InputWiring {
        garden: garden.clone(),
        orbit: orbit.clone(),
        presenter,
        drag: Rc::new(RefCell::new(input::DragState::default())),
    });

    // the garden works without music; a missing audio element is not fatal
    if let Err(e) = audio::wire_music_toggle(&document) {
        log::warn!("[music] disabled: {:?}", e);
    }

    let now = Instant::now();
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        garden,
        orbit,
        started: now,
        last_instant: now,
    })));
    Ok(())
}
