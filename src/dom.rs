use crate::constants::DATA_SEED_ATTR;
use garden_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current layout viewport in CSS pixels.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(1.0, 1.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    Viewport::new(width as f32, height as f32)
}

/// Garden seed pinned by the host page as `<body data-seed="..">`.
pub fn body_seed(document: &web::Document) -> Option<u32> {
    let raw = document.body()?.get_attribute(DATA_SEED_ATTR)?;
    let seed = crate::input::parse_seed(&raw);
    if seed.is_none() {
        log::warn!("[dom] ignoring {DATA_SEED_ATTR}={raw:?}");
    }
    seed
}

/// Listen on `window` for `event`, handing the handler events of type `E`.
/// Events that are not an `E` are skipped.
pub fn add_window_listener<E>(event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Find `#id` or append a fresh `<tag id=id style=style>` to the body.
pub fn element_or_create(
    document: &web::Document,
    id: &str,
    tag: &str,
    style: &str,
) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(id) {
        return Ok(el);
    }
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {e:?}"))?;
    el.set_id(id);
    _ = el.set_attribute("style", style);
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&el)
        .map_err(|e| anyhow::anyhow!("append #{id}: {e:?}"))?;
    log::info!("[dom] created #{}", id);
    Ok(el)
}
