use crate::constants::{POPUP_IMAGE_MARGIN_TOP_PX, POPUP_SHOW_CLASS};
use garden_core::timer::{DismissTicket, TimerService};
use garden_core::{MemoryPayload, PopupConfig, PopupPresenter, PopupSurface};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type DomPresenter = PopupPresenter<DomPopupSurface, WebTimers>;

/// The page's `#popup` element.
pub struct DomPopupSurface {
    el: web::HtmlElement,
}

impl DomPopupSurface {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }

    fn style(&self, name: &str, value: &str) {
        _ = self.el.style().set_property(name, value);
    }

    fn document(&self) -> Option<web::Document> {
        self.el.owner_document()
    }
}

impl PopupSurface for DomPopupSurface {
    fn set_content(&mut self, payload: &MemoryPayload, max_image_width: f32) {
        self.el.set_inner_html("");
        let Some(doc) = self.document() else { return };

        if let Ok(text) = doc.create_element("div") {
            text.set_text_content(Some(payload.text()));
            _ = self.el.append_child(&text);
        }
        if let Some(src) = payload.image() {
            if let Ok(img) = doc
                .create_element("img")
                .map(|e| e.unchecked_into::<web::HtmlImageElement>())
            {
                img.set_src(src);
                img.set_alt(payload.text());
                _ = img.set_attribute(
                    "style",
                    &format!(
                        "display:block;max-width:{max_image_width}px;margin-top:{POPUP_IMAGE_MARGIN_TOP_PX}px;"
                    ),
                );
                _ = self.el.append_child(&img);
            }
        }

        // lay out invisibly at the origin so the size can be read back
        self.style("display", "block");
        self.style("opacity", "0");
        self.style("left", "0px");
        self.style("top", "0px");
        self.style("transform", "none");
    }

    fn measure(&self) -> Vec2 {
        Vec2::new(self.el.offset_width() as f32, self.el.offset_height() as f32)
    }

    fn set_position(&mut self, top_left: Vec2) {
        self.style("left", &format!("{}px", top_left.x));
        self.style("top", &format!("{}px", top_left.y));
    }

    fn set_visible(&mut self, visible: bool) {
        let cl = self.el.class_list();
        if visible {
            self.style("opacity", "1");
            _ = cl.add_1(POPUP_SHOW_CLASS);
        } else {
            self.style("opacity", "0");
            _ = cl.remove_1(POPUP_SHOW_CLASS);
        }
    }
}

/// `setTimeout` backed dismissal timer. Fired tickets are delivered to the
/// presenter through a weak reference so the two never keep each other alive.
pub struct WebTimers {
    target: Weak<RefCell<DomPresenter>>,
    // the most recent callback; replaced on the next schedule, by which time
    // it has either run or been cleared
    callback: Option<Closure<dyn FnMut()>>,
}

impl WebTimers {
    pub fn new(target: Weak<RefCell<DomPresenter>>) -> Self {
        Self {
            target,
            callback: None,
        }
    }
}

impl TimerService for WebTimers {
    type Handle = i32;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn schedule(&mut self, delay: Duration, ticket: DismissTicket) -> i32 {
        let target = self.target.clone();
        let callback = Closure::wrap(Box::new(move || {
            let Some(presenter) = target.upgrade() else { return };
            match presenter.try_borrow_mut() {
                Ok(mut p) => {
                    p.dismiss(ticket);
                }
                Err(_) => log::warn!("[popup] presenter busy, dismissal #{} dropped", ticket.0),
            }
        }) as Box<dyn FnMut()>);
        let id = web::window()
            .and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    delay.as_millis().min(i32::MAX as u128) as i32,
                )
                .ok()
            })
            .unwrap_or_else(|| {
                log::error!("[popup] setTimeout unavailable; popup will not auto-hide");
                0
            });
        self.callback = Some(callback);
        id
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(handle);
        }
    }
}

/// Presenter wired to `el`, holding its own timer.
pub fn build_presenter(el: web::HtmlElement, config: PopupConfig) -> Rc<RefCell<DomPresenter>> {
    Rc::new_cyclic(|weak| {
        RefCell::new(PopupPresenter::new(
            DomPopupSurface::new(el),
            WebTimers::new(weak.clone()),
            config,
        ))
    })
}
