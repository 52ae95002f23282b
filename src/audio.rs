use crate::constants::{MUSIC_BUTTON_ID, MUSIC_BUTTON_STYLE, MUSIC_SRC};
use crate::dom;
use garden_core::MusicToggle;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Clone)]
struct MusicWiring {
    audio: web::HtmlAudioElement,
    button: web::HtmlElement,
    state: Rc<RefCell<MusicToggle>>,
}

impl MusicWiring {
    fn refresh_label(&self) {
        self.button
            .set_text_content(Some(self.state.borrow().label()));
    }

    /// Start playback. Browsers may refuse until the user interacts with the
    /// page; that leaves the toggle paused.
    fn play(&self) {
        let promise: js_sys::Promise = match self.audio.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[music] play failed: {:?}", e);
                return;
            }
        };
        let this = self.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    this.state.borrow_mut().set_playing(true);
                    log::info!("[music] playing");
                }
                Err(e) => {
                    this.state.borrow_mut().set_playing(false);
                    log::warn!("[music] playback blocked: {:?}", e);
                }
            }
            this.refresh_label();
        });
    }

    fn pause(&self) {
        _ = self.audio.pause();
        self.state.borrow_mut().set_playing(false);
        self.refresh_label();
        log::info!("[music] paused");
    }
}

/// Looping background track plus the play/pause button in the top-left corner.
pub fn wire_music_toggle(document: &web::Document) -> anyhow::Result<()> {
    let audio = web::HtmlAudioElement::new_with_src(MUSIC_SRC)
        .map_err(|e| anyhow::anyhow!("audio element: {:?}", e))?;
    audio.set_loop(true);

    let button = dom::element_or_create(document, MUSIC_BUTTON_ID, "button", MUSIC_BUTTON_STYLE)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{MUSIC_BUTTON_ID} is not an HtmlElement: {:?}", e))?;

    let wiring = MusicWiring {
        audio,
        button,
        state: Rc::new(RefCell::new(MusicToggle::new(false))),
    };
    wiring.refresh_label();
    wiring.play();

    let on_click = wiring.clone();
    dom::add_click_listener(&wiring.button, move || {
        // flip now so the label answers the click; play() settles the real state
        let playing = on_click.state.borrow_mut().toggle();
        on_click.refresh_label();
        if playing {
            on_click.play();
        } else {
            on_click.pause();
        }
    });
    Ok(())
}
