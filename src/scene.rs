use crate::audio::WindAudio;
use crate::constants::RETRY_OVERLAY_MS;
use crate::core::{messages, rover};
use crate::dom;
use crate::events;
use crate::overlay;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Opaque handle; the controller lives in its forgotten listeners.
pub struct SceneController;

struct Bindings {
    scene: web::Element,
    rover: web::Element,
    head: web::Element,
    eye: web::Element,
    dynamic: web::Element,
    hud_text: web::Element,
    home_btn: web::Element,
    retry_btn: web::Element,
    sound_btn: web::HtmlElement,
    easter: web::Element,
    egg_close: web::Element,
    title: Option<web::Element>,
    subtitle: Option<web::Element>,
}

fn resolve(document: &web::Document) -> Option<Bindings> {
    // The overlay and modal are only ever touched by id, but they are part of
    // the contract: without them the controller stays down entirely.
    document.get_element_by_id("transmission")?;
    document.get_element_by_id("eggModal")?;
    Some(Bindings {
        scene: document.get_element_by_id("scene")?,
        rover: document.get_element_by_id("rover")?,
        head: document.get_element_by_id("head")?,
        eye: document.get_element_by_id("eye")?,
        dynamic: document.get_element_by_id("dynamic")?,
        hud_text: document.get_element_by_id("hudText")?,
        home_btn: document.get_element_by_id("homeBtn")?,
        retry_btn: document.get_element_by_id("retryBtn")?,
        sound_btn: document
            .get_element_by_id("soundToggle")?
            .dyn_into::<web::HtmlElement>()
            .ok()?,
        easter: document.get_element_by_id("easter")?,
        egg_close: document.get_element_by_id("eggClose")?,
        title: document.get_element_by_id("title"),
        subtitle: document.get_element_by_id("subtitle"),
    })
}

pub fn init(document: &web::Document) -> Option<SceneController> {
    let b = Rc::new(resolve(document)?);

    pick_message(&b.dynamic);
    roll_headline(&b);
    wire_navigation(&b);
    let retry = wire_retry(document, &b);
    wire_tracking(&b);
    wire_blink(&b);
    wire_easter_egg(document, &b);
    wire_sound_toggle(&b);
    events::keyboard::wire_shortcuts(retry, b.sound_btn.clone());

    Some(SceneController)
}

fn pick_message(dynamic: &web::Element) {
    dynamic.set_text_content(Some(messages::pick(js_sys::Math::random())));
}

// Small chance to swap the headline pair on load.
fn roll_headline(b: &Bindings) {
    if let Some(swap) = messages::title_swap(js_sys::Math::random()) {
        if let Some(title) = &b.title {
            title.set_text_content(Some(swap.title));
        }
        if let Some(subtitle) = &b.subtitle {
            subtitle.set_text_content(Some(swap.subtitle));
        }
    }
}

fn go_home() {
    if let Some(window) = web::window() {
        _ = window.location().set_href("/");
    }
}

fn wire_navigation(b: &Rc<Bindings>) {
    dom::add_click_listener(&b.home_btn, go_home);

    // Micro interaction: the message nudges up while hovering "home".
    {
        let dynamic = b.dynamic.clone();
        dom::add_listener(&b.home_btn, "mouseenter", move || {
            dom::set_style(
                &dynamic,
                "transform:translateY(-2px);transition:transform .12s ease",
            );
        });
    }
    {
        let dynamic = b.dynamic.clone();
        dom::add_listener(&b.home_btn, "mouseleave", move || {
            _ = dynamic.set_attribute("style", "");
        });
    }
}

/// The retry flow: flash the transmission overlay, then declare the link
/// lost again with a fresh message and an eye blink. Shared by the retry
/// button and the `r` shortcut.
fn wire_retry(document: &web::Document, b: &Rc<Bindings>) -> Rc<dyn Fn()> {
    let retry: Rc<dyn Fn()> = {
        let document = document.clone();
        let b = b.clone();
        Rc::new(move || {
            overlay::show(&document, "transmission");
            b.hud_text.set_text_content(Some(messages::HUD_RESETTING));

            let document = document.clone();
            let b = b.clone();
            dom::set_timeout(RETRY_OVERLAY_MS, move || {
                overlay::hide(&document, "transmission");
                pick_message(&b.dynamic);
                b.hud_text.set_text_content(Some(messages::HUD_LOST));
                blink_eye(&b.eye);
            });
        })
    };

    {
        let retry = retry.clone();
        dom::add_click_listener(&b.retry_btn, move || retry());
    }
    retry
}

fn wire_tracking(b: &Rc<Bindings>) {
    {
        let b = b.clone();
        dom::add_mouse_listener(&b.scene.clone(), "mousemove", move |ev: web::MouseEvent| {
            let rect = b.rover.get_bounding_client_rect();
            let cx = rect.left() + rect.width() * rover::CENTER_X_FRACTION;
            let cy = rect.top() + rect.height() * rover::CENTER_Y_FRACTION;
            let dx = ev.client_x() as f64 - cx;
            let dy = ev.client_y() as f64 - cy;
            let angle = rover::head_angle_deg(dx, dy);
            dom::set_style(
                &b.head,
                &format!("transform:translate(110px,18px) rotate({angle}deg)"),
            );
            let (ex, ey) = rover::eye_offset(dx, dy);
            _ = b.eye.set_attribute("cx", &format!("{ex}"));
            _ = b.eye.set_attribute("cy", &format!("{}", rover::EYE_REST_CY + ey));
        });
    }
    {
        let b = b.clone();
        dom::add_listener(&b.scene.clone(), "mouseleave", move || {
            dom::set_style(&b.head, "transform:translate(110px,18px) rotate(0deg)");
            _ = b.eye.set_attribute("cx", &format!("{}", rover::EYE_REST_CX));
            _ = b.eye.set_attribute("cy", &format!("{}", rover::EYE_REST_CY));
        });
    }
}

/// Shrink the eye radius briefly; the transition does the easing.
fn blink_eye(eye: &web::Element) {
    _ = eye.set_attribute("style", "transition: r 120ms linear");
    _ = eye.set_attribute("r", &format!("{}", rover::EYE_BLINK_R));
    let eye = eye.clone();
    dom::set_timeout(rover::BLINK_RESTORE_MS, move || {
        if eye.is_connected() {
            _ = eye.set_attribute("r", &format!("{}", rover::EYE_REST_R));
        }
    });
}

fn wire_blink(b: &Rc<Bindings>) {
    let eye = b.eye.clone();
    dom::set_interval(rover::BLINK_INTERVAL_MS, move || {
        if rover::should_blink(js_sys::Math::random()) {
            blink_eye(&eye);
        }
    });
}

fn wire_easter_egg(document: &web::Document, b: &Rc<Bindings>) {
    let clicks = Rc::new(Cell::new(0u32));
    {
        let document = document.clone();
        let clicks = clicks.clone();
        dom::add_click_listener(&b.easter, move || {
            clicks.set(clicks.get() + 1);
            if clicks.get() >= 6 {
                overlay::show(&document, "eggModal");
                clicks.set(0);
            }
        });
    }
    {
        let document = document.clone();
        dom::add_listener(&b.rover, "dblclick", move || {
            overlay::show(&document, "eggModal");
        });
    }
    {
        let document = document.clone();
        dom::add_click_listener(&b.egg_close, move || {
            overlay::hide(&document, "eggModal");
        });
    }
}

fn wire_sound_toggle(b: &Rc<Bindings>) {
    let slot: Rc<RefCell<Option<WindAudio>>> = Rc::new(RefCell::new(None));
    let sound_btn = b.sound_btn.clone();
    dom::add_click_listener(&b.sound_btn, move || {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            match WindAudio::build() {
                Ok(wind) => *slot = Some(wind),
                Err(e) => {
                    log::error!("ambient audio unavailable: {e:?}");
                    return;
                }
            }
        }
        let Some(wind) = slot.as_mut() else {
            return;
        };
        let muted = wind.toggle();
        sound_btn.set_text_content(Some(if muted {
            messages::SOUND_OFF_LABEL
        } else {
            messages::SOUND_ON_LABEL
        }));
        _ = sound_btn.set_attribute("aria-pressed", if muted { "false" } else { "true" });
    });
}
