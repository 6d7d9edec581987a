use crate::core::shortcuts::{shortcut_for_key, Shortcut};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the page shortcuts on window keydown: `h` goes home, `r` reruns the
/// retry flow, `m` presses the sound toggle.
pub fn wire_shortcuts(retry: Rc<dyn Fn()>, sound_btn: web::HtmlElement) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        match shortcut_for_key(&ev.key()) {
            Some(Shortcut::Home) => {
                if let Some(w) = web::window() {
                    _ = w.location().set_href("/");
                }
            }
            Some(Shortcut::Retry) => retry(),
            Some(Shortcut::ToggleSound) => sound_btn.click(),
            None => {}
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
