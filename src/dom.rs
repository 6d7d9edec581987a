use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn set_style(el: &web::Element, style: &str) {
    _ = el.set_attribute("style", style);
}

pub fn add_listener(target: &web::EventTarget, kind: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, handler: impl FnMut() + 'static) {
    add_listener(target, "click", handler);
}

pub fn add_mouse_listener(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One-shot delayed callback. The closure leaks into the JS heap and is
/// reclaimed after it fires.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let closure = Closure::once_into_js(f);
    if let Some(window) = web::window() {
        _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), ms);
    }
}

/// Repeating callback; never cancelled, lives for the page lifetime.
pub fn set_interval(ms: i32, mut f: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            );
    }
    closure.forget();
}

pub fn reduced_motion_query() -> Option<web::MediaQueryList> {
    web::window()?
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
}

pub fn prefers_reduced_motion() -> bool {
    reduced_motion_query().map(|q| q.matches()).unwrap_or(false)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web::window() else {
        return (0.0, 0.0);
    };
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Match the canvas backing store to the viewport times devicePixelRatio and
/// keep its CSS size in viewport units. Returns (css width, css height, dpr).
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f64, f64, f64) {
    let (w, h) = viewport_size();
    let dpr = web::window().map(|win| win.device_pixel_ratio()).unwrap_or(1.0);
    canvas.set_width(((w * dpr) as u32).max(1));
    canvas.set_height(((h * dpr) as u32).max(1));
    _ = canvas.set_attribute("style", &format!("width:{w}px;height:{h}px"));
    (w, h, dpr)
}
