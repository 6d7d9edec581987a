use crate::core::gaze::{self, GazeState};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Opaque handle; state lives in the forgotten listeners.
pub struct AstronautGaze;

/// The astronaut tracks the mouse with its head and reaches out when the
/// cursor strays close. Requires `#astronaut`, `#astronaut-head` (whose
/// parent is the rotated container) and `#astronaut-arm`.
pub fn init(document: &web::Document) -> Option<AstronautGaze> {
    let root = document.get_element_by_id("astronaut")?;
    let head = document.get_element_by_id("astronaut-head")?;
    let head_container = head.parent_element()?;
    let arm = document.get_element_by_id("astronaut-arm")?;

    let state = Rc::new(RefCell::new(GazeState::new()));
    let reduced = Rc::new(RefCell::new(dom::prefers_reduced_motion()));
    let started = Instant::now();

    // Face the viewport center until the first mouse move arrives.
    if !*reduced.borrow() {
        let (vw, vh) = dom::viewport_size();
        aim_head(&root, &head_container, &state.borrow(), vw / 2.0, vh / 2.0);
    }

    {
        let state = state.clone();
        let reduced = reduced.clone();
        let root = root.clone();
        let head_container = head_container.clone();
        let arm = arm.clone();
        dom::add_mouse_listener(document, "mousemove", move |ev: web::MouseEvent| {
            let (mx, my) = (ev.client_x() as f64, ev.client_y() as f64);
            let mut s = state.borrow_mut();
            s.step_offsets(my);
            if *reduced.borrow() {
                return;
            }
            let (dx, dy) = aim_head(&root, &head_container, &s, mx, my);
            let now_ms = started.elapsed().as_secs_f64() * 1000.0;
            if s.try_grab(now_ms, dx.hypot(dy)) {
                trigger_grab(&arm);
            }
        });
    }

    // Follow live changes to the motion preference; going reduced parks the
    // head in its neutral pose.
    if let Some(query) = dom::reduced_motion_query() {
        let head_container = head_container.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
            *reduced.borrow_mut() = ev.matches();
            if ev.matches() {
                dom::set_style(&head_container, "transform:translateX(-50%) rotate(0deg)");
            }
        }) as Box<dyn FnMut(_)>);
        _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    Some(AstronautGaze)
}

/// Rotate the head container toward the pointer; returns the pointer offset
/// from the body center for the grab-distance check.
fn aim_head(
    root: &web::Element,
    head_container: &web::Element,
    state: &GazeState,
    mx: f64,
    my: f64,
) -> (f64, f64) {
    let rect = root.get_bounding_client_rect();
    let cx = rect.right() - gaze::BODY_CENTER_FROM_RIGHT_PX;
    let cy = rect.bottom() - gaze::BODY_CENTER_FROM_BOTTOM_PX;
    let (dx, dy) = (mx - cx, my - cy);
    let angle = gaze::head_angle_deg(dx, dy);
    dom::set_style(
        head_container,
        &format!(
            "transform:translateX(-50%) translate({:.1}px, {:.1}px) rotate({angle}deg)",
            state.offset_x, state.offset_y
        ),
    );
    (dx, dy)
}

/// Restart the one-shot grab animation; the remove/reflow/add dance makes the
/// CSS animation replay even when it is still mid-flight.
fn trigger_grab(arm: &web::Element) {
    let classes = arm.class_list();
    _ = classes.remove_1("grabbing");
    if let Some(el) = arm.dyn_ref::<web::HtmlElement>() {
        let _ = el.offset_width();
    }
    _ = classes.add_1("grabbing");

    let arm = arm.clone();
    dom::set_timeout(gaze::GRAB_ANIM_MS, move || {
        if arm.is_connected() {
            _ = arm.class_list().remove_1("grabbing");
        }
    });
}
