use crate::core::launch::{LaunchEffect, LaunchSequencer, LaunchStep};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Opaque handle; the controller lives in its forgotten listener.
pub struct RocketLaunch;

struct Parts {
    button: web::Element,
    rocket: web::Element,
    flame: web::Element,
}

/// The launch button drives a timed shake → flame → liftoff → flame-off
/// sequence. Clicks while a sequence is running are ignored by the state
/// machine rather than stacking timer chains.
pub fn init(document: &web::Document) -> Option<RocketLaunch> {
    let button = document.query_selector(".launch-btn").ok()??;
    let rocket = document.get_element_by_id("rocket")?;
    let flame = document.get_element_by_id("rocketFlame")?;

    let parts = Rc::new(Parts {
        button: button.clone(),
        rocket,
        flame,
    });
    let seq = Rc::new(RefCell::new(LaunchSequencer::new()));

    dom::add_click_listener(&button, move || {
        let step = seq.borrow_mut().trigger();
        if let Some(step) = step {
            run_step(parts.clone(), seq.clone(), step);
        }
    });

    Some(RocketLaunch)
}

fn run_step(parts: Rc<Parts>, seq: Rc<RefCell<LaunchSequencer>>, step: LaunchStep) {
    apply_effects(&parts, step.effects);
    if let Some(delay_ms) = step.next_in_ms {
        dom::set_timeout(delay_ms, move || {
            let next = seq.borrow_mut().advance();
            if let Some(next) = next {
                run_step(parts, seq, next);
            }
        });
    }
}

fn apply_effects(parts: &Parts, effects: &[LaunchEffect]) {
    for effect in effects {
        match effect {
            LaunchEffect::AddShake => _ = parts.button.class_list().add_1("shake"),
            LaunchEffect::RemoveShake => _ = parts.button.class_list().remove_1("shake"),
            LaunchEffect::FlameOn => _ = parts.flame.class_list().add_1("on"),
            LaunchEffect::RestartLaunch => restart_launch(&parts.rocket),
            LaunchEffect::FlameOff => _ = parts.flame.class_list().remove_1("on"),
        }
    }
}

/// Remove/reflow/add so the liftoff animation replays even when the class is
/// already present from an earlier run.
fn restart_launch(rocket: &web::Element) {
    let classes = rocket.class_list();
    _ = classes.remove_1("active");
    if let Some(el) = rocket.dyn_ref::<web::HtmlElement>() {
        let _ = el.offset_width();
    }
    _ = classes.add_1("active");
}
