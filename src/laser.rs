use crate::core::rays;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Opaque handle; the controller lives entirely in its forgotten listener.
pub struct LaserBurst;

/// Wire the document-wide click handler. Clicks on interactive controls are
/// left alone so the bursts never interfere with normal interactions.
pub fn init(document: &web::Document) -> Option<LaserBurst> {
    document.body()?;
    let doc = document.clone();
    dom::add_mouse_listener(document, "click", move |ev: web::MouseEvent| {
        if let Some(target) = ev.target() {
            if let Some(el) = target.dyn_ref::<web::Element>() {
                if rays::is_interactive_tag(&el.tag_name()) {
                    return;
                }
            }
        }
        spawn_burst(&doc, ev.client_x() as f64, ev.client_y() as f64);
    });
    Some(LaserBurst)
}

fn ray_style(x: f64, y: f64, transform: &str, opacity: f64, transition: Option<&str>) -> String {
    let mut style = format!("left:{x}px;top:{y}px;transform:{transform};opacity:{opacity}");
    if let Some(t) = transition {
        style.push_str(";transition:");
        style.push_str(t);
    }
    style
}

fn spawn_burst(document: &web::Document, x: f64, y: f64) {
    let Some(body) = document.body() else {
        return;
    };
    for i in 0..rays::RAY_COUNT {
        let angle = rays::ray_angle_deg(i);
        let Ok(beam) = document.create_element("div") else {
            continue;
        };
        beam.set_class_name("laser-ray");
        _ = beam.set_attribute("aria-hidden", "true");
        dom::set_style(&beam, &ray_style(x, y, &rays::spawn_transform(angle), 1.0, None));
        _ = body.append_child(&beam);

        // Flush the collapsed state before switching on the transition, so
        // the expansion animates instead of jumping.
        if let Some(el) = beam.dyn_ref::<web::HtmlElement>() {
            let _ = el.offset_width();
        }
        let expand = format!(
            "transform {}ms {}, opacity {}ms {}",
            rays::EXPAND_MS,
            rays::EXPAND_EASING,
            rays::EXPAND_MS,
            rays::EXPAND_EASING
        );
        dom::set_style(
            &beam,
            &ray_style(x, y, &rays::expand_transform(angle), 0.98, Some(&expand)),
        );

        let beam_fade = beam.clone();
        dom::set_timeout(rays::EXPAND_MS, move || {
            if !beam_fade.is_connected() {
                return;
            }
            let fade = format!(
                "transform {}ms linear, opacity {}ms linear",
                rays::FADE_MS,
                rays::FADE_MS
            );
            dom::set_style(
                &beam_fade,
                &ray_style(x, y, &rays::fade_transform(angle), 0.0, Some(&fade)),
            );
        });

        let beam_done = beam.clone();
        dom::set_timeout(rays::LIFETIME_MS, move || {
            if let Some(parent) = beam_done.parent_node() {
                _ = parent.remove_child(&beam_done);
            }
        });
    }
}
