use crate::core::particles::ParticleField;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas-rendered dust drifting across the whole viewport.
pub struct DustLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
}

pub fn init(document: &web::Document) -> Option<Rc<RefCell<DustLayer>>> {
    let canvas: web::HtmlCanvasElement = document.get_element_by_id("dust")?.dyn_into().ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;

    let mut layer = DustLayer {
        canvas,
        ctx,
        field: ParticleField::new(0.0, 0.0, 0),
    };
    layer.reseed();
    let layer = Rc::new(RefCell::new(layer));

    // A viewport change re-derives the count and re-scatters the field.
    for kind in ["resize", "orientationchange"] {
        let layer = layer.clone();
        let closure = Closure::wrap(Box::new(move || layer.borrow_mut().reseed()) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    Some(layer)
}

impl DustLayer {
    fn reseed(&mut self) {
        let (w, h, dpr) = dom::sync_canvas_to_viewport(&self.canvas);
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        self.field = ParticleField::new(w as f32, h as f32, seed);
    }

    pub fn frame(&mut self) {
        self.field.step();
        self.draw();
    }

    fn draw(&self) {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        for p in &self.field.particles {
            let (x, y) = (p.pos.x as f64, p.pos.y as f64);
            let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, p.size as f64 * 8.0)
            else {
                continue;
            };
            _ = gradient.add_color_stop(0.0, &format!("rgba(255,210,170,{:.3})", p.alpha * 0.9));
            _ = gradient.add_color_stop(1.0, "rgba(255,210,170,0)");
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            _ = ctx.arc(x, y, p.size as f64 * 6.0, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }
}
