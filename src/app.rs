// Page bootstrap: grabs the canvas by id, sizes it to the viewport, wires the
// resize/pointer listeners, and drives the animation loop until the page is
// torn down.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::FieldConfig;
use crate::renderer::Renderer;
use crate::utils::Timer;
use crate::ParticleField;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

#[wasm_bindgen]
pub fn start_particle_field(canvas_id: &str) -> Result<(), JsValue> {
    start_particle_field_with_config(canvas_id, &FieldConfig::new())
}

#[wasm_bindgen]
pub fn start_particle_field_with_config(
    canvas_id: &str,
    config: &FieldConfig,
) -> Result<(), JsValue> {
    crate::initialize();
    let _timer = Timer::new("particle field startup");

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no canvas element with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()?;

    let (width, height) = viewport_size(&window)?;
    canvas.set_width(width);
    canvas.set_height(height);

    let renderer = Renderer::new(&canvas)?;
    let field = Rc::new(RefCell::new(ParticleField::with_config(
        width, height, config,
    )));
    console::log_1(
        &format!(
            "particle field: {} particles for a {}x{} viewport",
            field.borrow().particle_count(),
            width,
            height
        )
        .into(),
    );

    register_resize_handler(&window, &canvas, &field)?;
    register_pointer_handlers(&document, &field)?;
    run_frame_loop(&window, renderer, field)
}

fn register_resize_handler(
    window: &Window,
    canvas: &HtmlCanvasElement,
    field: &Rc<RefCell<ParticleField>>,
) -> Result<(), JsValue> {
    let closure = {
        let window = window.clone();
        let canvas = canvas.clone();
        let field = field.clone();
        Closure::wrap(Box::new(move || {
            if let Ok((width, height)) = viewport_size(&window) {
                canvas.set_width(width);
                canvas.set_height(height);
                field.borrow_mut().resize(width, height);
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// Pointer coordinates are forwarded as-is; no smoothing or debouncing
fn register_pointer_handlers(
    document: &Document,
    field: &Rc<RefCell<ParticleField>>,
) -> Result<(), JsValue> {
    let mouse = {
        let field = field.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            field
                .borrow_mut()
                .pointer_moved(event.client_x() as f64, event.client_y() as f64);
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback("mousemove", mouse.as_ref().unchecked_ref())?;
    mouse.forget();

    let touch = {
        let field = field.clone();
        Closure::wrap(Box::new(move |event: TouchEvent| {
            if let Some(touch) = event.touches().get(0) {
                field
                    .borrow_mut()
                    .pointer_moved(touch.client_x() as f64, touch.client_y() as f64);
            }
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback("touchmove", touch.as_ref().unchecked_ref())?;
    touch.forget();

    Ok(())
}

// `frame` holds the animation closure so it can reschedule itself through
// request_animation_frame. There is no stop condition; the loop ends when the
// page is discarded.
fn run_frame_loop(
    window: &Window,
    renderer: Renderer,
    field: Rc<RefCell<ParticleField>>,
) -> Result<(), JsValue> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();

    let window_handle = window.clone();
    *first.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut field = field.borrow_mut();
            field.update();
            renderer.clear_screen(field.width(), field.height());
            renderer.render_particles(field.particles());
            renderer.render_connections(field.particles(), field.config().connection_radius);
        }
        window_handle
            .request_animation_frame(frame.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .expect("failed to schedule the next animation frame");
    }) as Box<dyn FnMut()>));

    window.request_animation_frame(first.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    Ok(())
}

fn viewport_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or("viewport width unavailable")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("viewport height unavailable")?;
    Ok((width as u32, height as u32))
}
