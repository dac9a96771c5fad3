use crate::core::AppState;
use crate::input::{self, DragMode, DragState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub app: Rc<RefCell<AppState>>,
    pub drag: Rc<RefCell<DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_parallax_pointer(&w);
    wire_orbit_drag(&w);
    wire_wheel(&w);
}

// Parallax follows the pointer anywhere in the window, not just the canvas.
fn wire_parallax_pointer(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let ndc = input::pointer_ndc(ev.client_x() as f32, ev.client_y() as f32, width, height);
        w.app.borrow_mut().pointer_moved(ndc);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_orbit_drag(w: &InputWiring) {
    // pointerdown
    {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let Some(mode) = DragMode::from_button(ev.button()) else {
                return;
            };
            let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            w.drag.borrow_mut().begin(mode, ev.pointer_id(), at);
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let (delta, mode) = {
                let mut drag = w.drag.borrow_mut();
                (drag.advance(ev.pointer_id(), at), drag.mode)
            };
            if let Some(delta) = delta {
                let height = w.canvas.client_height() as f32;
                let mut app = w.app.borrow_mut();
                match mode {
                    DragMode::Rotate => app.orbit.rotate(delta, height),
                    DragMode::Pan => app.orbit.pan(delta, height),
                }
            }
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // secondary-button drags pan instead of opening the menu
    {
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup / pointercancel
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            w.drag.borrow_mut().end(ev.pointer_id());
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let notches = input::wheel_notches(ev.delta_y(), ev.delta_mode());
        w.app.borrow_mut().orbit.zoom(notches);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
