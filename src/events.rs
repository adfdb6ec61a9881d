use crate::dom;
use crate::input;
use spiral_core::AnimationDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Clicking the canvas pauses or resumes the animation.
pub fn wire_canvas_click(canvas: &web::HtmlCanvasElement, driver: Rc<RefCell<AnimationDriver>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        driver.borrow_mut().toggle_running();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Space anywhere on the page does the same as a click.
pub fn wire_global_keydown(driver: Rc<RefCell<AnimationDriver>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if input::is_toggle_key(&ev.key(), ev.repeat()) {
                ev.prevent_default();
                driver.borrow_mut().toggle_running();
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
