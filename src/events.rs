use crate::audio::WebMedia;
use crate::constants::{CLASS_SHOW, CURSOR_DRAGGING, CURSOR_IDLE, PAUSE_SELECTOR, PLAY_SELECTOR};
use crate::dom::{self, Listener};
use crate::input::{self, DragTracker};
use rings_core::{OrbitControls, SceneState, Transport, VisibleButton};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_body_cursor(document: &web::Document, cursor: &'static str) {
    let Some(body) = document.body() else {
        return;
    };
    dom::next_frame(move || dom::set_style(&body, "cursor", cursor));
}

/// Drag to orbit, wheel to zoom. The body cursor follows the drag state.
pub fn wire_orbit_controls(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    orbit: &Rc<RefCell<OrbitControls>>,
) -> Vec<Listener> {
    let drag = Rc::new(RefCell::new(DragTracker::default()));
    set_body_cursor(document, CURSOR_IDLE);
    let target: &web::EventTarget = canvas.unchecked_ref();
    let mut listeners = Vec::with_capacity(4);

    {
        let drag = drag.clone();
        let document = document.clone();
        let canvas = canvas.clone();
        listeners.push(dom::listen(target, "pointerdown", move |ev: web::PointerEvent| {
            if drag
                .borrow_mut()
                .press(ev.button(), ev.client_x() as f32, ev.client_y() as f32)
            {
                _ = canvas.set_pointer_capture(ev.pointer_id());
                set_body_cursor(&document, CURSOR_DRAGGING);
            }
        }));
    }
    {
        let drag = drag.clone();
        let orbit = orbit.clone();
        let canvas = canvas.clone();
        listeners.push(dom::listen(target, "pointermove", move |ev: web::PointerEvent| {
            let moved = drag
                .borrow_mut()
                .moved(ev.client_x() as f32, ev.client_y() as f32);
            if let Some((dx, dy)) = moved {
                let height = canvas.get_bounding_client_rect().height() as f32;
                orbit.borrow_mut().rotate(dx, dy, height);
            }
        }));
    }
    {
        let document = document.clone();
        listeners.push(dom::listen(target, "pointerup", move |_: web::PointerEvent| {
            if drag.borrow_mut().release() {
                set_body_cursor(&document, CURSOR_IDLE);
            }
        }));
    }
    {
        let orbit = orbit.clone();
        listeners.push(dom::listen(target, "wheel", move |ev: web::WheelEvent| {
            ev.prevent_default();
            orbit.borrow_mut().zoom(input::wheel_notch(ev.delta_y()));
        }));
    }
    listeners
}

/// Keep the canvas backing store and the camera aspect in step with the window.
pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<SceneState>>,
) -> Option<Listener> {
    let window = web::window()?;
    let canvas = canvas.clone();
    let scene = scene.clone();
    Some(dom::listen(window.unchecked_ref(), "resize", move |_: web::Event| {
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        scene.borrow_mut().camera.set_viewport(w, h);
    }))
}

/// Show exactly the button `visible` names.
pub fn apply_transport_buttons(document: &web::Document, visible: VisibleButton) {
    let pairs = [
        (PLAY_SELECTOR, visible.play_visible()),
        (PAUSE_SELECTOR, visible.pause_visible()),
    ];
    for (selector, shown) in pairs {
        let Some(el) = dom::query(document, selector) else {
            continue;
        };
        if shown {
            dom::add_class(&el, CLASS_SHOW);
        } else {
            dom::remove_class(&el, CLASS_SHOW);
        }
    }
}

/// `.play` and `.pause` clicks drive the transport.
pub fn wire_transport(
    document: &web::Document,
    transport: &Rc<RefCell<Transport<WebMedia>>>,
) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(2);
    for (selector, play) in [(PLAY_SELECTOR, true), (PAUSE_SELECTOR, false)] {
        let Some(button) = dom::query(document, selector) else {
            continue;
        };
        let transport = transport.clone();
        let document = document.clone();
        listeners.push(dom::listen(
            button.unchecked_ref(),
            "click",
            move |_: web::MouseEvent| {
                let visible = if play {
                    transport.borrow_mut().play()
                } else {
                    transport.borrow_mut().pause()
                };
                apply_transport_buttons(&document, visible);
            },
        ));
    }
    listeners
}
