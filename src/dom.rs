use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `querySelector` that logs and returns `None` when nothing matches.
pub fn query(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    match document.query_selector(selector) {
        Ok(Some(el)) => el.dyn_into::<web::HtmlElement>().ok(),
        _ => {
            log::warn!("[dom] no element for {selector}");
            None
        }
    }
}

/// A registered DOM event listener. Dropping the handle removes the listener.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Attach `handler` to `event` on `target`, casting the event to `E`.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &'static str,
    mut handler: impl FnMut(E) + 'static,
) -> Listener
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        handler(ev.unchecked_into::<E>());
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("[dom] addEventListener({event}) failed: {e:?}");
    }
    Listener {
        target: target.clone(),
        event,
        closure,
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
    {
        log::error!("[dom] setTimeout failed: {e:?}");
    }
}

/// Run `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) = window.request_animation_frame(cb.unchecked_ref()) {
        log::error!("[dom] requestAnimationFrame failed: {e:?}");
    }
}

pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Create the full-viewport canvas and append it to `<body>`.
pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {e:?}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("canvas cast: {e:?}"))?;
    let style = canvas.style();
    _ = style.set_property("display", "block");
    _ = style.set_property("width", "100vw");
    _ = style.set_property("height", "100vh");
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {e:?}"))?;
    sync_canvas_backing_size(&canvas);
    Ok(canvas)
}

/// Match the canvas backing store to its CSS size times the device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(w) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}
