use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

#[inline]
pub fn input_element(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

pub fn set_input_value(document: &web::Document, element_id: &str, value: &str) {
    match input_element(document, element_id) {
        Some(input) => input.set_value(value),
        None => log::warn!("[dom] no input #{element_id} to seed"),
    }
}

/// Attach `handler` to the element's `input` event. Returns false when the
/// element does not exist.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let ok = el
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        .is_ok();
    closure.forget();
    ok
}

/// Size of the canvas as laid out by CSS.
pub fn css_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width(), rect.height())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let dpr = device_pixel_ratio();
    let (w, h) = css_size(canvas);
    let w_px = (w * dpr) as u32;
    let h_px = (h * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}
