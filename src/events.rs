use crate::chart::ChartSurface;
use crate::dom;
use idmt_core::{ChangeNotifier, ParamField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Subscribe each named relay input to the notifier. Returns how many of the
/// six inputs were found on the page.
pub fn wire_parameter_inputs(
    document: &web::Document,
    notifier: &Rc<RefCell<ChangeNotifier>>,
) -> usize {
    let mut wired = 0;
    for field in ParamField::ALL {
        let notifier = notifier.clone();
        let ok = dom::add_input_listener(document, field.id(), move || {
            notifier.borrow_mut().notify(field);
        });
        if ok {
            wired += 1;
        } else {
            log::warn!("[events] input #{} not found", field.id());
        }
    }
    wired
}

// Keep the backing store at CSS size * devicePixelRatio and repaint the last curves
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, chart: Rc<RefCell<ChartSurface>>) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        chart.borrow().redraw();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
