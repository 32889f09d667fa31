#![cfg(target_arch = "wasm32")]
use idmt_core::{ChangeNotifier, RecomputeController, RelaySettings};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod axis;
mod chart;
mod constants;
mod dom;
mod events;
mod params;
mod spline;

use chart::{ChartStyle, ChartSurface};
use params::DomParameterSource;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("idmt-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CHART_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CHART_CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let chart = Rc::new(RefCell::new(ChartSurface::new(
        canvas.clone(),
        ChartStyle::default(),
    )?));
    events::wire_canvas_resize(&canvas, chart.clone());

    let controller = Rc::new(RefCell::new(RecomputeController::new(chart)));
    let source = DomParameterSource::new(document.clone());

    // Every input edit re-reads all six fields and republishes all three curves
    let notifier = Rc::new(RefCell::new(ChangeNotifier::new()));
    {
        let controller = controller.clone();
        let source = source.clone();
        notifier.borrow_mut().subscribe(move |_| {
            controller.borrow_mut().on_parameter_changed(&source);
        });
    }
    let wired = events::wire_parameter_inputs(&document, &notifier);
    log::info!("[init] wired {wired} of 6 relay inputs");

    params::seed_inputs(&document, &RelaySettings::seeded());
    let settings = controller.borrow_mut().on_parameter_changed(&source);
    log::info!(
        "[init] A=({}, {}) B=({}, {}) C=({}, {})",
        settings.a.pickup_current,
        settings.a.time_multiplier,
        settings.b.pickup_current,
        settings.b.time_multiplier,
        settings.c.pickup_current,
        settings.c.time_multiplier
    );
    Ok(())
}
