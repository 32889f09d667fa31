use idmt_core::{ParamField, ParameterSource, RelaySettings};
use web_sys as web;

use crate::dom;

/// Reads the six relay inputs straight from the page on every call.
#[derive(Clone)]
pub struct DomParameterSource {
    document: web::Document,
}

impl DomParameterSource {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl ParameterSource for DomParameterSource {
    fn raw_value(&self, field: ParamField) -> Option<String> {
        dom::input_element(&self.document, field.id()).map(|el| el.value())
    }
}

/// Write start-up values into the inputs. Does not fire `input` events.
pub fn seed_inputs(document: &web::Document, settings: &RelaySettings) {
    for field in ParamField::ALL {
        let value = settings.get(field.slot).value(field.kind);
        dom::set_input_value(document, field.id(), &value.to_string());
    }
}
