//! DOM Handles
//!
//! Browser-backed implementations of the controller's view and form traits.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, HtmlFormElement};

use crate::controller::{PatientForm, PatientListView};
use crate::error::{PatientError, PatientResult};
use crate::models::{ListDisplay, Patient};

impl PatientListView for WriteSignal<ListDisplay> {
    fn show_loading(&self) {
        self.set(ListDisplay::Loading);
    }

    fn show_patients(&self, patients: Vec<Patient>) {
        self.set(ListDisplay::Loaded(patients));
    }

    // The message is rendered from `ListDisplay::Failed`
    fn show_error(&self, _message: &str) {
        self.set(ListDisplay::Failed);
    }
}

/// The `#patient-form` element at submit time
#[derive(Clone)]
pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }
}

fn js_error(value: JsValue) -> PatientError {
    PatientError::Form(format!("{:?}", value))
}

impl PatientForm for DomForm {
    fn entries(&self) -> PatientResult<Vec<(String, String)>> {
        let data = FormData::new_with_form(&self.form).map_err(js_error)?;
        let iter = js_sys::try_iter(&data)
            .map_err(js_error)?
            .ok_or_else(|| PatientError::Form("FormData is not iterable".to_string()))?;

        let mut entries = Vec::new();
        for entry in iter {
            let pair: js_sys::Array = entry.map_err(js_error)?.unchecked_into();
            let (Some(name), value) = (pair.get(0).as_string(), pair.get(1)) else {
                continue;
            };
            match value.as_string() {
                Some(value) => entries.push((name, value)),
                None => log::debug!("skipping non-text form field {}", name),
            }
        }
        Ok(entries)
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn notify_failure(&self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("could not show alert: {}", message);
        }
    }
}
