//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpPatientApi;
use crate::controller::PatientListController;
use crate::dom::DomForm;
use crate::models::ListDisplay;

pub type AppController = PatientListController<HttpPatientApi, WriteSignal<ListDisplay>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct PatientsContext {
    /// What the patient list shows - read
    pub list: ReadSignal<ListDisplay>,
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl PatientsContext {
    pub fn new(list: ReadSignal<ListDisplay>, controller: AppController) -> Self {
        Self {
            list,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    /// Reload the patient list in the background
    pub fn reload(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.load_patients().await;
        });
    }

    /// Submit the given form in the background
    pub fn submit(&self, form: DomForm) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.submit(&form).await;
        });
    }
}
