//! Patient List Frontend App
//!
//! Root component: wires the controller to the list signal and loads the
//! patient list on mount.

use leptos::prelude::*;

use crate::commands::HttpPatientApi;
use crate::components::{shown_count, NewPatientForm, PatientList};
use crate::config::AppConfig;
use crate::context::PatientsContext;
use crate::controller::PatientListController;
use crate::models::ListDisplay;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (list, set_list) = signal(ListDisplay::Loading);

    log::info!("patients endpoint: {}", config.patients_url());
    let controller = PatientListController::new(HttpPatientApi::new(&config), set_list);
    let ctx = PatientsContext::new(list, controller);
    provide_context(ctx);

    // Initial load on mount
    Effect::new(move |_| ctx.reload());

    view! {
        <main class="patients-page">
            <h1>"Patients"</h1>

            <PatientList />

            <p class="patient-count">
                {move || shown_count(&list.get()).map(|n| format!("{} patients", n))}
            </p>

            <h2>"Add patient"</h2>
            <NewPatientForm />
        </main>
    }
}
