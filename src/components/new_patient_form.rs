//! New Patient Form Component
//!
//! `#patient-form`; submissions go through the patient list controller.

use leptos::html;
use leptos::prelude::*;

use crate::context::PatientsContext;
use crate::dom::DomForm;

#[component]
pub fn NewPatientForm() -> impl IntoView {
    let ctx = expect_context::<PatientsContext>();
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match form_ref.get() {
            Some(form) => ctx.submit(DomForm::new(form)),
            None => log::warn!("submit before form was mounted"),
        }
    };

    view! {
        <form id="patient-form" class="patient-form" node_ref=form_ref on:submit=on_submit>
            <label>
                "Name"
                <input type="text" name="name" required=true />
            </label>
            <label>
                "Date of birth"
                <input type="date" name="dob" required=true />
            </label>
            <label>
                "Notes"
                <textarea name="notes" rows="3"></textarea>
            </label>
            <button type="submit">"Add patient"</button>
        </form>
    }
}
