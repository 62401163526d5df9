//! Patient List Component
//!
//! Renders the `#patients` list from the shared list display signal.

use leptos::prelude::*;

use crate::context::PatientsContext;
use crate::models::ListDisplay;

#[component]
pub fn PatientList() -> impl IntoView {
    let ctx = expect_context::<PatientsContext>();

    view! {
        <ul id="patients" class="patient-list">
            {move || {
                let display = ctx.list.get();
                match display.placeholder() {
                    Some(text) => text.into_any(),
                    None => display
                        .lines()
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view()
                        .into_any(),
                }
            }}
        </ul>
    }
}

/// Number of patients currently shown, if the list is loaded
pub fn shown_count(display: &ListDisplay) -> Option<usize> {
    match display {
        ListDisplay::Loaded(patients) => Some(patients.len()),
        ListDisplay::Loading | ListDisplay::Failed => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_count() {
        assert_eq!(shown_count(&ListDisplay::Loaded(Vec::new())), Some(0));
        assert_eq!(shown_count(&ListDisplay::Loading), None);
        assert_eq!(shown_count(&ListDisplay::Failed), None);
    }
}
