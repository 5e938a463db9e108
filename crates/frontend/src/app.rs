use crate::bootstrap::{load_registration_form_data, RegistrationFormData};
use crate::domain::a001_appearance::ui::list::AppearanceList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let data = load_registration_form_data().unwrap_or_else(|e| {
        log::warn!("Registration form data unavailable, rendering empty form: {}", e);
        RegistrationFormData::default()
    });

    let appearances = RwSignal::new(data.appearances);
    let errors = RwSignal::new(data.errors);
    let options = RwSignal::new(data.options);
    let terms = RwSignal::new(data.terms);

    view! {
        <AppearanceList
            appearances=appearances
            errors=errors
            options=options
            terms=terms
        />
    }
}
