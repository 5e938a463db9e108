use super::panel::AppearancePanel;
use contracts::domain::a001_appearance::panel::{begins_expanded, errors_at};
use contracts::domain::a001_appearance::{
    Appearance, AppearanceErrors, AppearanceFormOptions, RegistrationTerms,
};
use leptos::prelude::*;

/// All appearances of the performance, one panel each
#[component]
pub fn AppearanceList(
    #[prop(into)] appearances: Signal<Vec<Appearance>>,
    /// Errors by appearance index
    #[prop(into)]
    errors: Signal<Vec<AppearanceErrors>>,
    #[prop(into)] options: Signal<AppearanceFormOptions>,
    #[prop(into)] terms: Signal<RegistrationTerms>,
) -> impl IntoView {
    let count = move || appearances.with(|a| a.len());

    view! {
        <div class="panel-group appearances">
            <For
                each=move || 0..count()
                key=|index| *index
                children=move |index: usize| {
                    let appearance = Signal::derive(move || {
                        appearances.with(|a| a.get(index).cloned().unwrap_or_default())
                    });
                    let appearance_errors = Signal::derive(move || errors.with(|e| errors_at(e, index)));
                    let expanded = appearance_errors.with_untracked(|e| begins_expanded(index, e));

                    view! {
                        <AppearancePanel
                            appearance=appearance
                            index=index
                            options=options
                            errors=appearance_errors
                            terms=terms
                            begins_expanded=expanded
                        />
                    }
                }
            />
        </div>
    }
}
