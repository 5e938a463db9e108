use leptos::prelude::*;

/// Text input bound to a form field.
///
/// The input is uncontrolled: `value` only sets the initial value, the
/// browser owns what the user types and submits it under `name`.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Initial value
    #[prop(into)]
    value: Signal<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Submission name
    #[prop(optional, into)]
    name: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_name = move || name.get().unwrap_or_default();

    view! {
        <div class="form-group">
            {move || label.get().map(|l| view! {
                <label class="control-label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                name=input_name
                class="form-control"
                type="text"
                value=move || value.get()
            />
        </div>
    }
}
