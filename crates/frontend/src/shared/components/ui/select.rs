use contracts::domain::a001_appearance::SelectOption;
use leptos::prelude::*;

/// Select bound to a form field
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Initially selected value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Prepend an empty option, selected when `value` matches nothing
    #[prop(optional)]
    include_blank: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Submission name
    #[prop(optional, into)]
    name: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let select_name = move || name.get().unwrap_or_default();

    view! {
        <div class="form-group">
            {move || label.get().map(|l| view! {
                <label class="control-label" for=select_id>
                    {l}
                </label>
            })}
            <select id=select_id name=select_name class="form-control">
                {include_blank.then(|| view! { <option value="">""</option> })}
                <For
                    each=move || positioned(options.get())
                    key=|(position, _)| *position
                    children=move |(_, option)| {
                        let SelectOption { value: val, label } = option;
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Options keyed by position: values sent by the server may repeat
fn positioned(options: Vec<SelectOption>) -> Vec<(usize, SelectOption)> {
    options.into_iter().enumerate().collect()
}
