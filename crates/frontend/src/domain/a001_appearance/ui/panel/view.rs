use super::view_model::{day_options, AppearancePanelViewModel};
use crate::shared::components::ui::{Input, Select};
use contracts::domain::a001_appearance::{
    Appearance, AppearanceErrors, AppearanceFormOptions, RegistrationTerms,
};
use leptos::prelude::*;

/// Editable fields of one appearance within the performance form
#[component]
pub fn AppearancePanel(
    #[prop(into)] appearance: Signal<Appearance>,
    /// Position in the appearance list
    index: usize,
    #[prop(into)] options: Signal<AppearanceFormOptions>,
    #[prop(into)] errors: Signal<AppearanceErrors>,
    #[prop(into)] terms: Signal<RegistrationTerms>,
    #[prop(optional)] begins_expanded: bool,
) -> impl IntoView {
    let vm = AppearancePanelViewModel::new(appearance, index, errors, terms, begins_expanded);
    log::debug!("AppearancePanel #{} created", index);

    let given_name = Signal::derive(move || appearance.with(|a| a.participant.given_name.clone()));
    let family_name =
        Signal::derive(move || appearance.with(|a| a.participant.family_name.clone()));
    let role = Signal::derive(move || appearance.with(|a| a.role().unwrap_or_default().to_string()));
    let instrument = Signal::derive(move || {
        appearance.with(|a| a.instrument().unwrap_or_default().to_string())
    });

    let birth_day = Signal::derive(move || vm.birthdate.get().day);
    let birth_month = Signal::derive(move || vm.birthdate.get().month);
    let birth_year = Signal::derive(move || vm.birthdate.get().year);

    let days = Signal::derive(day_options);
    let months = Signal::derive(move || options.with(|o| o.birthdate_month_options.clone()));
    let years = Signal::derive(move || options.with(|o| o.birthdate_year_options.clone()));
    let roles = Signal::derive(move || options.with(|o| o.role_options.clone()));
    let instruments = Signal::derive(move || options.with(|o| o.instrument_options.clone()));

    let collapse_class = move || {
        if vm.expanded.get() {
            "panel-collapse collapse in"
        } else {
            "panel-collapse collapse"
        }
    };

    view! {
        <div class=move || format!("panel {}", vm.panel_class.get())>
            <div
                class="panel-heading"
                role="button"
                aria-expanded=move || vm.expanded.get().to_string()
                aria-controls=vm.field_id(&["panel"])
                on:click=move |_| vm.toggle()
            >
                <h4 class="panel-title">{move || vm.title.get()}</h4>
            </div>

            // Collapsed fields stay in the DOM and are still submitted
            <div id=vm.field_id(&["panel"]) class=collapse_class>
                <div class="panel-body">
                    <div class="row">
                        <div class="col-sm-6">
                            <Input
                                label="Given name".to_string()
                                value=given_name
                                id=vm.field_id(&["participant", "given_name"])
                                name=vm.field_name(&["participant", "given_name"])
                            />
                        </div>
                        <div class="col-sm-6">
                            <Input
                                label="Family name".to_string()
                                value=family_name
                                id=vm.field_id(&["participant", "family_name"])
                                name=vm.field_name(&["participant", "family_name"])
                            />
                        </div>
                    </div>

                    <fieldset class="birthdate">
                        <legend class="control-label">"Birthdate"</legend>
                        <div class="row">
                            <div class="col-xs-3">
                                <Select
                                    value=birth_day
                                    options=days
                                    include_blank=true
                                    id=vm.field_id(&["participant", "birthdate(3i)"])
                                    name=vm.field_name(&["participant", "birthdate(3i)"])
                                />
                            </div>
                            <div class="col-xs-5">
                                <Select
                                    value=birth_month
                                    options=months
                                    include_blank=true
                                    id=vm.field_id(&["participant", "birthdate(2i)"])
                                    name=vm.field_name(&["participant", "birthdate(2i)"])
                                />
                            </div>
                            <div class="col-xs-4">
                                <Select
                                    value=birth_year
                                    options=years
                                    include_blank=true
                                    id=vm.field_id(&["participant", "birthdate(1i)"])
                                    name=vm.field_name(&["participant", "birthdate(1i)"])
                                />
                            </div>
                        </div>
                    </fieldset>

                    <div class="row">
                        <div class="col-sm-6">
                            <Select
                                label="Role".to_string()
                                value=role
                                options=roles
                                include_blank=true
                                id=vm.field_id(&["role"])
                                name=vm.field_name(&["role"])
                            />
                        </div>
                        <div class="col-sm-6">
                            <Select
                                label="Instrument".to_string()
                                value=instrument
                                options=instruments
                                include_blank=true
                                id=vm.field_id(&["instrument"])
                                name=vm.field_name(&["instrument"])
                            />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
