use contracts::domain::a001_appearance::panel::{
    panel_class, panel_title, AppearanceFieldPrefix, BirthdateParts,
};
use contracts::domain::a001_appearance::{
    Appearance, AppearanceErrors, RegistrationTerms, SelectOption,
};
use contracts::shared::date_utils::{day_of_month_options, format_day};
use leptos::prelude::*;

/// ViewModel for one appearance panel
///
/// All values are memos over the panel props; the only local state is the
/// expansion flag.
#[derive(Clone, Copy)]
pub struct AppearancePanelViewModel {
    pub fields: AppearanceFieldPrefix,
    pub expanded: RwSignal<bool>,
    pub title: Memo<String>,
    pub panel_class: Memo<&'static str>,
    pub birthdate: Memo<BirthdateParts>,
}

impl AppearancePanelViewModel {
    pub fn new(
        appearance: Signal<Appearance>,
        index: usize,
        errors: Signal<AppearanceErrors>,
        terms: Signal<RegistrationTerms>,
        begins_expanded: bool,
    ) -> Self {
        let title = Memo::new(move |_| {
            let appearance = appearance.get();
            terms.with(|t| {
                if let Some(role) = appearance.role() {
                    if t.role_terms.label(role).is_none() {
                        log::warn!("Appearance #{}: no label for role '{}'", index, role);
                    }
                }
                panel_title(&appearance, index, &t.participant_term, &t.role_terms)
            })
        });

        Self {
            fields: AppearanceFieldPrefix::new(index),
            expanded: RwSignal::new(begins_expanded),
            title,
            panel_class: Memo::new(move |_| errors.with(panel_class)),
            birthdate: Memo::new(move |_| {
                appearance.with(|a| BirthdateParts::from_birthdate(a.participant.birthdate))
            }),
        }
    }

    pub fn toggle(&self) {
        self.expanded.update(|e| *e = !*e);
    }

    pub fn field_id(&self, attributes: &[&str]) -> String {
        self.fields.field_id(attributes)
    }

    pub fn field_name(&self, attributes: &[&str]) -> String {
        self.fields.field_name(attributes)
    }
}

/// Day selector options: unpadded value, zero-padded label
pub fn day_options() -> Vec<SelectOption> {
    day_of_month_options()
        .into_iter()
        .map(|day| SelectOption::new(day.to_string(), format_day(day)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_options() {
        let options = day_options();
        assert_eq!(options.len(), 31);
        assert_eq!(options[4], SelectOption::new("5", "05"));
        assert_eq!(options[30], SelectOption::new("31", "31"));
    }
}
