//! Derived display values of an appearance panel.
//!
//! Every function here is a pure derivation of the panel inputs and is
//! recomputed on each render.

use super::aggregate::{Appearance, AppearanceErrors, RoleTerms};
use crate::shared::form_fields::{form_field_id, form_field_name};
use chrono::{Datelike, NaiveDate};

pub const PANEL_CLASS_DEFAULT: &str = "panel-default";
pub const PANEL_CLASS_DANGER: &str = "panel-danger";

/// Root segments of every appearance field: `performance[appearances][i]...`
pub const FIELD_NAMESPACE: [&str; 2] = ["performance", "appearances"];

/// Day, month and year of a birthdate as separate selector values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdateParts {
    pub day: String,
    /// 1..=12
    pub month: String,
    pub year: String,
}

impl BirthdateParts {
    pub fn from_birthdate(birthdate: Option<NaiveDate>) -> Self {
        match birthdate {
            Some(date) => Self {
                day: date.day().to_string(),
                month: date.month().to_string(),
                year: date.year().to_string(),
            },
            None => Self::default(),
        }
    }
}

/// Name of the participant, or "{participant_term} {index + 1}" when both
/// name parts are blank
pub fn participant_name(appearance: &Appearance, index: usize, participant_term: &str) -> String {
    let full_name = appearance.participant.full_name();
    if full_name.is_empty() {
        format!("{} {}", participant_term, index + 1)
    } else {
        full_name
    }
}

/// Panel heading: participant name with an optional " (Role)" suffix.
///
/// A role missing from `role_terms` is shown by its key.
pub fn panel_title(
    appearance: &Appearance,
    index: usize,
    participant_term: &str,
    role_terms: &RoleTerms,
) -> String {
    let name = participant_name(appearance, index, participant_term);
    match appearance.role() {
        Some(role) => {
            let label = role_terms.label(role).unwrap_or(role);
            format!("{} ({})", name, label)
        }
        None => name,
    }
}

pub fn panel_class(errors: &AppearanceErrors) -> &'static str {
    if errors.is_empty() {
        PANEL_CLASS_DEFAULT
    } else {
        PANEL_CLASS_DANGER
    }
}

/// Errors of the appearance at `index`; an index past the end has none
pub fn errors_at(errors: &[AppearanceErrors], index: usize) -> AppearanceErrors {
    errors.get(index).cloned().unwrap_or_default()
}

/// Only the first panel and panels with errors start expanded
pub fn begins_expanded(index: usize, errors: &AppearanceErrors) -> bool {
    index == 0 || !errors.is_empty()
}

/// Field naming for the appearance at `index`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppearanceFieldPrefix {
    pub index: usize,
}

impl AppearanceFieldPrefix {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn field_id(&self, attributes: &[&str]) -> String {
        let index = self.index.to_string();
        form_field_id(&field_segments(&index, attributes))
    }

    pub fn field_name(&self, attributes: &[&str]) -> String {
        let index = self.index.to_string();
        form_field_name(&field_segments(&index, attributes))
    }
}

fn field_segments<'a>(index: &'a str, attributes: &[&'a str]) -> Vec<&'a str> {
    let mut segments: Vec<&str> =
        Vec::with_capacity(FIELD_NAMESPACE.len() + 1 + attributes.len());
    segments.extend_from_slice(&FIELD_NAMESPACE);
    segments.push(index);
    segments.extend_from_slice(attributes);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_appearance::aggregate::Participant;

    fn appearance(given: &str, family: &str, role: Option<&str>) -> Appearance {
        Appearance {
            participant: Participant {
                given_name: given.to_string(),
                family_name: family.to_string(),
                birthdate: None,
            },
            role: role.map(str::to_string),
            instrument: None,
        }
    }

    #[test]
    fn test_title_with_name() {
        let a = appearance("Ana", "Lee", None);
        assert_eq!(panel_title(&a, 2, "Participant", &RoleTerms::default()), "Ana Lee");
    }

    #[test]
    fn test_title_fallback() {
        let a = appearance("", "", None);
        assert_eq!(
            panel_title(&a, 2, "Participant", &RoleTerms::default()),
            "Participant 3"
        );

        let a = appearance("  ", " ", None);
        assert_eq!(panel_title(&a, 0, "Musician", &RoleTerms::default()), "Musician 1");
    }

    #[test]
    fn test_title_with_single_name_part() {
        let terms = RoleTerms::default();
        assert_eq!(panel_title(&appearance("Ana", "", None), 0, "Participant", &terms), "Ana");
        assert_eq!(panel_title(&appearance("", "Lee", None), 0, "Participant", &terms), "Lee");
    }

    #[test]
    fn test_title_with_role() {
        let terms: RoleTerms = [("soloist", "Soloist")].into_iter().collect();
        let a = appearance("Ana", "Lee", Some("soloist"));
        assert_eq!(panel_title(&a, 2, "Participant", &terms), "Ana Lee (Soloist)");

        let a = appearance("", "", Some("soloist"));
        assert_eq!(panel_title(&a, 4, "Participant", &terms), "Participant 5 (Soloist)");
    }

    #[test]
    fn test_title_unknown_role_uses_key() {
        let a = appearance("Ana", "Lee", Some("accompanist"));
        assert_eq!(
            panel_title(&a, 0, "Participant", &RoleTerms::default()),
            "Ana Lee (accompanist)"
        );
    }

    #[test]
    fn test_title_empty_role_has_no_suffix() {
        let terms: RoleTerms = [("soloist", "Soloist")].into_iter().collect();
        let a = appearance("Ana", "Lee", Some(""));
        assert_eq!(panel_title(&a, 0, "Participant", &terms), "Ana Lee");
    }

    #[test]
    fn test_panel_class() {
        let mut errors = AppearanceErrors::default();
        assert_eq!(panel_class(&errors), "panel-default");
        errors.add("given_name", "required");
        assert_eq!(panel_class(&errors), "panel-danger");
    }

    #[test]
    fn test_begins_expanded() {
        let mut errors = AppearanceErrors::default();
        assert!(begins_expanded(0, &errors));
        assert!(!begins_expanded(3, &errors));
        errors.add("role", "required");
        assert!(begins_expanded(3, &errors));
    }

    #[test]
    fn test_errors_at() {
        let mut with_errors = AppearanceErrors::default();
        with_errors.add("given_name", "required");
        let errors = vec![AppearanceErrors::default(), with_errors.clone()];

        assert!(errors_at(&errors, 0).is_empty());
        assert_eq!(errors_at(&errors, 1), with_errors);
        assert!(errors_at(&errors, 2).is_empty());
        assert!(errors_at(&[], 0).is_empty());
    }

    #[test]
    fn test_begins_expanded_by_list_position() {
        let mut with_errors = AppearanceErrors::default();
        with_errors.add("role", "required");
        let errors = vec![AppearanceErrors::default(), AppearanceErrors::default(), with_errors];

        let expanded: Vec<bool> = (0..5)
            .map(|index| begins_expanded(index, &errors_at(&errors, index)))
            .collect();
        assert_eq!(expanded, vec![true, false, true, false, false]);
    }

    #[test]
    fn test_birthdate_parts() {
        let date = NaiveDate::from_ymd_opt(2009, 5, 7).unwrap();
        let parts = BirthdateParts::from_birthdate(Some(date));
        assert_eq!(parts.day, "7");
        assert_eq!(parts.month, "5");
        assert_eq!(parts.year, "2009");

        let parts = BirthdateParts::from_birthdate(None);
        assert_eq!(parts, BirthdateParts::default());
        assert_eq!(parts.day, "");
        assert_eq!(parts.month, "");
        assert_eq!(parts.year, "");
    }

    #[test]
    fn test_birthdate_parts_recombine() {
        let mut date = NaiveDate::from_ymd_opt(1999, 12, 25).unwrap();
        let end = NaiveDate::from_ymd_opt(2001, 3, 2).unwrap();
        while date <= end {
            let parts = BirthdateParts::from_birthdate(Some(date));
            let recombined = NaiveDate::from_ymd_opt(
                parts.year.parse().unwrap(),
                parts.month.parse().unwrap(),
                parts.day.parse().unwrap(),
            );
            assert_eq!(recombined, Some(date));
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_field_prefix() {
        let prefix = AppearanceFieldPrefix::new(2);
        assert_eq!(
            prefix.field_id(&["participant", "given_name"]),
            "performance_appearances_2_participant_given_name"
        );
        assert_eq!(
            prefix.field_name(&["participant", "given_name"]),
            "performance[appearances][2][participant][given_name]"
        );
        assert_eq!(prefix.field_name(&["role"]), "performance[appearances][2][role]");
    }

    #[test]
    fn test_field_ids_are_unique_per_index() {
        let a = AppearanceFieldPrefix::new(1).field_id(&["role"]);
        let b = AppearanceFieldPrefix::new(11).field_id(&["role"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_field_prefix_multi_digit_index() {
        let prefix = AppearanceFieldPrefix::new(12);
        assert_eq!(prefix.field_id(&[]), "performance_appearances_12");
        assert_eq!(
            prefix.field_name(&["participant", "birthdate(1i)"]),
            "performance[appearances][12][participant][birthdate(1i)]"
        );
    }
}
