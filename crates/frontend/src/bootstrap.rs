//! Initial form data embedded by the registration page.
//!
//! The server renders
//! `<script type="application/json" id="registration-form-data">{...}</script>`
//! next to the mount point; it carries the appearances, their validation
//! errors, the terms and the selector options.

use contracts::domain::a001_appearance::{
    Appearance, AppearanceErrors, AppearanceFormOptions, RegistrationTerms,
};
use serde::Deserialize;
use thiserror::Error;

pub const DATA_ELEMENT_ID: &str = "registration-form-data";

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("window.document is not available")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("invalid registration form data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationFormData {
    #[serde(default)]
    pub appearances: Vec<Appearance>,
    /// Errors by appearance index; missing entries mean no errors
    #[serde(default)]
    pub errors: Vec<AppearanceErrors>,
    #[serde(default)]
    pub terms: RegistrationTerms,
    #[serde(default)]
    pub options: AppearanceFormOptions,
}

pub fn parse_registration_form_data(json: &str) -> Result<RegistrationFormData, BootstrapError> {
    let data: RegistrationFormData = serde_json::from_str(json)?;
    log::debug!(
        "Registration form data: {} appearance(s), {} with errors",
        data.appearances.len(),
        data.errors.iter().filter(|e| !e.is_empty()).count()
    );
    Ok(data)
}

/// Read and parse the embedded form data from the current document
pub fn load_registration_form_data() -> Result<RegistrationFormData, BootstrapError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BootstrapError::NoDocument)?;
    let element = document
        .get_element_by_id(DATA_ELEMENT_ID)
        .ok_or_else(|| BootstrapError::MissingElement(DATA_ELEMENT_ID.to_string()))?;

    parse_registration_form_data(&element.text_content().unwrap_or_default())
}
