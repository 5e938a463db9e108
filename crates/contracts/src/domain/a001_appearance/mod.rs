//! Appearance: one participant-in-a-role entry of a performance.

pub mod aggregate;
pub mod panel;

pub use aggregate::{
    Appearance, AppearanceErrors, AppearanceFormOptions, Participant, RegistrationTerms,
    RoleTerms, SelectOption,
};
