//! Appearance panel UI module
//!
//! - view_model.rs: derived values (title, state class, birthdate parts) as memos
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::AppearancePanel;
pub use view_model::AppearancePanelViewModel;
