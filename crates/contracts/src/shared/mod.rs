pub mod date_utils;
pub mod form_fields;
