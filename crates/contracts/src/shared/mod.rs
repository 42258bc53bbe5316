pub mod api_error;
pub mod config;
pub mod form_state;
pub mod list;
pub mod list_state;
pub mod resource;
pub mod validation;
