pub mod form_field;
pub mod link;
pub mod navbar;

pub use form_field::{render_form_field, show_field_error, FieldSpec};
pub use link::render_link;
pub use navbar::render_navbar;
