pub mod form_field;

pub use form_field::FormField;
