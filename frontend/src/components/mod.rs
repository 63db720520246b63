pub mod form_input;

pub use form_input::FormInput;
