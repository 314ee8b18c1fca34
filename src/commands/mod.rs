mod validate;

pub use validate::{OutputMode, validate_command};
