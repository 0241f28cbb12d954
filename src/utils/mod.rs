pub mod atomic_file;
pub mod json_validator;
