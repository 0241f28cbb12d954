//! Core business logic module
//!
//! Pure rules with no I/O: character-class validation for names and
//! courses, and the title casing applied when values are read back.

pub mod validation;

#[cfg(test)]
mod validation_proptest;
