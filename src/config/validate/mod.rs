//! Configuration validation
//!
//! Validates evaluation configuration for correctness before any table is read.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::validate_config;
