//! Shared infrastructure for the admet-eval crates.
//!
//! - Error handling with actionable diagnostics
//! - Output formats and terminal table rendering

pub mod error;
pub mod output;

pub use error::{AdmetError, ErrorCategory, Result};
pub use output::{OutputFormat, Table, TableBuilder};
