//! Evaluation configuration: YAML loading, validation and CLI arguments

pub mod cli;
mod loader;
mod validate;

pub use cli::{apply_overrides, parse_args, Cli, Command};
pub use loader::{load_config, load_or_default};
pub use validate::{validate_config, ValidationError};
