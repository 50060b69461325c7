//! Infrastructure layer: adapters for config, logging, and payload input.

pub mod config;
pub mod contracts;
pub mod error;
pub mod input;
pub mod logging;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
