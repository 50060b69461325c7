//! Domain layer: typing-status record and lenient boolean decoding.

pub mod boolean_like;
pub mod typing_status;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
