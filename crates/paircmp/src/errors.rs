//! Error handling and exit codes.

use paircmp_core::constants::exit_codes;
use paircmp_core::CompareError;

/// Map an application error to a process exit code.
///
/// Errors that carry a [`CompareError`] anywhere in their chain use its
/// code; anything else is a generic failure.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CompareError>())
        .map_or(exit_codes::ERROR_GENERIC, CompareError::exit_code)
}
