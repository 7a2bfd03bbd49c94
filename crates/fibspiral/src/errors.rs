//! Error handling and exit codes.

use fibspiral_core::constants::exit_codes;
use fibspiral_core::term_count::TermCountError;

/// Map an application error to the process exit code.
///
/// Rejected term counts exit with `ERROR_INVALID_INPUT`; everything else
/// with `ERROR_GENERIC`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<TermCountError>().is_some() {
        exit_codes::ERROR_INVALID_INPUT
    } else {
        exit_codes::ERROR_GENERIC
    }
}
