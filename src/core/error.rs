//! Error taxonomy for the wrapper.
//!
//! Every variant is fatal and maps to exit status 1. Only `main` prints
//! and terminates; library code returns these up the stack.

use super::types::Purpose;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The action is missing a required argument; usage goes to stderr.
    #[error("missing required argument")]
    Usage,

    #[error("failed to find {program} (is salt installed?)")]
    NotInstalled { program: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed: {status}")]
    ExitStatus { program: String, status: ExitStatus },

    #[error("failed to {step} (err = {source})")]
    Step {
        step: Purpose,
        #[source]
        source: Box<StateError>,
    },
}

impl StateError {
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// True when the handler should print the usage text instead of a message.
    pub fn is_usage(&self) -> bool {
        matches!(self, StateError::Usage)
    }
}
