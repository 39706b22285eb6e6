//! Process transport: run a plan's invocations in order.

pub mod local;

use crate::core::error::StateError;
use crate::core::types::{Invocation, Purpose};

pub use local::LocalRunner;

/// Runs one external invocation to completion.
pub trait Runner {
    fn run(&mut self, invocation: &Invocation) -> Result<(), StateError>;
}

/// Run invocations strictly in order, stopping at the first failure.
/// Failures of named steps (the sync pair) are wrapped with the step name.
pub fn execute<R: Runner + ?Sized>(
    invocations: &[Invocation],
    runner: &mut R,
) -> Result<(), StateError> {
    for inv in invocations {
        tracing::debug!(step = %inv.purpose, argv = %inv, "executing");
        let result = runner.run(inv);
        match (result, inv.purpose) {
            (Ok(()), _) => {}
            (Err(e), Purpose::Command) => return Err(e),
            (Err(e), step) => {
                return Err(StateError::Step {
                    step,
                    source: Box::new(e),
                })
            }
        }
    }
    Ok(())
}
