//! salt-state: shorthand for the salt functions used day to day.
//!
//! Builds `salt-call` (or, in global mode, `salt`) argument vectors from a
//! handful of flags and an action, then runs them with inherited stdio.

pub mod cli;
pub mod core;
pub mod logging;
pub mod transport;
