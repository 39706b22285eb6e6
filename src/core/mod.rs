//! Core logic: value types, configuration, errors, and argument building.

pub mod argv;
pub mod config;
pub mod error;
pub mod types;
