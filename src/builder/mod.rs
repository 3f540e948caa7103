//! Builder API for state machine construction.
//!
//! This module provides the fluent builder that validates and freezes a
//! transition table, and macros for declaring state and event enums with
//! minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
