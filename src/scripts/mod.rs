//! Script definitions
//!
//! A script is a named command configuration that can be run on demand or as part of the
//! startup batch. Definitions carry no behavior of their own beyond validity checks; running
//! them is the job of [`crate::engine`].

pub mod script;

pub use script::{ScriptDefinition, ScriptInputError};
