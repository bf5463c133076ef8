//! Shared data model for decoded MUD world content.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{LintFinding, validate_zone};
