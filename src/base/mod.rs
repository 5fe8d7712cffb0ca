//! Foundation types for the name subsystem.
//!
//! This module provides the pieces every parser depends on:
//! - [`Kind`] - Tags for the name variants
//! - [`NameError`], [`Problem`] - Error taxonomy
//! - Bare-name and integer validation
//!
//! This module has NO dependencies on other namekit modules.

mod error;
mod kind;
pub mod validate;

pub use error::{NameError, NameResult, Problem, ProblemContext};
pub use kind::Kind;
pub use validate::{UNKNOWN_IDENTIFIER, is_reserved};
