//! Core data model shared by every pipeline stage

pub mod error;
pub mod types;

pub use error::{InputError, ValidationError};
pub use types::*;
