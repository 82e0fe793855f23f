//! Display and formatting utilities

pub mod display;

pub use display::{format_number, print_analysis};
