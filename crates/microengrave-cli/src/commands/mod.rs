//! CLI command implementations.

pub mod engrave;
pub mod json_output;
