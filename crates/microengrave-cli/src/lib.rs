//! Microengrave CLI library.
//!
//! Holds the command implementations behind the `microengrave` binary so
//! they can be exercised from tests without spawning a process.

pub mod commands;
