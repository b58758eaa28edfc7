//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes defining commands, parsing arguments, reading environment defaults,
//! and running the interactive menu on top of the `askline` prompts.

mod commands;

pub use commands::*;
