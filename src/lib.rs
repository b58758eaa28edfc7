//! Line-oriented terminal prompts.
//!
//! Every prompt loops until it gets an answer it can use, re-prompting with a
//! message on malformed input. Only environment failures (closed input,
//! unreadable directories) are returned as errors.
//!
//! ```no_run
//! use askline::prompt::{confirm, select_by_index, ConfirmConfig, SelectConfig, TerminalConsole};
//!
//! # fn main() -> askline::error::Result<()> {
//! let mut console = TerminalConsole::new();
//! if confirm(&mut console, &ConfirmConfig::default().with_prompt("Continue? "))? {
//!     let picked = select_by_index(&mut console, &["red", "green", "blue"], &SelectConfig::default())?;
//!     println!("{:?}", picked);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod prompt;
