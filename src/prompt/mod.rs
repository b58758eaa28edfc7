//! Interactive, line-oriented prompts.
//!
//! Includes:
//! - `console`: the terminal I/O seam (`dialoguer` terminal or plain reader/writer).
//! - `input`: the retry-until-valid loop every prompt is built on.
//! - `confirm`: yes/no confirmation.
//! - `select`: option menus by index or by key.
//! - `navigator`: directory browser with create support.

mod confirm;
mod console;
mod input;
mod navigator;
mod select;

pub use confirm::*;
pub use console::*;
pub use input::*;
pub use navigator::*;
pub use select::*;
