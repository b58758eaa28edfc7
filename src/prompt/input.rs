//! Retry-until-valid input loops.
//!
//! Both loops are unbounded: they return only once a line is accepted, or when
//! the console itself fails (for instance [`PromptError::InputClosed`]).
//!
//! [`PromptError::InputClosed`]: crate::error::PromptError::InputClosed

use super::console::Console;
use crate::error::Result;
use tracing::debug;

/// Reads lines until `parse` accepts one and returns the parsed value.
///
/// `parse` returns `Err(message)` to reject a line; the message is shown as a
/// warning and the prompt is repeated.
pub fn read_parsed<C, T, F>(console: &mut C, prompt: &str, mut parse: F) -> Result<T>
where
    C: Console + ?Sized,
    F: FnMut(&str) -> std::result::Result<T, String>,
{
    loop {
        let line = console.read_line(prompt)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(message) => {
                debug!("Rejected input {:?}: {}", line, message);
                console.warn(&message)?;
            },
        }
    }
}

/// Reads lines until one satisfies `accept`, printing `message` after each
/// rejected attempt.
pub fn read_until<C, F>(console: &mut C, prompt: &str, accept: F, message: &str) -> Result<String>
where
    C: Console + ?Sized,
    F: Fn(&str) -> bool,
{
    read_parsed(console, prompt, |line| {
        if accept(line) {
            Ok(line.to_string())
        } else {
            Err(message.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;
    use crate::prompt::console::tests::{output, scripted};

    #[test]
    fn test_read_until_returns_first_accepted_line() {
        let mut console = scripted(&["abc", "12x", "42"]);
        let line = read_until(
            &mut console,
            "Number: ",
            |s| s.parse::<u32>().is_ok(),
            "Not a number.",
        )
        .unwrap();
        assert_eq!(line, "42");
        assert_eq!(output(&console).matches("Not a number.").count(), 2);
        assert_eq!(output(&console).matches("Number: ").count(), 3);
    }

    #[test]
    fn test_read_until_accepts_immediately_without_message() {
        let mut console = scripted(&["ok"]);
        let line = read_until(&mut console, "> ", |_| true, "never").unwrap();
        assert_eq!(line, "ok");
        assert!(!output(&console).contains("never"));
    }

    #[test]
    fn test_read_parsed_uses_per_rejection_message() {
        let mut console = scripted(&["-1", "7"]);
        let value: u8 = read_parsed(&mut console, "> ", |s| {
            s.parse::<u8>().map_err(|_| format!("'{}' is not a byte", s))
        })
        .unwrap();
        assert_eq!(value, 7);
        assert!(output(&console).contains("'-1' is not a byte"));
    }

    #[test]
    fn test_read_until_propagates_closed_input() {
        let mut console = scripted(&["nope"]);
        let err = read_until(&mut console, "> ", |s| s == "yes", "again").unwrap_err();
        assert!(matches!(err, PromptError::InputClosed));
    }
}
