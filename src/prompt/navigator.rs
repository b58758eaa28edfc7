//! Interactive directory browser.
//!
//! The session holds a single cursor, the current directory, and re-lists its
//! subdirectories on every turn so that directories created from the prompt
//! (or by anyone else) show up immediately.

use super::console::Console;
use crate::error::Result;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Settings for [`navigate`].
#[derive(Debug, Clone)]
pub struct NavigatorConfig {
    /// Text shown before each command is read.
    pub prompt: String,
    /// Text shown when asking for a new directory name.
    pub new_dir_prompt: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            prompt: "Choose a directory: ".to_string(),
            new_dir_prompt: "Name of the new directory: ".to_string(),
        }
    }
}

/// One parsed line of navigator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Accept the current directory.
    Select,
    /// Move to the parent directory.
    Up,
    /// Create a subdirectory under the current one.
    Create,
    /// Move into the listed subdirectory at this index.
    Enter(usize),
    Invalid,
}

impl NavCommand {
    /// Parses `line` against a listing of `count` subdirectories.
    pub fn parse(line: &str, count: usize) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return NavCommand::Select;
        }
        match line.to_lowercase().as_str() {
            "b" => NavCommand::Up,
            "n" => NavCommand::Create,
            other if other.chars().all(|c| c.is_ascii_digit()) => match other.parse::<usize>() {
                Ok(index) if index < count => NavCommand::Enter(index),
                _ => NavCommand::Invalid,
            },
            _ => NavCommand::Invalid,
        }
    }
}

/// Immediate subdirectories of `dir`, sorted by name. Files are skipped.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

/// Creates `parent/name`; an existing directory counts as success.
///
/// `name` may be nested ("a/b") but must stay below `parent`: absolute paths,
/// `.` and `..` components are refused with `InvalidInput`.
pub fn create_subdirectory(parent: &Path, name: &str) -> io::Result<PathBuf> {
    let relative = Path::new(name);
    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "name must stay inside the current directory",
        ));
    }
    let path = parent.join(relative);
    fs::create_dir_all(&path)?;
    Ok(path)
}

fn render<C: Console + ?Sized>(console: &mut C, cursor: &Path, dirs: &[PathBuf]) -> Result<()> {
    console.show("")?;
    console.show(&format!("Current directory: {}", cursor.display()))?;
    if dirs.is_empty() {
        console.show("  (no subdirectories)")?;
    }
    for (i, dir) in dirs.iter().enumerate() {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        console.show(&format!("  [{}] {}", i, name))?;
    }
    console.show("Enter a number to open it, 'b' to go back, 'n' to create a directory, or press Enter to select the current one.")
}

/// Walks the filesystem from `root` until the user accepts a directory.
///
/// Returns the accepted directory as an absolute, canonical path. A root that
/// cannot be resolved, or a directory that cannot be listed, ends the session
/// with an error; failing to create a directory does not.
pub fn navigate<C: Console + ?Sized>(
    console: &mut C,
    root: &Path,
    config: &NavigatorConfig,
) -> Result<PathBuf> {
    let mut cursor = fs::canonicalize(root)?;
    debug!("Navigation started at {}", cursor.display());

    loop {
        let dirs = list_subdirectories(&cursor)?;
        render(console, &cursor, &dirs)?;

        let line = console.read_line(&config.prompt)?;
        match NavCommand::parse(&line, dirs.len()) {
            NavCommand::Select => {
                info!("Directory selected: {}", cursor.display());
                return Ok(cursor);
            },
            NavCommand::Up => match cursor.parent() {
                Some(parent) => {
                    cursor = parent.to_path_buf();
                    debug!("Moved up to {}", cursor.display());
                },
                None => console.show("Already at the filesystem root.")?,
            },
            NavCommand::Create => {
                let name = console.read_line(&config.new_dir_prompt)?;
                let name = name.trim();
                if name.is_empty() {
                    console.show("No name given, nothing created.")?;
                    continue;
                }
                match create_subdirectory(&cursor, name) {
                    Ok(path) => {
                        debug!("Created {}", path.display());
                        console.show(&format!("Directory '{}' created.", name))?;
                    },
                    Err(e) => {
                        warn!("Failed to create directory {:?}: {}", name, e);
                        console.warn(&format!("Error creating directory '{}': {}", name, e))?;
                    },
                }
            },
            NavCommand::Enter(index) => {
                cursor = dirs[index].clone();
                debug!("Moved into {}", cursor.display());
            },
            NavCommand::Invalid => console.warn(INVALID_CHOICE)?,
        }
    }
}
