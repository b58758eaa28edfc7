use askline::error::{PromptError, Result};
use askline::prompt::{
    confirm, navigate, read_until, select_by_index, select_by_key, ConfirmConfig, Console,
    NavigatorConfig, OptionSet, SelectConfig,
};
use clap::{Args, Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

/// Entries of the interactive main menu, in display order.
pub const MENU: [&str; 5] = [
    "Confirm (yes/no)",
    "Pick one item",
    "Pick several items",
    "Browse directories",
    "Exit",
];

/// Interactive terminal prompts: confirmations, option menus and a directory browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read answers as plain lines from stdin instead of the interactive terminal
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a yes/no question and print "yes" or "no"
    Confirm(ConfirmArgs),

    /// Pick from items numbered 1..N and print the picks, one per line
    Select(SelectArgs),

    /// Pick from KEY=VALUE pairs by key and print the picked values
    SelectKeys(SelectKeysArgs),

    /// Walk the filesystem and print the chosen directory
    Browse(BrowseArgs),
}

#[derive(Args, Debug)]
pub struct ConfirmArgs {
    /// Question to show
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Treat an empty answer as invalid instead of "yes"
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Accept exactly one item
    #[arg(short, long)]
    pub single: bool,

    /// Allow "all" to pick every item
    #[arg(short, long)]
    pub all: bool,

    /// Items to choose from
    #[arg(required = true)]
    pub items: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SelectKeysArgs {
    /// Accept exactly one key
    #[arg(short, long)]
    pub single: bool,

    /// Allow "all" to pick every value
    #[arg(short, long)]
    pub all: bool,

    /// Options as KEY=VALUE
    #[arg(required = true)]
    pub pairs: Vec<String>,
}

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Directory to start from (default: $ASKLINE_ROOT or ".")
    pub root: Option<PathBuf>,
}

/// Defaults taken from the environment (and `.env`, once loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Starting directory for `browse` when none is given.
    pub browse_root: PathBuf,
    /// Reject empty answers to `confirm` even without `--strict`.
    pub strict_confirm: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            browse_root: PathBuf::from("."),
            strict_confirm: false,
        }
    }
}

impl Settings {
    /// Reads `ASKLINE_ROOT` and `ASKLINE_STRICT_CONFIRM`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let browse_root = env::var("ASKLINE_ROOT")
            .map(PathBuf::from)
            .unwrap_or(defaults.browse_root);
        let strict_confirm = env::var("ASKLINE_STRICT_CONFIRM")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.strict_confirm);
        debug!(
            "Settings: browse_root={}, strict_confirm={}",
            browse_root.display(),
            strict_confirm
        );
        Self {
            browse_root,
            strict_confirm,
        }
    }
}

/// Splits `KEY=VALUE`; the key must be non-empty and contain no whitespace.
pub fn parse_pair(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| PromptError::Cli(format!("Expected KEY=VALUE, got '{}'", raw)))?;
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(PromptError::Cli(format!("Invalid key in '{}'", raw)));
    }
    Ok((key.to_string(), value.to_string()))
}

fn select_config(single: bool, all: bool) -> SelectConfig {
    if single {
        SelectConfig::single()
    } else {
        SelectConfig::multi(all)
    }
}

/// CLI application
pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs `command`, or the interactive menu when there is none.
    pub fn start<C: Console + ?Sized>(&self, console: &mut C, command: Option<Commands>) -> Result<()> {
        match command {
            Some(command) => self.run_command(console, command),
            None => self.interactive(console),
        }
    }

    /// Runs one command and prints its result through `console`.
    pub fn run_command<C: Console + ?Sized>(&self, console: &mut C, command: Commands) -> Result<()> {
        match command {
            Commands::Confirm(args) => {
                let mut config = ConfirmConfig::default();
                if let Some(prompt) = args.prompt {
                    config = config.with_prompt(prompt);
                }
                if args.strict || self.settings.strict_confirm {
                    config = config.strict();
                }
                let answer = confirm(console, &config)?;
                console.show(if answer { "yes" } else { "no" })?;
            },
            Commands::Select(args) => {
                let config = select_config(args.single, args.all);
                let picked = select_by_index(console, args.items.as_slice(), &config)?;
                Self::show_all(console, &picked)?;
            },
            Commands::SelectKeys(args) => {
                let pairs = args
                    .pairs
                    .iter()
                    .map(|raw| parse_pair(raw))
                    .collect::<Result<Vec<_>>>()?;
                let options = OptionSet::from_pairs(pairs)?;
                let config = select_config(args.single, args.all);
                let picked = select_by_key(console, &options, &config)?;
                Self::show_all(console, &picked)?;
            },
            Commands::Browse(args) => {
                let root = args.root.unwrap_or_else(|| self.settings.browse_root.clone());
                let chosen = navigate(console, &root, &NavigatorConfig::default())?;
                console.show(&chosen.display().to_string())?;
            },
        }
        Ok(())
    }

    /// Main menu loop; returns when "Exit" is picked.
    pub fn interactive<C: Console + ?Sized>(&self, console: &mut C) -> Result<()> {
        console.show("Welcome to askline!")?;
        let menu_config = SelectConfig::single().with_prompt("What would you like to do? ");

        loop {
            console.show("")?;
            let picked = select_by_index(console, &MENU, &menu_config)?;
            let Some(choice) = picked.first() else {
                continue;
            };
            debug!("Menu choice: {}", choice);

            let command = match MENU.iter().position(|entry| *entry == choice.as_str()) {
                Some(0) => Commands::Confirm(ConfirmArgs {
                    prompt: None,
                    strict: false,
                }),
                Some(1) | Some(2) => {
                    let items = Self::ask_items(console)?;
                    Commands::Select(SelectArgs {
                        single: choice.as_str() == MENU[1],
                        all: true,
                        items,
                    })
                },
                Some(3) => Commands::Browse(BrowseArgs { root: None }),
                _ => {
                    info!("Leaving interactive menu");
                    console.show("Goodbye!")?;
                    return Ok(());
                },
            };
            self.run_command(console, command)?;
        }
    }

    fn ask_items<C: Console + ?Sized>(console: &mut C) -> Result<Vec<String>> {
        let line = read_until(
            console,
            "Items to choose from (separated by spaces): ",
            |line| !line.trim().is_empty(),
            "Please enter at least one item.",
        )?;
        Ok(line.split_whitespace().map(str::to_string).collect())
    }

    fn show_all<C: Console + ?Sized>(console: &mut C, picked: &[String]) -> Result<()> {
        for item in picked {
            console.show(item)?;
        }
        Ok(())
    }
}
