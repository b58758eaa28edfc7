//! Option selection menus, by generated index or by caller-supplied key.
//!
//! Both entry points render the same menu and run the same parsing loop;
//! [`select_by_index`] only builds an [`OptionSet`] keyed "1".."N" and hands it
//! to [`select_by_key`].
//!
//! Input is trimmed and lowercased before matching, so keys compare
//! case-insensitively. Selections come back in the order the user typed them,
//! duplicates included; the `all` shortcut returns every option in menu order.

use super::console::Console;
use super::input::read_parsed;
use crate::error::{PromptError, Result};
use std::collections::HashSet;
use tracing::{debug, info};

pub const NO_OPTIONS: &str = "No options available.";
pub const EXACTLY_ONE: &str = "Please select exactly one option.";
pub const AT_LEAST_ONE: &str = "Please select at least one option.";
const ALL_TOKEN: &str = "all";

/// An ordered set of `(key, option)` pairs with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    entries: Vec<(String, String)>,
}

impl OptionSet {
    /// Keys the items "1".."N" in the order given.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| ((i + 1).to_string(), item.into()))
            .collect();
        Self { entries }
    }

    /// Builds a set from explicit pairs, keeping their order.
    ///
    /// Keys are compared case-insensitively, the same way user input is, so
    /// "A" and "a" count as duplicates. Keys that an answer could never reach
    /// are refused: empty keys, keys containing whitespace, and the reserved
    /// `all` token.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for (key, option) in pairs {
            let key = key.into();
            if key.is_empty()
                || key.contains(char::is_whitespace)
                || key.to_lowercase() == ALL_TOKEN
            {
                return Err(PromptError::InvalidKey(key));
            }
            if !seen.insert(key.to_lowercase()) {
                return Err(PromptError::DuplicateKey(key));
            }
            entries.push((key, option.into()));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Looks up an option by key, ignoring case.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| k.to_lowercase() == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every option, in menu order.
    pub fn options(&self) -> Vec<String> {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Menu lines with keys right-aligned to the widest key.
    pub fn render(&self) -> Vec<String> {
        let width = self
            .entries
            .iter()
            .map(|(k, _)| k.chars().count())
            .max()
            .unwrap_or(0);
        self.entries
            .iter()
            .map(|(key, option)| format!("{:>width$}) {}", key, option, width = width))
            .collect()
    }
}

/// Settings for [`select_by_index`] and [`select_by_key`].
#[derive(Debug, Clone)]
pub struct SelectConfig {
    /// Text shown before each read.
    pub prompt: String,
    /// Require exactly one key per answer.
    pub single_select: bool,
    /// Accept `all` as a shortcut for every option. Ignored in single-select mode.
    pub allow_all: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter your choice(s) separated by spaces: ".to_string(),
            single_select: false,
            allow_all: true,
        }
    }
}

impl SelectConfig {
    /// One option per answer, no `all` shortcut.
    pub fn single() -> Self {
        Self {
            prompt: "Enter your choice: ".to_string(),
            single_select: true,
            allow_all: false,
        }
    }

    /// Any number of options, optionally with the `all` shortcut.
    pub fn multi(allow_all: bool) -> Self {
        Self {
            allow_all,
            ..Self::default()
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Whether the `all` shortcut is live for this call.
    pub fn all_enabled(&self) -> bool {
        self.allow_all && !self.single_select
    }
}

/// Turns one raw answer into the selected options, or a rejection message.
pub fn parse_selection(
    options: &OptionSet,
    config: &SelectConfig,
    line: &str,
) -> std::result::Result<Vec<String>, String> {
    let line = line.trim().to_lowercase();
    if config.all_enabled() && line == ALL_TOKEN {
        return Ok(options.options());
    }

    let keys: Vec<&str> = line.split_whitespace().collect();
    if config.single_select && keys.len() != 1 {
        return Err(EXACTLY_ONE.to_string());
    }
    if keys.is_empty() {
        return Err(AT_LEAST_ONE.to_string());
    }

    let invalid: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| options.get(key).is_none())
        .collect();
    if !invalid.is_empty() {
        return Err(format!(
            "Invalid selection: {}. Please choose from the listed keys.",
            invalid.join(", ")
        ));
    }

    Ok(keys
        .iter()
        .filter_map(|key| options.get(key))
        .map(str::to_string)
        .collect())
}

/// Presents `items` keyed "1".."N" and returns what the user picked.
pub fn select_by_index<C, S>(console: &mut C, items: &[S], config: &SelectConfig) -> Result<Vec<String>>
where
    C: Console + ?Sized,
    S: AsRef<str>,
{
    let options = OptionSet::from_items(items.iter().map(|item| item.as_ref()));
    select_by_key(console, &options, config)
}

/// Presents `options` under their own keys and returns what the user picked.
pub fn select_by_key<C: Console + ?Sized>(
    console: &mut C,
    options: &OptionSet,
    config: &SelectConfig,
) -> Result<Vec<String>> {
    if options.is_empty() {
        console.show(NO_OPTIONS)?;
        return Ok(Vec::new());
    }

    for line in options.render() {
        console.show(&line)?;
    }
    if config.all_enabled() {
        console.show("Type 'all' to select every option.")?;
    }

    debug!(
        "Selecting from {} options (single: {}, all: {})",
        options.len(),
        config.single_select,
        config.all_enabled()
    );
    let selected = read_parsed(console, &config.prompt, |line| {
        parse_selection(options, config, line)
    })?;
    info!("Selected {} option(s)", selected.len());
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::console::tests::{output, scripted};
    use rstest::rstest;

    const FRUITS: [&str; 4] = ["Apple", "Banana", "Cherry", "Date"];

    fn keyed() -> OptionSet {
        OptionSet::from_pairs([("a", "Apple"), ("b", "Banana")]).unwrap()
    }

    #[rstest]
    #[case("1", "Apple")]
    #[case("2", "Banana")]
    #[case(" 4 ", "Date")]
    fn test_single_select_returns_one_option(#[case] input: &str, #[case] expected: &str) {
        let mut console = scripted(&[input]);
        let picked = select_by_index(&mut console, &FRUITS, &SelectConfig::single()).unwrap();
        assert_eq!(picked, vec![expected.to_string()]);
    }

    #[rstest]
    #[case("0")]
    #[case("5")]
    #[case("x")]
    fn test_out_of_range_index_reprompts(#[case] bad: &str) {
        let mut console = scripted(&[bad, "3"]);
        let picked = select_by_index(&mut console, &FRUITS, &SelectConfig::single()).unwrap();
        assert_eq!(picked, vec!["Cherry"]);
        assert!(output(&console).contains("Invalid selection"));
    }

    #[test]
    fn test_multi_select_keeps_typed_order() {
        let mut console = scripted(&["3 1"]);
        let picked = select_by_index(&mut console, &FRUITS, &SelectConfig::multi(false)).unwrap();
        assert_eq!(picked, vec!["Cherry", "Apple"]);
    }

    #[test]
    fn test_multi_select_first_and_third() {
        let mut console = scripted(&["1 3"]);
        let picked = select_by_index(&mut console, &FRUITS, &SelectConfig::default()).unwrap();
        assert_eq!(picked, vec!["Apple", "Cherry"]);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let mut console = scripted(&["2 2"]);
        let picked = select_by_index(&mut console, &FRUITS, &SelectConfig::default()).unwrap();
        assert_eq!(picked, vec!["Banana", "Banana"]);
    }

    #[test]
    fn test_all_returns_every_option_in_order() {
        let mut console = scripted(&["  ALL "]);
        let picked = select_by_index(&mut console, &FRUITS, &SelectConfig::multi(true)).unwrap();
        assert_eq!(picked, FRUITS.to_vec());
        assert!(output(&console).contains("Type 'all'"));
    }

    #[test]
    fn test_all_is_ignored_in_single_mode() {
        let mut config = SelectConfig::single();
        config.allow_all = true;
        assert!(!config.all_enabled());

        let mut console = scripted(&["all", "1"]);
        let picked = select_by_index(&mut console, &FRUITS, &config).unwrap();
        assert_eq!(picked, vec!["Apple"]);
        assert!(!output(&console).contains("Type 'all'"));
    }

    #[test]
    fn test_all_without_flag_is_an_unknown_key() {
        let err = parse_selection(
            &OptionSet::from_items(FRUITS),
            &SelectConfig::multi(false),
            "all",
        )
        .unwrap_err();
        assert!(err.contains("all"));
    }

    #[test]
    fn test_single_mode_rejects_several_keys() {
        let mut console = scripted(&["1 2", "2"]);
        let picked = select_by_index(&mut console, &FRUITS, &SelectConfig::single()).unwrap();
        assert_eq!(picked, vec!["Banana"]);
        assert_eq!(output(&console).matches(EXACTLY_ONE).count(), 1);
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let mut console = scripted(&["   ", "1"]);
        let picked = select_by_index(&mut console, &FRUITS, &SelectConfig::default()).unwrap();
        assert_eq!(picked, vec!["Apple"]);
        assert!(output(&console).contains(AT_LEAST_ONE));
    }

    #[test]
    fn test_keyed_selection_follows_user_order() {
        let mut console = scripted(&["b a"]);
        let picked = select_by_key(&mut console, &keyed(), &SelectConfig::default()).unwrap();
        assert_eq!(picked, vec!["Banana", "Apple"]);
    }

    #[test]
    fn test_keyed_selection_rejects_unknown_key() {
        let mut console = scripted(&["c", "a"]);
        let picked = select_by_key(&mut console, &keyed(), &SelectConfig::default()).unwrap();
        assert_eq!(picked, vec!["Apple"]);
        assert!(output(&console).contains("Invalid selection: c."));
    }

    #[test]
    fn test_partially_invalid_input_selects_nothing() {
        let err = parse_selection(&keyed(), &SelectConfig::default(), "a z b q").unwrap_err();
        assert!(err.contains("z, q"));
    }

    #[test]
    fn test_uppercase_keys_match_lowercased_input() {
        let options = OptionSet::from_pairs([("Y", "Yes please"), ("N", "No thanks")]).unwrap();
        let mut console = scripted(&["N"]);
        let picked = select_by_key(&mut console, &options, &SelectConfig::single()).unwrap();
        assert_eq!(picked, vec!["No thanks"]);
    }

    #[test]
    fn test_empty_set_returns_without_prompting() {
        let mut console = scripted(&[]);
        let items: [&str; 0] = [];
        let picked = select_by_index(&mut console, &items, &SelectConfig::default()).unwrap();
        assert!(picked.is_empty());
        let out = output(&console);
        assert!(out.contains(NO_OPTIONS));
        assert!(!out.contains("Enter your choice"));
    }

    #[test]
    fn test_one_by_one_matches_multi_select() {
        let mut one_by_one = Vec::new();
        for i in 1..=FRUITS.len() {
            let key = i.to_string();
            let mut console = scripted(&[key.as_str()]);
            one_by_one.extend(select_by_index(&mut console, &FRUITS, &SelectConfig::single()).unwrap());
        }

        let mut console = scripted(&["1 2 3 4"]);
        let all_at_once = select_by_index(&mut console, &FRUITS, &SelectConfig::multi(false)).unwrap();
        assert_eq!(one_by_one, all_at_once);
    }

    #[test]
    fn test_render_right_aligns_keys() {
        let items: Vec<String> = (1..=10).map(|i| format!("item {}", i)).collect();
        let lines = OptionSet::from_items(&items).render();
        assert_eq!(lines[0], " 1) item 1");
        assert_eq!(lines[9], "10) item 10");
    }

    #[rstest]
    #[case("")]
    #[case("two words")]
    #[case("ALL")]
    fn test_unselectable_keys_are_refused(#[case] key: &str) {
        let err = OptionSet::from_pairs([("a", "Apple"), (key, "Hidden")]).unwrap_err();
        assert!(matches!(err, PromptError::InvalidKey(k) if k == key));
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let options = OptionSet::from_pairs([("z", "Zucchini"), ("a", "Apple")]).unwrap();
        let pairs: Vec<(&str, &str)> = options.iter().collect();
        assert_eq!(pairs, vec![("z", "Zucchini"), ("a", "Apple")]);

        let set = OptionSet::from_items(FRUITS);
        let numbered: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(numbered, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_duplicate_keys_are_refused() {
        let err = OptionSet::from_pairs([("a", "Apple"), ("A", "Avocado")]).unwrap_err();
        assert!(matches!(err, PromptError::DuplicateKey(key) if key == "A"));
    }
}
