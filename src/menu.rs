use anyhow::Result;

use crate::console::Console;

pub const PROMPT: &str = "Choose a menu option";

/// One selectable action: a display label plus the zero-argument handler
/// invoked when its ordinal is chosen.
pub struct MenuEntry<'a> {
    label: String,
    handler: Box<dyn Fn() + 'a>,
}

impl<'a> MenuEntry<'a> {
    pub fn new(label: impl Into<String>, handler: impl Fn() + 'a) -> Self {
        Self {
            label: label.into(),
            handler: Box::new(handler),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered menu description. The ordinal of an entry is its position plus
/// one, so ordinals are contiguous over [1, N] by construction.
pub struct Menu<'a> {
    entries: Vec<MenuEntry<'a>>,
}

impl<'a> Menu<'a> {
    pub fn new(entries: Vec<MenuEntry<'a>>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// The input did not parse as an integer.
    NotNumeric,
    /// The input parsed but names no ordinal on this menu.
    OutOfRange,
}

impl SelectionError {
    pub fn message(self) -> &'static str {
        match self {
            SelectionError::NotNumeric => "Only numbers allowed!",
            SelectionError::OutOfRange => {
                "The number you input isn't among the menu options."
            }
        }
    }
}

/// Validates one raw input line against a menu of `count` entries, returning
/// the chosen ordinal. Signed input that parses (e.g. "-3") is a range
/// failure, not a parse failure.
pub fn parse_selection(raw: &str, count: usize) -> Result<usize, SelectionError> {
    let choice: i64 = raw
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotNumeric)?;
    if choice < 1 || choice > count as i64 {
        return Err(SelectionError::OutOfRange);
    }
    Ok(choice as usize)
}

/// Renders the menu and prompts until a valid ordinal is entered, then runs
/// the bound handler exactly once. The retry loop is unbounded; valid input
/// or a failing stream are the only exits.
pub fn choose(console: &mut dyn Console, heading: &str, menu: &Menu) -> Result<()> {
    console.notify(heading)?;
    for (i, entry) in menu.entries.iter().enumerate() {
        console.notify(&format!("{}. {}", i + 1, entry.label()))?;
    }

    loop {
        let raw = console.ask(PROMPT)?;
        match parse_selection(&raw, menu.len()) {
            Ok(ordinal) => {
                (menu.entries[ordinal - 1].handler)();
                return Ok(());
            }
            Err(err) => console.notify(err.message())?,
        }
    }
}
