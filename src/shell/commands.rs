//! Recognized shell commands and their help descriptions.

use std::collections::BTreeMap;
use std::fmt;

/// A command the shell recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Command {
    Help,
    Create,
    List,
    Get,
    Update,
    Delete,
    Exit,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Help,
        Command::Create,
        Command::List,
        Command::Get,
        Command::Update,
        Command::Delete,
        Command::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Create => "create",
            Command::List => "list",
            Command::Get => "get",
            Command::Update => "update",
            Command::Delete => "delete",
            Command::Exit => "exit",
        }
    }

    /// Description shown by `help` in the default table.
    pub fn default_description(self) -> &'static str {
        match self {
            Command::Help => "Display this help message",
            Command::Create => "Create a new todo",
            Command::List => "List all todos",
            Command::Get => "Get a todo by title or id",
            Command::Update => "Update a todo",
            Command::Delete => "Delete a todo",
            Command::Exit => "Exit the program",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapping from command word to command and description.
///
/// Iteration is by command word, which is the order `help` prints in.
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: BTreeMap<&'static str, (Command, String)>,
}

impl Default for CommandTable {
    fn default() -> Self {
        let entries = Command::ALL
            .into_iter()
            .map(|c| (c.name(), (c, c.default_description().to_string())))
            .collect();
        Self { entries }
    }
}

impl CommandTable {
    /// Replace the help description of a command.
    pub fn with_description(mut self, command: Command, description: impl Into<String>) -> Self {
        self.entries
            .insert(command.name(), (command, description.into()));
        self
    }

    /// Look up raw user input. Matching is case-insensitive and exact
    /// otherwise; surrounding whitespace is not trimmed.
    pub fn lookup(&self, input: &str) -> Option<Command> {
        self.entries
            .get(input.to_lowercase().as_str())
            .map(|(command, _)| *command)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(name, (_, description))| (*name, description.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
