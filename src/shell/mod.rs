//! Interactive command loop.
//!
//! Reads one command per line, then runs that command (including any
//! follow-up prompts) to completion before reading the next one.

pub mod commands;

pub use commands::{Command, CommandTable};

use crate::db::Database;
use crate::format::{format_todo, format_todos};
use crate::types::{NewTodo, parse_affirmative, parse_todo_id};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};

pub const WELCOME: &str = "Welcome, please enter a command or use 'help' to get started.";
pub const INVALID_COMMAND: &str = "Invalid command. Type 'help' for a list of commands.";

/// Settings for the shell that do not affect what gets stored.
#[derive(Debug, Clone, Default)]
pub struct ShellSettings {
    /// Printed before each command is read. Empty prints nothing.
    pub prompt: String,
}

/// Result of reading and running one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A recognized command ran (or was a no-op).
    Handled,
    /// The line was not a known command.
    Unrecognized,
    /// The user asked to exit.
    Exit,
    /// Input reached end-of-file.
    Closed,
}

pub struct Shell<R, W> {
    db: Database,
    commands: CommandTable,
    settings: ShellSettings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        db: Database,
        commands: CommandTable,
        settings: ShellSettings,
        input: R,
        output: W,
    ) -> Self {
        Self {
            db,
            commands,
            settings,
            input,
            output,
        }
    }

    /// Consume the shell, returning its output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Greet the user, then run commands until `exit` or end of input.
    ///
    /// Returns the outcome that ended the loop.
    pub fn run(&mut self) -> io::Result<Outcome> {
        writeln!(self.output, "{}", WELCOME)?;
        loop {
            match self.read_command()? {
                outcome @ (Outcome::Exit | Outcome::Closed) => return Ok(outcome),
                Outcome::Handled | Outcome::Unrecognized => {}
            }
        }
    }

    /// Read one line and run the command it names.
    pub fn read_command(&mut self) -> io::Result<Outcome> {
        if !self.settings.prompt.is_empty() {
            write!(self.output, "{}", self.settings.prompt)?;
            self.output.flush()?;
        }

        let Some(line) = self.read_line()? else {
            debug!("Input closed");
            return Ok(Outcome::Closed);
        };

        let Some(command) = self.commands.lookup(&line) else {
            writeln!(self.output, "{}", INVALID_COMMAND)?;
            return Ok(Outcome::Unrecognized);
        };
        debug!(%command, "Dispatching command");

        match command {
            Command::Exit => {
                writeln!(self.output, "Exiting program...")?;
                self.output.flush()?;
                Ok(Outcome::Exit)
            }
            Command::Help => {
                self.print_help()?;
                Ok(Outcome::Handled)
            }
            Command::Create => self.create_todo(),
            Command::List => {
                self.list_todos()?;
                Ok(Outcome::Handled)
            }
            Command::Get => self.get_todo(),
            Command::Update | Command::Delete => {
                debug!(%command, "Command has no handler");
                Ok(Outcome::Handled)
            }
        }
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Commands: ")?;
        for (name, description) in self.commands.iter() {
            writeln!(self.output, "{} - {}", name, description)?;
        }
        Ok(())
    }

    fn create_todo(&mut self) -> io::Result<Outcome> {
        let Some(title) = self.prompt("Enter the title of the todo: ")? else {
            return Ok(Outcome::Closed);
        };
        let Some(description) = self.prompt("Enter the description of the todo: ")? else {
            return Ok(Outcome::Closed);
        };
        let Some(due_date) = self.prompt("Enter the due date of the todo: ")? else {
            return Ok(Outcome::Closed);
        };
        let Some(completed) = self.prompt("Is the todo completed? (true/false): ")? else {
            return Ok(Outcome::Closed);
        };

        let todo = NewTodo::from_input(&title, &description, &due_date, &completed);
        match self.db.insert_todo(&todo) {
            Ok(id) => {
                info!(id, "Todo created");
                writeln!(self.output, "Todo created successfully!\n\n")?;
            }
            Err(e) => {
                error!(code = ?e.code(), error = %e, "Error creating todo");
                writeln!(self.output, "Error creating todo.\n\n")?;
            }
        }
        Ok(Outcome::Handled)
    }

    fn list_todos(&mut self) -> io::Result<()> {
        match self.db.list_todos() {
            Ok(todos) => write!(self.output, "{}", format_todos(&todos)),
            Err(e) => writeln!(self.output, "Error listing todos: {}", e),
        }
    }

    fn get_todo(&mut self) -> io::Result<Outcome> {
        let Some(answer) = self.prompt("Do you know the title of the todo? (yes/no): ")? else {
            return Ok(Outcome::Closed);
        };

        let lookup = if parse_affirmative(&answer) {
            let Some(title) = self.prompt("Enter the title of the todo: ")? else {
                return Ok(Outcome::Closed);
            };
            if title.is_empty() {
                None
            } else {
                Some(self.db.get_todo_by_title(&title))
            }
        } else {
            let Some(raw_id) = self.prompt("Enter the id of the todo: ")? else {
                return Ok(Outcome::Closed);
            };
            if raw_id.is_empty() {
                None
            } else {
                match parse_todo_id(&raw_id) {
                    Ok(id) => Some(self.db.get_todo_by_id(id)),
                    Err(e) => {
                        writeln!(self.output, "{}", e)?;
                        return Ok(Outcome::Handled);
                    }
                }
            }
        };

        match lookup {
            Some(Ok(Some(todo))) => {
                write!(self.output, "Todo: \n{}\n\n", format_todo(&todo))?;
            }
            Some(Ok(None)) | None => writeln!(self.output, "No todo found.")?,
            Some(Err(e)) => writeln!(self.output, "Error fetching todo: {}", e)?,
        }
        Ok(Outcome::Handled)
    }

    /// Write `text` without a newline and read the answer.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its terminator, or `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
