use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "pls", version, about = "Greets you and keeps track of your tasks")]
pub struct Cli {
    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Directory holding config.json (default: ~/.config/pls)
    #[arg(long = "config-dir", env = "PLS_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all tasks
    #[command(alias = "showtasks")]
    Tasks,

    /// Add a task (put the task name inside quotes)
    Add {
        /// Task name, e.g. "Go shopping"
        task: String,
    },

    /// Edit the text of a task
    #[command(allow_negative_numbers = true)]
    Edit {
        id: TaskId,

        /// New task text
        task: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Mark a task as done
    #[command(allow_negative_numbers = true)]
    Done { id: TaskId },

    /// Mark a task as undone
    #[command(allow_negative_numbers = true)]
    Undone { id: TaskId },

    /// Delete a task
    #[command(alias = "del", allow_negative_numbers = true)]
    Delete { id: TaskId },

    /// Move a task to another position
    #[command(alias = "mv", allow_negative_numbers = true)]
    Move { from: TaskId, to: TaskId },

    /// Swap the position of two tasks
    #[command(allow_negative_numbers = true)]
    Swap { a: TaskId, b: TaskId },

    /// Delete all tasks
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Delete tasks marked as done
    Clean {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Count done tasks
    CountDone,

    /// Count undone tasks
    CountUndone,

    /// Change the name pls calls you
    Callme { name: String },

    /// Reset all data and run setup
    Setup,

    /// Show or hide the task progress bar
    TasksProgress(ShowToggle),

    /// Show or hide quotes on the greeting screen
    Quotes(ShowToggle),

    /// Print the path of the config file
    Config,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version
    Version,
}

/// A task ID as typed on the command line.
///
/// Any integer parses. Zero, negative and oversized values map to IDs no
/// list can hold, so they surface as an invalid ID rather than a usage
/// error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskId {
    text: String,
    value: usize,
}

impl TaskId {
    pub fn get(&self) -> usize {
        self.value
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("expected an integer ID, got '{s}'"));
        }

        let value = if negative {
            0
        } else {
            digits.parse::<usize>().unwrap_or(usize::MAX)
        };
        Ok(TaskId {
            text: text.to_string(),
            value,
        })
    }
}

#[derive(Args, Clone, Copy)]
pub struct ShowToggle {
    /// Turn it on
    #[arg(long = "show", conflicts_with = "no_show")]
    pub show: bool,

    /// Turn it off
    #[arg(long = "no-show")]
    pub no_show: bool,
}

impl ShowToggle {
    /// `--show` is the default when neither flag is given.
    pub fn enabled(self) -> bool {
        !self.no_show
    }
}
