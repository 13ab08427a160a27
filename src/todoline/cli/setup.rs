use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo", bin_name = "todo", version)]
#[command(about = "Plain-text to-do list, one item per line", long_about = None)]
pub struct Cli {
    /// Use this store file instead of the configured one
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(long, help_heading = "Options")]
    pub verbose: bool,

    /// Command followed by its arguments, e.g. -add "Buy milk" 01/02/2024
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCommand {
    Add,
    RemoveByTitle,
    ListAll,
    MarkComplete,
    SortDateAscending,
    SortDateDescending,
    UpdateByDay,
}

impl TaskCommand {
    pub const ALL: [TaskCommand; 7] = [
        TaskCommand::Add,
        TaskCommand::RemoveByTitle,
        TaskCommand::ListAll,
        TaskCommand::MarkComplete,
        TaskCommand::SortDateAscending,
        TaskCommand::SortDateDescending,
        TaskCommand::UpdateByDay,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            TaskCommand::Add => "-add",
            TaskCommand::RemoveByTitle => "-remove_by_title",
            TaskCommand::ListAll => "-list_all",
            TaskCommand::MarkComplete => "-mark_complete",
            TaskCommand::SortDateAscending => "-sort_date_ascending",
            TaskCommand::SortDateDescending => "-sort_date_descending",
            TaskCommand::UpdateByDay => "-update_by_day",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            TaskCommand::Add => "<title> <date>",
            TaskCommand::RemoveByTitle => "<title>",
            TaskCommand::ListAll => "",
            TaskCommand::MarkComplete => "<title>",
            TaskCommand::SortDateAscending => "",
            TaskCommand::SortDateDescending => "",
            TaskCommand::UpdateByDay => "<day> <status>",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.token() == token)
    }
}

pub(super) fn print_usage() {
    println!("The command you passed in is not recognized, valid commands are:");
    for cmd in TaskCommand::ALL {
        if cmd.usage().is_empty() {
            println!("{}", cmd.token());
        } else {
            println!("{} {}", cmd.token(), cmd.usage());
        }
    }
}
