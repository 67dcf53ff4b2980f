//! Argument errors for the `gadget-risk` command line.

use thiserror::Error;

/// Why a command line could not be turned into a [`Command`](super::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    /// Nothing after the program name.
    #[error("No command given. Run 'gadget-risk help' for usage.")]
    MissingCommand,

    /// The first argument is not a known command.
    #[error("Unknown command '{0}'. Expected assess, history, latest, baseline, ask or help.")]
    UnknownCommand(String),

    /// An option the command does not accept.
    #[error("'{command}' does not accept option '{flag}'")]
    UnknownFlag {
        /// Command being parsed.
        command: &'static str,
        /// The offending option.
        flag: String,
    },

    /// An option was the last argument and had no value.
    #[error("Option '{0}' needs a value")]
    MissingValue(&'static str),

    /// A history command was run without `--user`.
    #[error("'{0}' needs --user <id>")]
    MissingUser(&'static str),

    /// `--user` was given only whitespace.
    #[error("User ID cannot be blank")]
    BlankUser,

    /// Saving an assessment needs someone to save it under.
    #[error("Saving an assessment needs --user <id>; pass --no-save to only score it")]
    SaveWithoutUser,

    /// `--order` was not `asc` or `desc`.
    #[error("Unknown order '{0}'; use 'asc' or 'desc'")]
    InvalidOrder(String),

    /// `ask` had options but no question words.
    #[error("'ask' needs a question after its options")]
    MissingQuestion,
}
