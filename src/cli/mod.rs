//! Command-line surface.
//!
//! Arguments are parsed into a [`Command`], which a [`CommandRunner`]
//! executes into a [`CommandOutput`] printed as JSON on stdout.

mod commands;
mod errors;
mod help;
mod output_types;
mod runner;


pub use commands::{Command, InputSource};
pub use errors::CommandParseError;
pub use help::help_text;
pub use output_types::{AskOutput, AssessOutput, CommandOutput, EntryOutput, HistoryOutput};
pub use runner::{parse_assessment, read_assessment, run_with_config, CommandRunner};
