//! CLI command definitions and parsing.

use std::path::PathBuf;

use super::errors::CommandParseError;
use crate::storage::SortDirection;

/// Where an assessment is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A JSON file.
    File(PathBuf),
}

/// Gadget risk CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Score an assessment and optionally save it.
    Assess {
        /// User to save under; only optional when not saving.
        user_id: Option<String>,
        /// Where the assessment JSON comes from.
        input: InputSource,
        /// Whether to save the result.
        save: bool,
    },

    /// Show saved assessments.
    History {
        /// Owning user.
        user_id: String,
        /// Timestamp ordering.
        order: SortDirection,
    },

    /// Show the most recent assessment.
    Latest {
        /// Owning user.
        user_id: String,
    },

    /// Show the first-ever assessment.
    Baseline {
        /// Owning user.
        user_id: String,
    },

    /// Ask the health assistant a question.
    Ask {
        /// User asking.
        user_id: String,
        /// Existing session to continue; a new one is opened if absent.
        session_id: Option<String>,
        /// The question, joined from the remaining arguments.
        question: String,
    },

    /// Show help.
    Help,
}

impl Command {
    /// Parse a command from string arguments (program name excluded).
    pub fn parse(args: &[String]) -> Result<Self, CommandParseError> {
        if args.is_empty() {
            return Err(CommandParseError::MissingCommand);
        }

        let cmd = args[0].to_lowercase();
        match cmd.as_str() {
            "assess" => parse_assess(&args[1..]),

            "history" => {
                let mut user_id = None;
                let mut order = SortDirection::default();

                let mut i = 1;
                while i < args.len() {
                    match args[i].as_str() {
                        "--user" | "-u" => {
                            user_id = Some(flag_value(args, &mut i, "--user")?);
                        }
                        "--order" | "-o" => {
                            let value = flag_value(args, &mut i, "--order")?;
                            order = SortDirection::from_str(&value)
                                .ok_or(CommandParseError::InvalidOrder(value))?;
                        }
                        _ => return Err(unknown_flag("history", &args[i])),
                    }
                    i += 1;
                }

                Ok(Self::History {
                    user_id: require_user("history", user_id)?,
                    order,
                })
            }

            "latest" => Ok(Self::Latest {
                user_id: parse_user_only("latest", &args[1..])?,
            }),

            "baseline" => Ok(Self::Baseline {
                user_id: parse_user_only("baseline", &args[1..])?,
            }),

            "ask" => parse_ask(&args[1..]),

            "help" | "--help" | "-h" => Ok(Self::Help),

            _ => Err(CommandParseError::UnknownCommand(cmd)),
        }
    }
}

fn parse_assess(args: &[String]) -> Result<Command, CommandParseError> {
    let mut user_id = None;
    let mut input = InputSource::Stdin;
    let mut save = true;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--user" | "-u" => user_id = Some(flag_value(args, &mut i, "--user")?),
            "--input" | "-i" => {
                let path = flag_value(args, &mut i, "--input")?;
                input = if path == "-" {
                    InputSource::Stdin
                } else {
                    InputSource::File(PathBuf::from(path))
                };
            }
            "--no-save" => save = false,
            _ => return Err(unknown_flag("assess", &args[i])),
        }
        i += 1;
    }

    if save && user_id.is_none() {
        return Err(CommandParseError::SaveWithoutUser);
    }
    if user_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
        return Err(CommandParseError::BlankUser);
    }

    Ok(Command::Assess {
        user_id,
        input,
        save,
    })
}

fn parse_ask(args: &[String]) -> Result<Command, CommandParseError> {
    let mut user_id = None;
    let mut session_id = None;
    let mut words: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--user" | "-u" => user_id = Some(flag_value(args, &mut i, "--user")?),
            "--session" | "-s" => session_id = Some(flag_value(args, &mut i, "--session")?),
            "--" => {
                words.extend(args[i + 1..].iter().map(String::as_str));
                break;
            }
            flag if flag.starts_with("--") => return Err(unknown_flag("ask", flag)),
            word => words.push(word),
        }
        i += 1;
    }

    let question = words.join(" ");
    if question.trim().is_empty() {
        return Err(CommandParseError::MissingQuestion);
    }

    Ok(Command::Ask {
        user_id: require_user("ask", user_id)?,
        session_id,
        question,
    })
}

fn parse_user_only(command: &'static str, args: &[String]) -> Result<String, CommandParseError> {
    let mut user_id = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--user" | "-u" => user_id = Some(flag_value(args, &mut i, "--user")?),
            _ => return Err(unknown_flag(command, &args[i])),
        }
        i += 1;
    }

    require_user(command, user_id)
}

/// Advance past a flag and return its value.
fn flag_value(
    args: &[String],
    i: &mut usize,
    flag: &'static str,
) -> Result<String, CommandParseError> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or(CommandParseError::MissingValue(flag))
}

fn unknown_flag(command: &'static str, flag: &str) -> CommandParseError {
    CommandParseError::UnknownFlag {
        command,
        flag: flag.to_string(),
    }
}

fn require_user(
    command: &'static str,
    user_id: Option<String>,
) -> Result<String, CommandParseError> {
    match user_id {
        Some(id) if id.trim().is_empty() => Err(CommandParseError::BlankUser),
        Some(id) => Ok(id),
        None => Err(CommandParseError::MissingUser(command)),
    }
}
