//! Help text for CLI commands.

/// Get help text for CLI commands.
#[must_use]
pub const fn help_text() -> &'static str {
    r#"Gadget Addiction Risk Commands:

  assess [options]    Score an assessment read as JSON
    --user, -u ID       User to save the result under
    --input, -i FILE    Read the assessment from FILE (default: stdin)
    --no-save           Print the result without saving it

  history [options]   Show saved assessments
    --user, -u ID       User whose history to show (required)
    --order, -o DIR     asc (oldest first) or desc (default)

  latest --user ID    Show the most recent assessment

  baseline --user ID  Show the first-ever assessment

  ask [options] QUESTION...
                      Ask the health assistant a question
    --user, -u ID       User asking (required)
    --session, -s ID    Continue an existing chat session

  help                Show this message

Environment:
  ANTHROPIC_API_KEY   Enables AI analysis and the assistant
  DATABASE_PATH       SQLite file (default: ./data/gadget_risk.db)
  LOG_LEVEL           error, warn, info, debug, trace (default: info)

Examples:
  gadget-risk assess --user alice --input answers.json
  gadget-risk history --user alice --order asc
  gadget-risk ask --user alice How can I sleep better?
"#
}
