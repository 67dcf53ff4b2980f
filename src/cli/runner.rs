//! Command execution.

use std::sync::Arc;

use tokio::io::AsyncReadExt;

use super::commands::{Command, InputSource};
use super::help::help_text;
use super::output_types::{AskOutput, AssessOutput, CommandOutput, EntryOutput, HistoryOutput};
use crate::anthropic::{AnthropicClient, ClientConfig};
use crate::assessment::AssessmentInput;
use crate::assistant::HealthAssistant;
use crate::config::{validate_config, Config};
use crate::error::{AppError, EnrichmentError, StorageError};
use crate::predictor::Predictor;
use crate::storage::SqliteStorage;
use crate::traits::{ProgressStore, TextGenerationClient};

/// Decode and validate an assessment from JSON text.
///
/// # Errors
///
/// Returns [`AppError::Input`] for malformed JSON and
/// [`AppError::Validation`] for out-of-range answers.
pub fn parse_assessment(text: &str) -> Result<AssessmentInput, AppError> {
    let input: AssessmentInput = serde_json::from_str(text).map_err(|e| AppError::Input {
        message: format!("Invalid assessment JSON: {e}"),
    })?;
    input.validate()?;
    Ok(input)
}

/// Read an assessment from a file or stdin.
///
/// # Errors
///
/// Returns [`AppError::Input`] if the source cannot be read, or any error
/// from [`parse_assessment`].
pub async fn read_assessment(source: &InputSource) -> Result<AssessmentInput, AppError> {
    let text = match source {
        InputSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| AppError::Input {
                    message: format!("Failed to read {}: {e}", path.display()),
                })?
        }
        InputSource::Stdin => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|e| AppError::Input {
                    message: format!("Failed to read stdin: {e}"),
                })?;
            buf
        }
    };
    parse_assessment(&text)
}

/// Open the database and, when a key is configured, the Anthropic client,
/// then run `command` against them.
///
/// # Errors
///
/// Returns [`AppError::Config`] for an invalid configuration,
/// [`AppError::Storage`] if the database cannot be opened,
/// [`AppError::Anthropic`] if the HTTP client cannot be built, or any error
/// from [`CommandRunner::run`].
pub async fn run_with_config(config: &Config, command: Command) -> Result<CommandOutput, AppError> {
    validate_config(config)?;

    let storage = Arc::new(SqliteStorage::new(&config.database_path).await?);
    let client = config
        .api_key
        .as_ref()
        .map(|key| AnthropicClient::new(key.clone(), ClientConfig::from_app_config(config)))
        .transpose()?
        .map(Arc::new);

    let mut runner = CommandRunner::new(Arc::clone(&storage), Predictor::new(client.clone()));
    if let Some(client) = client {
        runner = runner.with_assistant(HealthAssistant::new(client, storage));
    }

    runner.run(command).await
}

/// Runs parsed commands against a predictor, a store and an optional
/// assistant.
#[derive(Debug)]
pub struct CommandRunner<C, S> {
    store: S,
    predictor: Predictor<C>,
    assistant: Option<HealthAssistant<C, S>>,
}

impl<C, S> CommandRunner<C, S> {
    /// Create a runner with no assistant.
    #[must_use]
    pub const fn new(store: S, predictor: Predictor<C>) -> Self {
        Self {
            store,
            predictor,
            assistant: None,
        }
    }

    /// Enable the `ask` command.
    #[must_use]
    pub fn with_assistant(mut self, assistant: HealthAssistant<C, S>) -> Self {
        self.assistant = Some(assistant);
        self
    }
}

impl<C, S> CommandRunner<C, S>
where
    C: TextGenerationClient,
    S: ProgressStore,
{
    /// Execute one command.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] from input handling, storage, or the assistant.
    /// Enrichment failures during `assess` are not errors.
    pub async fn run(&self, command: Command) -> Result<CommandOutput, AppError> {
        match command {
            Command::Assess {
                user_id,
                input,
                save,
            } => {
                let input = read_assessment(&input).await?;
                self.assess(user_id.as_deref(), &input, save)
                    .await
                    .map(CommandOutput::Assess)
            }
            Command::History { user_id, order } => {
                let entries = self.store.progress_history(&user_id, order).await?;
                Ok(CommandOutput::History(HistoryOutput {
                    user_id,
                    order,
                    count: entries.len(),
                    entries,
                }))
            }
            Command::Latest { user_id } => {
                let entry = self.store.latest_progress(&user_id).await?;
                Ok(CommandOutput::Entry(EntryOutput { user_id, entry }))
            }
            Command::Baseline { user_id } => {
                let entry = self.store.baseline_progress(&user_id).await?;
                Ok(CommandOutput::Entry(EntryOutput { user_id, entry }))
            }
            Command::Ask {
                user_id,
                session_id,
                question,
            } => self
                .ask(&user_id, session_id, &question)
                .await
                .map(CommandOutput::Ask),
            Command::Help => Ok(CommandOutput::Help(help_text())),
        }
    }

    /// Score an already-decoded assessment and optionally save it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if saving fails, including when `save`
    /// is set without a user.
    pub async fn assess(
        &self,
        user_id: Option<&str>,
        input: &AssessmentInput,
        save: bool,
    ) -> Result<AssessOutput, AppError> {
        let result = self.predictor.predict(input).await;

        if !save {
            return Ok(AssessOutput::unsaved(result));
        }

        let user_id = user_id.ok_or(StorageError::MissingUserId)?;
        let entry = self.store.save_progress(user_id, input, &result).await?;

        tracing::info!(
            user_id,
            entry_id = %entry.entry_id,
            enriched = entry.result().is_enriched(),
            "Assessment saved"
        );

        Ok(AssessOutput::saved(entry))
    }

    async fn ask(
        &self,
        user_id: &str,
        session_id: Option<String>,
        question: &str,
    ) -> Result<AskOutput, AppError> {
        let assistant = self
            .assistant
            .as_ref()
            .ok_or(EnrichmentError::CredentialMissing)?;

        let (session_id, greeting) = match session_id {
            Some(id) => (id, None),
            None => {
                let (id, greeting) = assistant.start_session();
                (id, Some(greeting.to_string()))
            }
        };

        let reply = assistant.ask(user_id, &session_id, question).await?;

        Ok(AskOutput {
            session_id,
            greeting,
            reply,
        })
    }
}
