//! Conversational health assistant.
//!
//! Each session is a persisted chat log. A question is logged, the recent
//! log is replayed to the text-generation service with a fixed persona, and
//! the reply is logged and returned. Logging failures never block a reply.

use uuid::Uuid;

use crate::enrichment::{HEALTH_ASSISTANT_GREETING, HEALTH_ASSISTANT_INSTRUCTION};
use crate::error::EnrichmentError;
use crate::traits::{
    ChatMessage, ChatRole, CompletionConfig, Message, ProgressStore, TextGenerationClient,
};

/// Number of logged turns replayed with each question.
pub const CHAT_HISTORY_LIMIT: u32 = 50;

/// Chat assistant backed by a text-generation client and a chat log.
#[derive(Debug)]
pub struct HealthAssistant<C, S> {
    client: C,
    store: S,
}

impl<C, S> HealthAssistant<C, S>
where
    C: TextGenerationClient,
    S: ProgressStore,
{
    /// Create an assistant.
    #[must_use]
    pub const fn new(client: C, store: S) -> Self {
        Self { client, store }
    }

    /// Open a new session, returning its ID and the opening line.
    ///
    /// The greeting is not logged; only questions and replies are.
    #[must_use]
    pub fn start_session(&self) -> (String, &'static str) {
        (Uuid::new_v4().to_string(), HEALTH_ASSISTANT_GREETING)
    }

    /// Answer one question within a session.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichmentError::EmptyPrompt`] for a blank question and
    /// [`EnrichmentError::Api`] if the service call fails.
    pub async fn ask(
        &self,
        user_id: &str,
        session_id: &str,
        question: &str,
    ) -> Result<String, EnrichmentError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(EnrichmentError::EmptyPrompt);
        }

        self.log(user_id, session_id, ChatRole::User, question).await;

        let history = match self
            .store
            .chat_history(user_id, session_id, CHAT_HISTORY_LIMIT)
            .await
        {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(error = %e, session_id, "Failed to load chat history");
                Vec::new()
            }
        };

        let messages = build_conversation(&history, question);
        let config = CompletionConfig::new().with_system_prompt(HEALTH_ASSISTANT_INSTRUCTION);

        let response = self.client.complete(messages, config).await?;
        let reply = response.content.trim().to_string();

        self.log(user_id, session_id, ChatRole::Model, &reply).await;

        Ok(reply)
    }

    async fn log(&self, user_id: &str, session_id: &str, role: ChatRole, content: &str) {
        if let Err(e) = self
            .store
            .save_chat_message(user_id, session_id, role, content)
            .await
        {
            tracing::warn!(error = %e, session_id, role = role.as_str(), "Chat log save failed");
        }
    }
}

/// Turn a chat log into request messages ending with `question`.
///
/// System notices are dropped and the conversation always opens with a
/// user turn.
fn build_conversation(history: &[ChatMessage], question: &str) -> Vec<Message> {
    let mut messages: Vec<Message> = history
        .iter()
        .filter_map(|m| match m.role {
            ChatRole::User => Some(Message::user(&m.content)),
            ChatRole::Model => Some(Message::assistant(&m.content)),
            ChatRole::System => None,
        })
        .skip_while(|m| !m.is_user())
        .collect();

    let ends_with_question = messages
        .last()
        .is_some_and(|m| m.is_user() && m.content == question);
    if !ends_with_question {
        messages.push(Message::user(question));
    }

    messages
}
