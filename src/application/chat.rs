//! Chat reply handler.
//!
//! Builds the full conversation payload (persona system turn, prior turns
//! in their original order, the new user turn) and asks the provider for
//! one reply.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::domain::chat::{ChatMessage, Role};
use crate::domain::persona::PersonaComposer;
use crate::ports::{AIProvider, CompletionRequest, Message, MessageRole};

/// Fixed reply used when the completion request fails.
pub const CHAT_FALLBACK: &str =
    "I'm sorry, I'm having trouble connecting right now. But I'm always here for you, Mira! 🩷";

const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.8;

/// Command to request a chat reply.
#[derive(Debug, Clone)]
pub struct ChatReplyCommand {
    /// The newest user message.
    pub content: String,
    /// Prior visible turns, oldest first.
    pub history: Vec<ChatMessage>,
}

impl ChatReplyCommand {
    /// Creates a new chat reply command.
    pub fn new(content: impl Into<String>, history: Vec<ChatMessage>) -> Self {
        Self {
            content: content.into(),
            history,
        }
    }
}

/// Handler that produces the companion's chat replies.
pub struct ChatReplyHandler {
    provider: Arc<dyn AIProvider>,
    persona: PersonaComposer,
}

impl ChatReplyHandler {
    /// Creates a new handler over the given provider.
    pub fn new(provider: Arc<dyn AIProvider>, persona: PersonaComposer) -> Self {
        Self { provider, persona }
    }

    /// Produces a reply for the command, using the local calendar date for
    /// the persona.
    pub async fn handle(&self, command: ChatReplyCommand) -> String {
        self.handle_on(Utc::now().date_naive(), command).await
    }

    /// Produces a reply with an explicitly supplied date.
    pub async fn handle_on(&self, date: NaiveDate, command: ChatReplyCommand) -> String {
        let mut request = CompletionRequest::new()
            .with_max_tokens(MAX_TOKENS)
            .with_temperature(TEMPERATURE);

        request.push_message(Message::system(self.persona.system_prompt(date)));
        for turn in &command.history {
            let role = match turn.role() {
                Role::User => MessageRole::User,
                Role::Assistant => MessageRole::Assistant,
            };
            request.push_message(Message::new(role, turn.content()));
        }
        request.push_message(Message::user(command.content));

        match self.provider.complete(request).await {
            Ok(response) => response.content,
            Err(err) => {
                tracing::warn!(error = %err, "chat completion failed; replying with fallback");
                CHAT_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::domain::persona::COMPANION_PROFILE;
    use proptest::prelude::*;

    fn handler(provider: &MockAIProvider) -> ChatReplyHandler {
        ChatReplyHandler::new(Arc::new(provider.clone()), PersonaComposer::new(12, 25))
    }

    fn off_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn reply_returns_model_text_verbatim() {
        let provider = MockAIProvider::new().with_response("hello!");
        let reply = handler(&provider)
            .handle_on(off_day(), ChatReplyCommand::new("hi", vec![]))
            .await;

        assert_eq!(reply, "hello!");
    }

    #[tokio::test]
    async fn failure_returns_apology_fallback() {
        let provider = MockAIProvider::new().with_failure();
        let reply = handler(&provider)
            .handle_on(off_day(), ChatReplyCommand::new("hi", vec![]))
            .await;

        assert_eq!(reply, CHAT_FALLBACK);
        assert!(reply.contains("having trouble connecting"));
    }

    #[tokio::test]
    async fn payload_starts_with_persona_and_ends_with_user_turn() {
        let provider = MockAIProvider::new().with_response("ok");
        let history = vec![
            ChatMessage::user("first").unwrap(),
            ChatMessage::assistant("second").unwrap(),
        ];
        handler(&provider)
            .handle_on(off_day(), ChatReplyCommand::new("third", history))
            .await;

        let request = provider.last_call().unwrap();
        assert_eq!(request.messages.len(), 4);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert!(request.messages[0].content.starts_with(COMPANION_PROFILE));
        assert_eq!(request.messages[1].content, "first");
        assert_eq!(request.messages[2].role, MessageRole::Assistant);
        assert_eq!(request.messages[3].role, MessageRole::User);
        assert_eq!(request.messages[3].content, "third");
        assert_eq!(request.max_tokens, Some(500));
        assert_eq!(request.temperature, Some(0.8));
    }

    proptest! {
        #[test]
        fn payload_always_has_history_plus_two_entries(n in 0usize..20) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let provider = MockAIProvider::new().with_response("ok");
                let history: Vec<ChatMessage> = (0..n)
                    .map(|i| {
                        if i % 2 == 0 {
                            ChatMessage::user(format!("turn {}", i)).unwrap()
                        } else {
                            ChatMessage::assistant(format!("turn {}", i)).unwrap()
                        }
                    })
                    .collect();

                handler(&provider)
                    .handle_on(off_day(), ChatReplyCommand::new("newest", history))
                    .await;

                let request = provider.last_call().unwrap();
                assert_eq!(request.messages.len(), n + 2);
                // History order is preserved between persona and user turn
                for (i, turn) in request.messages[1..=n].iter().enumerate() {
                    assert_eq!(turn.content, format!("turn {}", i));
                }
            });
        }
    }
}
