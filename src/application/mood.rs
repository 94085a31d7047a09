//! Mood analysis handler.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::domain::mood::{Intensity, MoodEntry};
use crate::domain::persona::PersonaComposer;
use crate::ports::{AIProvider, CompletionRequest, Message};

/// Fixed insight used when the completion request fails.
pub const MOOD_FALLBACK: &str =
    "I understand how you're feeling. Remember, every emotion is valid and \
     temporary. You're stronger than you know! 🩷";

/// Task instructions appended to the persona for the analysis request.
const MOOD_INSTRUCTIONS: &str = "\
Look at Mira's mood entry and offer: an understanding of her emotions given \
where she is in life right now, gentle advice or encouragement, a short line \
of poetry or a quote that suits her selenophile nature, and one small \
self-care suggestion. Be supportive, never clinical.";

/// Extra instruction line on the celebration day.
const MOOD_CELEBRATION_NOTE: &str =
    "It is her birthday today: fold a little celebration into the insight.";

const MAX_TOKENS: u32 = 400;
const TEMPERATURE: f32 = 0.8;

/// Command to analyze a mood check-in.
#[derive(Debug, Clone)]
pub struct AnalyzeMoodCommand {
    /// The mood label.
    pub mood: String,
    /// How strongly it is felt.
    pub intensity: Intensity,
    /// Free-form notes.
    pub notes: String,
    /// What she was doing.
    pub activities: Vec<String>,
}

impl AnalyzeMoodCommand {
    /// Creates a new analysis command.
    pub fn new(
        mood: impl Into<String>,
        intensity: Intensity,
        notes: impl Into<String>,
        activities: Vec<String>,
    ) -> Self {
        Self {
            mood: mood.into(),
            intensity,
            notes: notes.into(),
            activities,
        }
    }

    /// Builds a command from an existing entry.
    pub fn from_entry(entry: &MoodEntry) -> Self {
        Self {
            mood: entry.mood().to_string(),
            intensity: entry.intensity(),
            notes: entry.notes().to_string(),
            activities: entry.activities().to_vec(),
        }
    }

    /// Serializes the entry fields into the user turn.
    fn user_turn(&self) -> String {
        format!(
            "Mood: {}, Intensity: {}, Notes: {}, Activities: {}",
            self.mood,
            self.intensity,
            self.notes,
            self.activities.join(", ")
        )
    }
}

/// Handler that produces mood insights.
pub struct AnalyzeMoodHandler {
    provider: Arc<dyn AIProvider>,
    persona: PersonaComposer,
}

impl AnalyzeMoodHandler {
    /// Creates a new handler over the given provider.
    pub fn new(provider: Arc<dyn AIProvider>, persona: PersonaComposer) -> Self {
        Self { provider, persona }
    }

    /// Produces an insight, using the local calendar date for the persona.
    pub async fn handle(&self, command: AnalyzeMoodCommand) -> String {
        self.handle_on(Utc::now().date_naive(), command).await
    }

    /// Produces an insight with an explicitly supplied date.
    pub async fn handle_on(&self, date: NaiveDate, command: AnalyzeMoodCommand) -> String {
        let mut system = format!("{}\n{}", self.persona.system_prompt(date), MOOD_INSTRUCTIONS);
        if self.persona.is_celebration(date) {
            system.push('\n');
            system.push_str(MOOD_CELEBRATION_NOTE);
        }

        let mut request = CompletionRequest::new()
            .with_max_tokens(MAX_TOKENS)
            .with_temperature(TEMPERATURE);
        request.push_message(Message::system(system));
        request.push_message(Message::user(command.user_turn()));

        match self.provider.complete(request).await {
            Ok(response) => response.content,
            Err(err) => {
                tracing::warn!(error = %err, "mood completion failed; returning fallback insight");
                MOOD_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;

    fn handler(provider: &MockAIProvider) -> AnalyzeMoodHandler {
        AnalyzeMoodHandler::new(Arc::new(provider.clone()), PersonaComposer::new(12, 25))
    }

    fn off_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn command() -> AnalyzeMoodCommand {
        AnalyzeMoodCommand::new(
            "overwhelmed",
            Intensity::new(7).unwrap(),
            "long week at work",
            vec!["reading".to_string(), "music".to_string()],
        )
    }

    #[tokio::test]
    async fn success_returns_insight_text() {
        let provider = MockAIProvider::new().with_response("Breathe, yaar. 🌕");
        let insight = handler(&provider).handle_on(off_day(), command()).await;

        assert_eq!(insight, "Breathe, yaar. 🌕");
    }

    #[tokio::test]
    async fn failure_returns_empathetic_fallback() {
        let provider = MockAIProvider::new().with_failure();
        let insight = handler(&provider).handle_on(off_day(), command()).await;

        assert_eq!(insight, MOOD_FALLBACK);
    }

    #[tokio::test]
    async fn user_turn_serializes_entry_fields() {
        let provider = MockAIProvider::new().with_response("ok");
        handler(&provider).handle_on(off_day(), command()).await;

        let request = provider.last_call().unwrap();
        let turn = &request.messages[1].content;
        assert!(turn.contains("overwhelmed"));
        assert!(turn.contains("Intensity: 7"));
        assert!(turn.contains("reading, music"));
        assert_eq!(
            turn,
            "Mood: overwhelmed, Intensity: 7, Notes: long week at work, Activities: reading, music"
        );
    }

    #[test]
    fn command_from_entry_copies_fields() {
        let mut entry = MoodEntry::new(
            "calm",
            Intensity::new(4).unwrap(),
            "quiet evening",
            vec!["tea".to_string()],
        )
        .unwrap();
        entry.attach_insight("already analyzed");

        let command = AnalyzeMoodCommand::from_entry(&entry);
        assert_eq!(command.mood, "calm");
        assert_eq!(command.intensity.value(), 4);
        assert_eq!(command.notes, "quiet evening");
        assert_eq!(command.activities, vec!["tea".to_string()]);
    }
}
