//! Letter generation handler.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::domain::letter::{LetterCategory, LoveLetter};
use crate::domain::persona::PersonaComposer;
use crate::ports::{AIProvider, CompletionRequest, Message};

/// Title used when the completion request fails.
pub const LETTER_FALLBACK_TITLE: &str = "A letter for you";

/// Body used when the completion request fails.
pub const LETTER_FALLBACK_BODY: &str =
    "I wanted to write you something special, but I'm having trouble connecting \
     right now. Just know that you're loved and appreciated! 🩷";

/// Extra instruction line on the celebration day.
const LETTER_CELEBRATION_NOTE: &str =
    "It is her birthday today: let the letter celebrate her year.";

const MAX_TOKENS: u32 = 600;
const TEMPERATURE: f32 = 0.9;

/// Command to generate a letter.
#[derive(Debug, Clone, Copy)]
pub struct GenerateLetterCommand {
    /// The tone to write in.
    pub category: LetterCategory,
}

impl GenerateLetterCommand {
    /// Creates a new letter command.
    pub fn new(category: LetterCategory) -> Self {
        Self { category }
    }
}

/// Handler that produces generated letters.
pub struct GenerateLetterHandler {
    provider: Arc<dyn AIProvider>,
    persona: PersonaComposer,
}

impl GenerateLetterHandler {
    /// Creates a new handler over the given provider.
    pub fn new(provider: Arc<dyn AIProvider>, persona: PersonaComposer) -> Self {
        Self { provider, persona }
    }

    /// Generates a letter, using the local calendar date for the persona.
    pub async fn handle(&self, command: GenerateLetterCommand) -> LoveLetter {
        self.handle_on(Utc::now().date_naive(), command).await
    }

    /// Generates a letter with an explicitly supplied date.
    pub async fn handle_on(&self, date: NaiveDate, command: GenerateLetterCommand) -> LoveLetter {
        let category = command.category;

        let mut system = format!(
            "{}\n{}",
            self.persona.system_prompt(date),
            self.instructions(category)
        );
        if self.persona.is_celebration(date) {
            system.push('\n');
            system.push_str(LETTER_CELEBRATION_NOTE);
        }

        let mut request = CompletionRequest::new()
            .with_max_tokens(MAX_TOKENS)
            .with_temperature(TEMPERATURE);
        request.push_message(Message::system(system));
        request.push_message(Message::user(format!(
            "Write a {} letter for Mira.",
            category
        )));

        match self.provider.complete(request).await {
            Ok(response) => LoveLetter::new(
                format!("A {} letter for you", category),
                response.content,
                category,
            ),
            Err(err) => {
                tracing::warn!(error = %err, "letter completion failed; returning fallback letter");
                LoveLetter::new(LETTER_FALLBACK_TITLE, LETTER_FALLBACK_BODY, category)
            }
        }
    }

    fn instructions(&self, category: LetterCategory) -> String {
        format!(
            "Write a heartfelt letter to Mira in the voice of someone who deeply \
             cares about her.\nCategory: {}\n\
             Make it personal, emotional, and meaningful. Weave in her life far \
             from Mumbai, her selenophile nature, her career hopes and \
             independence, and her way of speaking. Mix Hindi and English, \
             include a fitting emoji or two, and make it feel genuine.",
            category
        )
    }
}
