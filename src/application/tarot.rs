//! Daily tarot handler.
//!
//! Issues one reading request, then answers with the curated spread.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::domain::persona::PersonaComposer;
use crate::domain::tarot::{daily_spread, TarotCard};
use crate::ports::{AIProvider, CompletionRequest, Message};

/// Task instructions appended to the persona for the reading request.
const TAROT_INSTRUCTIONS: &str = "\
You are a mystical tarot reader who knows Mira deeply. Draw 3 tarot cards \
for her daily reading. For each card, give its name, a brief description, a \
personal meaning for her today (consider her situation far from Mumbai and \
her career hopes), and whether it is upright or reversed. Make it personal, \
mystical, and meaningful, with her selenophile nature in mind.";

/// Extra instruction line on the celebration day.
const TAROT_CELEBRATION_NOTE: &str =
    "It is her birthday today: let the whole reading feel like a gift.";

const MAX_TOKENS: u32 = 800;
const TEMPERATURE: f32 = 0.9;

/// Handler that produces the daily three-card reading.
pub struct DailyTarotHandler {
    provider: Arc<dyn AIProvider>,
    persona: PersonaComposer,
}

impl DailyTarotHandler {
    /// Creates a new handler over the given provider.
    pub fn new(provider: Arc<dyn AIProvider>, persona: PersonaComposer) -> Self {
        Self { provider, persona }
    }

    /// Produces today's reading, using the local calendar date.
    pub async fn handle(&self) -> Vec<TarotCard> {
        self.handle_on(Utc::now().date_naive()).await
    }

    /// Produces the reading for an explicitly supplied date.
    pub async fn handle_on(&self, date: NaiveDate) -> Vec<TarotCard> {
        let celebration = self.persona.is_celebration(date);

        let mut system = format!("{}\n{}", self.persona.system_prompt(date), TAROT_INSTRUCTIONS);
        if celebration {
            system.push('\n');
            system.push_str(TAROT_CELEBRATION_NOTE);
        }

        let mut request = CompletionRequest::new()
            .with_max_tokens(MAX_TOKENS)
            .with_temperature(TEMPERATURE);
        request.push_message(Message::system(system));
        request.push_message(Message::user("Give me my daily tarot reading for today."));

        match self.provider.complete(request).await {
            // The reading text is requested but not parsed; the curated
            // spread below is what reaches the reader. See DESIGN.md.
            Ok(_) => daily_spread(celebration),
            Err(err) => {
                tracing::warn!(error = %err, "tarot completion failed; returning empty reading");
                Vec::new()
            }
        }
    }
}
