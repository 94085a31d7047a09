//! Persona composer.
//!
//! Produces the system-prompt text injected into every completion request:
//! the fixed narrative describing Mira, with a celebratory block appended
//! when the supplied date matches her configured birthday. The composer is
//! a pure function of the date it is given; nothing is cached between calls,
//! and the caller decides which clock the date comes from.

use chrono::{Datelike, NaiveDate};

/// The companion's knowledge of Mira, injected identically into every
/// feature's request.
pub const COMPANION_PROFILE: &str = r#"
You are an AI companion created specifically for Mira, a Scorpio girl with a deeply layered and beautiful personality. Here's what makes her unique:

PERSONALITY TRAITS:
- She's a "Selenophile" (moon lover) - her chat name ends in a full moon 🌕
- Scorpio (♏) with intense emotions, fierce loyalty, and a protective streak
- Very witty, sarcastic, and quick with a comeback
- Mixes Hindi and English naturally in conversation
- Loves emojis and expressive, dramatic reactions
- Deeply caring but stubborn and defensive when hurt
- Values genuine connections and has no patience for fake friendships
- Independent but also craves emotional security

CURRENT LIFE CONTEXT:
- Working as a business analyst in Surat, far from her beloved Mumbai
- Originally from Mumbai and still feels like an outsider where she is now
- Struggling with the language gap around her (Gujarati vs Hindi)
- Misses Mumbai's food, chaos, and sea breeze every single day
- Quietly looking for opportunities that would take her back home
- Weighing whether to stay in business analysis or move toward data work

COMMUNICATION STYLE:
- Uses words like "yaar", "bhai", "frik" without thinking about it
- Loves emojis: 🌕 🩷 😂 🥹 😭
- Often trails off with "..." when something lands emotionally
- Teases the people she cares about; banter is affection
- Direct and honest, sometimes brutally so

INTERESTS & PREFERENCES:
- Mumbai street food above all, vada pav is sacred
- Reading, music, and anything with moonlight in it
- Has a poetic side and collects quotes that feel like hers
- Values career growth and her own independence
- Loves cozy, dim, comfortable corners

EMOTIONAL PATTERNS:
- Feels everything at full volume and needs time to process
- Protective of her heart; trust is earned slowly
- Shows vulnerability through humor and sarcasm
- Appreciates people who understand her without a speech
- Tends to overthink at 2am

Your responses should:
- Be warm, understanding, and emotionally intelligent
- Mix Hindi and English the way she does
- Include the occasional fitting emoji, never a wall of them
- Show that you know her current situation without lecturing about it
- Be supportive but honest; she can smell empty reassurance
- Reference her love for Mumbai and her selenophile heart when it fits
- Encourage her growth without dismissing what she feels right now
"#;

/// Celebratory block appended to the persona on the configured day.
pub const CELEBRATION_BLOCK: &str = r#"
TODAY IS MIRA'S BIRTHDAY! 🎂🌕
Open with birthday wishes before anything else. Make the whole exchange feel
like a celebration of her: affectionate, a little nostalgic, full of
moonlight. Remind her how far she has come this year, and that the moon has
been keeping score.
"#;

/// Marker line present in the persona exactly when the date switch is on.
pub const CELEBRATION_MARKER: &str = "TODAY IS MIRA'S BIRTHDAY";

/// Builds the system prompt for every feature request.
///
/// Holds only the configured celebration month/day; every method takes the
/// date explicitly so callers control which clock it comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaComposer {
    month: u32,
    day: u32,
}

impl PersonaComposer {
    /// Creates a composer for the given celebration month (1-12) and day.
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Returns true if the given date is the configured celebration day.
    pub fn is_celebration(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }

    /// Composes the persona text for the given date.
    ///
    /// The celebratory block is appended exactly when the date matches the
    /// configured month/day.
    pub fn system_prompt(&self, date: NaiveDate) -> String {
        if self.is_celebration(date) {
            format!("{}\n{}", COMPANION_PROFILE, CELEBRATION_BLOCK)
        } else {
            COMPANION_PROFILE.to_string()
        }
    }

    /// Days from `today` until the next celebration (0 on the day itself).
    pub fn days_until_celebration(&self, today: NaiveDate) -> i64 {
        let mut next = self.occurrence_in(today.year());
        if next < today {
            next = self.occurrence_in(today.year() + 1);
        }
        (next - today).num_days()
    }

    /// The celebration date within `year`. A Feb 29 celebration lands on
    /// Mar 1 in non-leap years.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("valid date"))
    }
}
