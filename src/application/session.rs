//! Single-session in-memory state.
//!
//! The UI layer fires overlapping requests freely (no queueing, no
//! cancellation), so completions can arrive out of submission order. Each
//! feature gets a `RequestSlot` issuing monotonic tokens; a completion is
//! applied only if its token is still the latest for that slot, giving
//! last-submission-wins semantics. Superseded results are simply dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::chat::ChatMessage;
use crate::domain::foundation::ValidationError;
use crate::domain::letter::{LetterId, LoveLetter};
use crate::domain::mood::{MoodEntry, MoodEntryId, MoodSummary};

/// Token identifying one issued request within a feature slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Issues monotonically increasing request tokens for one feature.
#[derive(Debug, Default)]
pub struct RequestSlot {
    latest: AtomicU64,
}

impl RequestSlot {
    /// Creates a fresh slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new token, superseding all previously issued ones.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns true if the token is the latest issued for this slot.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

/// In-memory state for one browser session.
///
/// Mutated from a single task; nothing here is persisted.
#[derive(Debug, Default)]
pub struct CompanionSession {
    /// Chat transcript in arrival order.
    messages: Vec<ChatMessage>,
    /// Generated letters, newest first.
    letters: Vec<LoveLetter>,
    /// Mood entries, newest first.
    moods: Vec<MoodEntry>,

    chat_slot: RequestSlot,
    letter_slot: RequestSlot,
    mood_slot: RequestSlot,
}

impl CompanionSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    // ----- Chat -----

    /// Returns the transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Records a user message and issues the token for its in-flight reply.
    pub fn begin_chat(
        &mut self,
        content: impl Into<String>,
    ) -> Result<RequestToken, ValidationError> {
        let message = ChatMessage::user(content)?;
        self.messages.push(message);
        Ok(self.chat_slot.issue())
    }

    /// Applies a completed reply if its token is still the latest.
    ///
    /// Returns true if the reply entered the transcript.
    pub fn apply_chat_reply(&mut self, token: RequestToken, content: impl Into<String>) -> bool {
        if !self.chat_slot.is_current(token) {
            return false;
        }
        match ChatMessage::assistant(content) {
            Ok(message) => {
                self.messages.push(message);
                true
            }
            Err(_) => false,
        }
    }

    // ----- Letters -----

    /// Returns the letters, newest first.
    pub fn letters(&self) -> &[LoveLetter] {
        &self.letters
    }

    /// Issues the token for an in-flight letter generation.
    pub fn begin_letter(&self) -> RequestToken {
        self.letter_slot.issue()
    }

    /// Applies a generated letter if its token is still the latest.
    pub fn apply_letter(&mut self, token: RequestToken, letter: LoveLetter) -> bool {
        if !self.letter_slot.is_current(token) {
            return false;
        }
        self.letters.insert(0, letter);
        true
    }

    /// Marks the given letter as read. Returns false if it is unknown.
    pub fn mark_letter_read(&mut self, id: &LetterId) -> bool {
        match self.letters.iter_mut().find(|l| l.id() == id) {
            Some(letter) => {
                letter.mark_read();
                true
            }
            None => false,
        }
    }

    // ----- Moods -----

    /// Returns the mood entries, newest first.
    pub fn moods(&self) -> &[MoodEntry] {
        &self.moods
    }

    /// Records a mood entry and issues the token for its in-flight analysis.
    pub fn begin_mood_analysis(&mut self, entry: MoodEntry) -> RequestToken {
        self.moods.insert(0, entry);
        self.mood_slot.issue()
    }

    /// Attaches a resolved insight if its token is still the latest.
    pub fn apply_mood_insight(
        &mut self,
        token: RequestToken,
        id: &MoodEntryId,
        insight: impl Into<String>,
    ) -> bool {
        if !self.mood_slot.is_current(token) {
            return false;
        }
        match self.moods.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                entry.attach_insight(insight);
                true
            }
            None => false,
        }
    }

    /// Summarizes the recent mood entries.
    pub fn mood_summary(&self) -> Option<MoodSummary> {
        MoodSummary::from_recent(&self.moods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::letter::LetterCategory;
    use crate::domain::mood::Intensity;

    fn mood_entry(mood: &str) -> MoodEntry {
        MoodEntry::new(mood, Intensity::new(5).unwrap(), "", vec![]).unwrap()
    }

    mod request_slot {
        use super::*;

        #[test]
        fn tokens_increase_monotonically() {
            let slot = RequestSlot::new();
            let t1 = slot.issue();
            let t2 = slot.issue();
            assert_ne!(t1, t2);
        }

        #[test]
        fn newer_token_invalidates_older() {
            let slot = RequestSlot::new();
            let t1 = slot.issue();
            assert!(slot.is_current(t1));

            let t2 = slot.issue();
            assert!(!slot.is_current(t1));
            assert!(slot.is_current(t2));
        }
    }

    mod chat {
        use super::*;

        #[test]
        fn reply_with_current_token_enters_transcript() {
            let mut session = CompanionSession::new();
            let token = session.begin_chat("hi").unwrap();

            assert!(session.apply_chat_reply(token, "hello!"));
            assert_eq!(session.messages().len(), 2);
            assert!(session.messages()[1].is_assistant());
        }

        #[test]
        fn stale_reply_is_discarded() {
            let mut session = CompanionSession::new();
            let first = session.begin_chat("first").unwrap();
            let second = session.begin_chat("second").unwrap();

            // The first send resolves after the second was submitted
            assert!(!session.apply_chat_reply(first, "too late"));
            assert!(session.apply_chat_reply(second, "in time"));

            let contents: Vec<&str> = session.messages().iter().map(|m| m.content()).collect();
            assert_eq!(contents, vec!["first", "second", "in time"]);
        }

        #[test]
        fn empty_user_message_is_rejected() {
            let mut session = CompanionSession::new();
            assert!(session.begin_chat("   ").is_err());
            assert!(session.messages().is_empty());
        }
    }

    mod letters {
        use super::*;

        #[test]
        fn letters_are_newest_first() {
            let mut session = CompanionSession::new();
            let t1 = session.begin_letter();
            session.apply_letter(t1, LoveLetter::new("one", "b", LetterCategory::Romantic));
            let t2 = session.begin_letter();
            session.apply_letter(t2, LoveLetter::new("two", "b", LetterCategory::Funny));

            assert_eq!(session.letters()[0].title(), "two");
            assert_eq!(session.letters()[1].title(), "one");
        }

        #[test]
        fn stale_letter_is_discarded() {
            let mut session = CompanionSession::new();
            let first = session.begin_letter();
            let second = session.begin_letter();

            assert!(!session.apply_letter(first, LoveLetter::new("old", "b", LetterCategory::Support)));
            assert!(session.apply_letter(second, LoveLetter::new("new", "b", LetterCategory::Support)));
            assert_eq!(session.letters().len(), 1);
        }

        #[test]
        fn mark_letter_read_finds_by_id() {
            let mut session = CompanionSession::new();
            let token = session.begin_letter();
            session.apply_letter(token, LoveLetter::new("t", "b", LetterCategory::Gratitude));

            let id = *session.letters()[0].id();
            assert!(session.mark_letter_read(&id));
            assert!(session.letters()[0].is_read());

            assert!(!session.mark_letter_read(&LetterId::new()));
        }
    }

    mod moods {
        use super::*;

        #[test]
        fn insight_with_current_token_attaches() {
            let mut session = CompanionSession::new();
            let entry = mood_entry("happy");
            let id = *entry.id();
            let token = session.begin_mood_analysis(entry);

            assert!(session.apply_mood_insight(token, &id, "keep glowing"));
            assert_eq!(session.moods()[0].ai_insight(), Some("keep glowing"));
        }

        #[test]
        fn stale_insight_is_discarded() {
            let mut session = CompanionSession::new();
            let first_entry = mood_entry("happy");
            let first_id = *first_entry.id();
            let first = session.begin_mood_analysis(first_entry);

            let second_entry = mood_entry("tired");
            let second_id = *second_entry.id();
            let second = session.begin_mood_analysis(second_entry);

            assert!(!session.apply_mood_insight(first, &first_id, "too late"));
            assert!(session.apply_mood_insight(second, &second_id, "rest up"));

            // Newest first: the tired entry leads and carries the insight
            assert_eq!(session.moods()[0].ai_insight(), Some("rest up"));
            assert!(session.moods()[1].ai_insight().is_none());
        }

        #[test]
        fn summary_reflects_recorded_entries() {
            let mut session = CompanionSession::new();
            for mood in ["calm", "calm", "stormy"] {
                session.begin_mood_analysis(mood_entry(mood));
            }

            let summary = session.mood_summary().unwrap();
            assert_eq!(summary.most_frequent_mood, "calm");
            assert_eq!(summary.total_entries, 3);
        }
    }
}
