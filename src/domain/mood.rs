//! Mood entries, intensity, and the recent-mood summary.

use crate::domain::foundation::{Timestamp, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a mood entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodEntryId(Uuid);

impl MoodEntryId {
    /// Creates a new random MoodEntryId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a MoodEntryId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MoodEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MoodEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mood intensity on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intensity(u8);

impl Intensity {
    /// Creates an Intensity, returning an error if outside 1-10.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::out_of_range(
                "intensity",
                1,
                10,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single mood check-in.
///
/// # Invariants
///
/// - `created_at` is stamped once at creation
/// - `ai_insight` starts empty and is attached at most once the analysis
///   resolves; entries are otherwise immutable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique identifier for this entry.
    id: MoodEntryId,

    /// The mood label (e.g., "happy", "overwhelmed").
    mood: String,

    /// How strongly it is felt, 1-10.
    intensity: Intensity,

    /// Free-form notes.
    notes: String,

    /// What she was doing.
    activities: Vec<String>,

    /// When the entry was submitted.
    created_at: Timestamp,

    /// Supportive commentary, filled in after the analysis call resolves.
    ai_insight: Option<String>,
}

impl MoodEntry {
    /// Creates a new mood entry.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the mood label is empty
    pub fn new(
        mood: impl Into<String>,
        intensity: Intensity,
        notes: impl Into<String>,
        activities: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let mood = mood.into();
        if mood.trim().is_empty() {
            return Err(ValidationError::empty_field("mood"));
        }

        Ok(Self {
            id: MoodEntryId::new(),
            mood,
            intensity,
            notes: notes.into(),
            activities,
            created_at: Timestamp::now(),
            ai_insight: None,
        })
    }

    /// Returns the entry ID.
    pub fn id(&self) -> &MoodEntryId {
        &self.id
    }

    /// Returns the mood label.
    pub fn mood(&self) -> &str {
        &self.mood
    }

    /// Returns the intensity.
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// Returns the notes.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the activities.
    pub fn activities(&self) -> &[String] {
        &self.activities
    }

    /// Returns when the entry was submitted.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns the attached insight, if the analysis has resolved.
    pub fn ai_insight(&self) -> Option<&str> {
        self.ai_insight.as_deref()
    }

    /// Attaches the analysis insight.
    pub fn attach_insight(&mut self, insight: impl Into<String>) {
        self.ai_insight = Some(insight.into());
    }
}

/// Aggregate over the most recent mood entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodSummary {
    /// The mood label appearing most often in the 7 newest entries.
    pub most_frequent_mood: String,
    /// Total number of entries recorded.
    pub total_entries: usize,
}

impl MoodSummary {
    /// Summarizes a newest-first list of entries.
    ///
    /// Looks at the 7 newest entries; returns None when the list is empty.
    /// Ties go to the mood seen most recently.
    pub fn from_recent(entries: &[MoodEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let recent = &entries[..entries.len().min(7)];
        let mut best: Option<(&str, usize)> = None;
        for entry in recent {
            let count = recent.iter().filter(|e| e.mood == entry.mood).count();
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((&entry.mood, count)),
            }
        }

        best.map(|(mood, _)| Self {
            most_frequent_mood: mood.to_string(),
            total_entries: entries.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mood: &str) -> MoodEntry {
        MoodEntry::new(mood, Intensity::new(5).unwrap(), "", vec![]).unwrap()
    }

    mod intensity {
        use super::*;

        #[test]
        fn accepts_full_scale() {
            for value in 1..=10 {
                assert_eq!(Intensity::new(value).unwrap().value(), value);
            }
        }

        #[test]
        fn rejects_out_of_range() {
            assert!(Intensity::new(0).is_err());
            assert!(Intensity::new(11).is_err());
        }

        #[test]
        fn displays_raw_integer() {
            assert_eq!(Intensity::new(7).unwrap().to_string(), "7");
        }
    }

    mod entry_construction {
        use super::*;

        #[test]
        fn new_entry_has_no_insight() {
            let e = entry("happy");
            assert_eq!(e.mood(), "happy");
            assert!(e.ai_insight().is_none());
        }

        #[test]
        fn rejects_empty_mood() {
            assert!(MoodEntry::new("", Intensity::new(5).unwrap(), "", vec![]).is_err());
        }

        #[test]
        fn attach_insight_fills_field() {
            let mut e = entry("tired");
            e.attach_insight("rest is productive too");
            assert_eq!(e.ai_insight(), Some("rest is productive too"));
        }

        #[test]
        fn keeps_activities() {
            let e = MoodEntry::new(
                "calm",
                Intensity::new(3).unwrap(),
                "quiet evening",
                vec!["reading".to_string(), "music".to_string()],
            )
            .unwrap();
            assert_eq!(e.activities(), &["reading", "music"]);
        }
    }

    mod summary {
        use super::*;

        #[test]
        fn empty_list_has_no_summary() {
            assert!(MoodSummary::from_recent(&[]).is_none());
        }

        #[test]
        fn finds_most_frequent_mood() {
            let entries = vec![entry("happy"), entry("tired"), entry("happy")];
            let summary = MoodSummary::from_recent(&entries).unwrap();
            assert_eq!(summary.most_frequent_mood, "happy");
            assert_eq!(summary.total_entries, 3);
        }

        #[test]
        fn only_seven_newest_count_toward_frequency() {
            // Newest-first: 7 "calm" then 3 older "anxious"
            let mut entries: Vec<MoodEntry> = (0..7).map(|_| entry("calm")).collect();
            entries.extend((0..3).map(|_| entry("anxious")));

            let summary = MoodSummary::from_recent(&entries).unwrap();
            assert_eq!(summary.most_frequent_mood, "calm");
            assert_eq!(summary.total_entries, 10);
        }

        #[test]
        fn tie_goes_to_most_recent_mood() {
            let entries = vec![entry("soft"), entry("stormy")];
            let summary = MoodSummary::from_recent(&entries).unwrap();
            assert_eq!(summary.most_frequent_mood, "soft");
        }
    }
}
