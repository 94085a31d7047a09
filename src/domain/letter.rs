//! Love letter entity and categories.

use crate::domain::foundation::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterId(Uuid);

impl LetterId {
    /// Creates a new random LetterId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a LetterId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for LetterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LetterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tone of a generated letter.
///
/// One canonical set; earlier revisions of the app disagreed between the
/// type layer and the UI on which variants existed, so this union covers
/// both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCategory {
    Romantic,
    Friendship,
    Support,
    Funny,
    Encouragement,
    Gratitude,
}

impl LetterCategory {
    /// All categories, in display order.
    pub fn all() -> [LetterCategory; 6] {
        [
            LetterCategory::Romantic,
            LetterCategory::Friendship,
            LetterCategory::Support,
            LetterCategory::Funny,
            LetterCategory::Encouragement,
            LetterCategory::Gratitude,
        ]
    }

    /// Lowercase label used in prompts and titles.
    pub fn label(&self) -> &'static str {
        match self {
            LetterCategory::Romantic => "romantic",
            LetterCategory::Friendship => "friendship",
            LetterCategory::Support => "support",
            LetterCategory::Funny => "funny",
            LetterCategory::Encouragement => "encouragement",
            LetterCategory::Gratitude => "gratitude",
        }
    }
}

impl fmt::Display for LetterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A generated letter.
///
/// # Invariants
///
/// - `date` is stamped once at creation and never recomputed
/// - `is_read` starts false and only ever flips to true
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoveLetter {
    /// Unique identifier for this letter.
    id: LetterId,

    /// Display title.
    title: String,

    /// The letter body.
    content: String,

    /// When the letter was generated.
    date: Timestamp,

    /// The tone it was generated with.
    category: LetterCategory,

    /// Whether the reader has opened it.
    is_read: bool,
}

impl LoveLetter {
    /// Creates a new unread letter.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: LetterCategory,
    ) -> Self {
        Self {
            id: LetterId::new(),
            title: title.into(),
            content: content.into(),
            date: Timestamp::now(),
            category,
            is_read: false,
        }
    }

    /// Returns the letter ID.
    pub fn id(&self) -> &LetterId {
        &self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the letter was generated.
    pub fn date(&self) -> &Timestamp {
        &self.date
    }

    /// Returns the category.
    pub fn category(&self) -> LetterCategory {
        self.category
    }

    /// Returns true if the letter has been opened.
    pub fn is_read(&self) -> bool {
        self.is_read
    }

    /// Marks the letter as read.
    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}
