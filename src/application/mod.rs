//! Application - Feature handlers and session state.
//!
//! Each handler turns one user action into one shaped request/response
//! cycle against the AI provider port. Handlers never return errors: a
//! failed completion becomes the feature's fallback value, and the only
//! trace of the failure is a diagnostic log line.

pub mod chat;
pub mod letters;
pub mod mood;
pub mod session;
pub mod tarot;

pub use chat::{ChatReplyCommand, ChatReplyHandler};
pub use letters::{GenerateLetterCommand, GenerateLetterHandler};
pub use mood::{AnalyzeMoodCommand, AnalyzeMoodHandler};
pub use session::{CompanionSession, RequestSlot, RequestToken};
pub use tarot::DailyTarotHandler;
