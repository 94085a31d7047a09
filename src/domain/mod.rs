//! Domain - Entities and value objects of the companion.

pub mod chat;
pub mod foundation;
pub mod letter;
pub mod mood;
pub mod persona;
pub mod tarot;
