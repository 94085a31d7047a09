//! Selene - Companion Engine
//!
//! This crate implements the core of a single-user AI companion application:
//! a conversation client for an external chat-completion API and the feature
//! handlers (chat, daily tarot, letters, mood insights) built on top of it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
