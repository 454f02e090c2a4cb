//! Narrative outbound adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `NarrativeGenerator` port for chat-completions services.

mod dto;
mod http_generator;

pub use http_generator::{HttpNarrativeGenerator, HttpNarrativeSettings};
