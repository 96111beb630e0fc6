//! Songbook chord engine WASM API
//!
//! This module provides the JavaScript-facing API for the song editor.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and serde marshalling shared by exports
//! - `chords`: normalization, key analysis, transposition, extraction, layout conversion

pub mod helpers;
pub mod chords;

// Re-export all public functions from modules to maintain the current public API
pub use chords::*;
