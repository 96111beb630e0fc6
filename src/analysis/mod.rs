//! Key analysis
//!
//! Estimates the most likely keys of a song from the chords it uses.

pub mod config;
pub mod key_analyzer;

pub use config::AnalyzerConfig;
pub use key_analyzer::{
    analyze_chords, analyze_key, analyze_key_with_config, analyze_lyrics_key, confidence,
    rank_keys,
};
