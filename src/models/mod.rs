//! Models module for the songbook chord engine
//!
//! Value types shared by the catalog, detection, analysis and
//! transposition layers. All of them are immutable, computed fresh per call.

pub mod chord;
pub mod key;

// Re-export commonly used types
pub use chord::{parse_chord, Accidental, ChordParse, ParsedChord, SlashChord};
pub use key::{Key, KeyAnalysis, KeyScore, Scale};
