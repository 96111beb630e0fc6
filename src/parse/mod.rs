//! Chord extraction from lyric text
//!
//! Pulls chord tokens out of inline-bracket lyrics or pasted chord lists and
//! offers the reductions (root-only, base chord) used by the analyzer and
//! the UI.

pub mod chords;

pub use chords::{
    base_chord, dedup_ordered, extract_bracketed, extract_chord_roots, extract_chord_tokens,
    extract_detected_chords, root_only, BRACKETED_CHORD,
};
