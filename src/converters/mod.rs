//! Text layout converters
//!
//! Upstream transforms that bring pasted songs into the inline-bracket
//! notation the chord engine works on.

pub mod chords_above;

pub use chords_above::{chords_above_to_inline, has_chords_above_lyrics, is_chord_line};
