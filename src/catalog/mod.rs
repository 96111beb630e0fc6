//! Chord catalog and root normalizer
//!
//! Fixed 12-tone vocabulary used for interval arithmetic, the five
//! enharmonic flat/sharp aliases, and the circle-of-fifths key list shown in
//! key selectors. Internally every root is canonicalized to its sharp
//! spelling; flat spellings are only restored on output.

pub mod profiles;

pub use profiles::{KeyProfile, KEY_PROFILES};

use crate::models::chord::{parse_chord, ChordParse};

/// Chromatic order, sharp spellings, index = semitones above C
pub const CHROMATIC_SCALE: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spelling → sharp spelling for the five ambiguous pitch classes
pub const FLAT_TO_SHARP: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

/// Key selector order
pub const CIRCLE_OF_FIFTHS: [&str; 12] = [
    "C", "G", "D", "A", "E", "B", "F#", "Db", "Ab", "Eb", "Bb", "F",
];

/// Sharp spelling for a flat root, if it has one
pub fn flat_to_sharp(root: &str) -> Option<&'static str> {
    FLAT_TO_SHARP
        .iter()
        .find(|(flat, _)| *flat == root)
        .map(|(_, sharp)| *sharp)
}

/// Flat spelling for a sharp root, if it has one
pub fn sharp_to_flat(root: &str) -> Option<&'static str> {
    FLAT_TO_SHARP
        .iter()
        .find(|(_, sharp)| *sharp == root)
        .map(|(flat, _)| *flat)
}

/// Canonicalize the root of a chord token to sharp spelling, keeping the suffix
///
/// "Bbm7" → "A#m7", "F#" → "F#", "C" → "C". Tokens that do not start with a
/// pitch letter are returned unchanged.
pub fn normalize_root(token: &str) -> String {
    match parse_chord(token) {
        ChordParse::Parsed(chord) => {
            let root = flat_to_sharp(&chord.root).unwrap_or(chord.root.as_str());
            format!("{}{}", root, chord.suffix)
        }
        ChordParse::Unparsed(raw) => raw,
    }
}

/// Position of a bare root in `CHROMATIC_SCALE`
///
/// Flat roots are normalized first. Anything that is not exactly one of the
/// 17 spellings (e.g. "Am", "Cb", "H") yields `None`.
pub fn chromatic_index(root: &str) -> Option<usize> {
    let root = flat_to_sharp(root).unwrap_or(root);
    CHROMATIC_SCALE.iter().position(|&name| name == root)
}

/// Pitch class of the root at the start of any chord or key name
///
/// "Am" → 9, "Bbmaj7" → 10, "Verse" → None.
pub fn root_pitch_class(token: &str) -> Option<usize> {
    parse_chord(token)
        .as_parsed()
        .and_then(|chord| chromatic_index(&chord.root))
}

/// Name of a pitch class, optionally in its flat spelling
pub fn pitch_name(index: usize, prefer_flat: bool) -> &'static str {
    let sharp = CHROMATIC_SCALE[index % 12];
    if prefer_flat {
        sharp_to_flat(sharp).unwrap_or(sharp)
    } else {
        sharp
    }
}

/// The 12 selectable keys in circle-of-fifths order
pub fn all_keys() -> Vec<String> {
    CIRCLE_OF_FIFTHS.iter().map(|k| k.to_string()).collect()
}
