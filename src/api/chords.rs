//! Chord and key operations for the WASM API
//!
//! JavaScript-facing wrappers around the chord engine. Plain strings go in
//! and plain strings or serialized objects come out; no state is kept
//! between calls.
//!
//! - Normalization and key list: `normalizeChordRoot`, `getAllKeys`, `parseKey`
//! - Analysis: `analyzeKey`, `analyzeKeyWithConfig`, `analyzeLyricsKey`, `rankKeys`
//! - Transposition: `transposeLyrics`, `transposeChord`
//! - Extraction: `extractDetectedChords`, `extractChordRoots`
//! - Layout: `convertChordsAboveLyrics`, `hasChordsAboveLyrics`

use std::str::FromStr;

use wasm_bindgen::prelude::*;

use crate::analysis::{self, AnalyzerConfig};
use crate::api::helpers::{deserialize_or_default, serialize, to_js_error};
use crate::models::Key;
use crate::{catalog, converters, parse, transposition};
use crate::{wasm_info, wasm_log};

// ============================================================================
// Catalog
// ============================================================================

/// Canonicalize a chord's root to sharp spelling ("Bbm7" → "A#m7")
#[wasm_bindgen(js_name = normalizeChordRoot)]
pub fn normalize_chord_root(token: &str) -> String {
    catalog::normalize_root(token)
}

/// The 12 selectable keys in circle-of-fifths order
#[wasm_bindgen(js_name = getAllKeys)]
pub fn get_all_keys() -> js_sys::Array {
    catalog::all_keys()
        .iter()
        .map(|key| JsValue::from_str(key))
        .collect()
}

/// Parse a key name such as "Am" or "Bb major" into `{ key, scale }`
///
/// # Errors
/// Rejects names that do not start with a pitch letter or carry a suffix
/// other than a major/minor marker.
#[wasm_bindgen(js_name = parseKey)]
pub fn parse_key(name: &str) -> Result<JsValue, JsValue> {
    let key = Key::from_str(name).map_err(to_js_error)?;
    serialize(&key, "Failed to serialize key")
}

// ============================================================================
// Key Analysis
// ============================================================================

/// Guess the key of pasted chords or lyrics
///
/// # Returns
/// `{ possibleKeys: [{key, scale}], detectedChords: string[], confidence: 0-100 }`
#[wasm_bindgen(js_name = analyzeKey)]
pub fn analyze_key(text: &str) -> Result<JsValue, JsValue> {
    let result = analysis::analyze_key(text);
    if result.is_empty() {
        wasm_log!("analyzeKey: no chords found");
        return serialize(&result, "Failed to serialize key analysis");
    }
    wasm_log!(
        "analyzeKey: {} chords, confidence {}",
        result.detected_chords.len(),
        result.confidence
    );
    serialize(&result, "Failed to serialize key analysis")
}

/// `analyzeKey` with weights overridden by a (possibly partial) config object
#[wasm_bindgen(js_name = analyzeKeyWithConfig)]
pub fn analyze_key_with_config(text: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let config: AnalyzerConfig = deserialize_or_default(config, "Invalid analyzer config")?;
    let result = analysis::analyze_key_with_config(text, &config);
    serialize(&result, "Failed to serialize key analysis")
}

/// Guess the key from inline `[Chord]` lyrics only
#[wasm_bindgen(js_name = analyzeLyricsKey)]
pub fn analyze_lyrics_key(lyrics: &str) -> Result<JsValue, JsValue> {
    let result = analysis::analyze_lyrics_key(lyrics);
    serialize(&result, "Failed to serialize key analysis")
}

/// All 24 keys with their raw scores, best first
#[wasm_bindgen(js_name = rankKeys)]
pub fn rank_keys(text: &str) -> Result<JsValue, JsValue> {
    let chords = parse::extract_chord_tokens(text);
    let ranked = analysis::rank_keys(&chords, &AnalyzerConfig::default());
    serialize(&ranked, "Failed to serialize key scores")
}

// ============================================================================
// Transposition
// ============================================================================

/// Rewrite every `[Chord]` in `lyrics` from one key to another
///
/// Unrecognized keys leave the lyrics unchanged.
#[wasm_bindgen(js_name = transposeLyrics)]
pub fn transpose_lyrics(lyrics: &str, from_key: &str, to_key: &str) -> String {
    wasm_info!("transposeLyrics: {} → {} ({} bytes)", from_key, to_key, lyrics.len());
    transposition::transpose_lyrics(lyrics, from_key, to_key)
}

#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(chord: &str, semitones: i32) -> String {
    transposition::transpose_chord(chord, semitones)
}

// ============================================================================
// Extraction
// ============================================================================

/// Distinct root chords in inline `[Chord]` lyrics, first-seen order
#[wasm_bindgen(js_name = extractDetectedChords)]
pub fn extract_detected_chords(lyrics: &str) -> Vec<String> {
    parse::extract_detected_chords(lyrics)
}

/// Distinct root chords in pasted text, bracketed or bare
#[wasm_bindgen(js_name = extractChordRoots)]
pub fn extract_chord_roots(text: &str) -> Vec<String> {
    parse::extract_chord_roots(text)
}

// ============================================================================
// Layout Conversion
// ============================================================================

/// Convert chords-above-lyrics layout into inline `[Chord]` notation
#[wasm_bindgen(js_name = convertChordsAboveLyrics)]
pub fn convert_chords_above_lyrics(text: &str) -> String {
    converters::chords_above_to_inline(text)
}

#[wasm_bindgen(js_name = hasChordsAboveLyrics)]
pub fn has_chords_above_lyrics(text: &str) -> bool {
    converters::has_chords_above_lyrics(text)
}
