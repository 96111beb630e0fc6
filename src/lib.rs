//! Songbook Chord Engine WASM Module
//!
//! Chord detection, key analysis and transposition for the song lyrics
//! editor. Lyrics carry chords inline as `[Am7]`; everything here is a pure
//! function of its inputs.

pub mod analysis;
pub mod api;
pub mod catalog;
pub mod converters;
pub mod error;
pub mod models;
pub mod parse;
pub mod transposition;

// Re-export commonly used types
pub use analysis::{analyze_key, analyze_key_with_config, analyze_lyrics_key, AnalyzerConfig};
pub use catalog::{all_keys, chromatic_index, normalize_root};
pub use converters::chords_above_to_inline;
pub use error::ChordError;
pub use models::*;
pub use parse::{extract_chord_roots, extract_detected_chords};
pub use transposition::{transpose_chord, transpose_lyrics};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        wasm_warn!("Logger already initialized");
    }

    log::info!("Songbook chord engine WASM module initialized");
}
