/// Semitone transposition of chord sheets
///
/// Every `[Chord]` group in a lyric text is shifted by the interval between
/// two keys. Only the roots change: suffixes (`m7`, `sus4`, `maj7`, ...) are
/// copied as-is, slash parts are shifted independently, and text outside
/// the brackets is never touched.
///
/// Spelling: a root written flat stays flat when its new pitch has a flat
/// name ("Bb" + 2 → "C", "Db" + 2 → "Eb"); everything else comes out in
/// sharp spelling.

use regex::Captures;

use crate::catalog::{chromatic_index, normalize_root, pitch_name, root_pitch_class};
use crate::models::chord::{Accidental, ChordParse, ParsedChord, SlashChord};
use crate::parse::BRACKETED_CHORD;

/// Semitones from `from_key` to `to_key`, in -11..=11
///
/// Only the root of each key name is used, so "Am" and "A" are the same.
/// `None` if either root is not one of the 17 known spellings.
pub fn semitone_offset(from_key: &str, to_key: &str) -> Option<i32> {
    let from = root_pitch_class(from_key)?;
    let to = root_pitch_class(to_key)?;
    Some(to as i32 - from as i32)
}

fn shift_pitch(root: &str, prefer_flat: bool, semitones: i32) -> Option<String> {
    let index = chromatic_index(root)? as i32;
    let shifted = (index + semitones).rem_euclid(12) as usize;
    Some(pitch_name(shifted, prefer_flat).to_string())
}

/// Shift a bare root, keeping flat spelling when the original was flat
pub fn transpose_root(root: &str, semitones: i32) -> Option<String> {
    shift_pitch(root, Accidental::of_root(root) == Accidental::Flat, semitones)
}

fn transpose_part(part: &ChordParse, semitones: i32) -> ChordParse {
    match part {
        ChordParse::Parsed(chord) => match shift_pitch(&chord.root, chord.is_flat(), semitones) {
            Some(root) => {
                log::trace!("  {} → {}{}", chord, root, chord.suffix);
                ChordParse::Parsed(ParsedChord::new(root, chord.suffix.clone()))
            }
            None => part.clone(),
        },
        ChordParse::Unparsed(_) => part.clone(),
    }
}

/// Shift every part of a (possibly slash) chord
///
/// "Am7" + 2 → "Bm7", "D/F#" + 1 → "D#/G", "Bb/D" + 3 → "Db/F".
/// Parts that are not chords are left as written.
pub fn transpose_chord(chord: &str, semitones: i32) -> String {
    SlashChord::parse(chord)
        .map_parts(|part| transpose_part(part, semitones))
        .to_string()
}

/// Rewrite every `[Chord]` in `lyrics` from `from_key` to `to_key`
///
/// Returns the input unchanged when the keys name the same pitch
/// ("C#" and "Db" included) or when either key is not recognized.
pub fn transpose_lyrics(lyrics: &str, from_key: &str, to_key: &str) -> String {
    if normalize_root(from_key) == normalize_root(to_key) {
        return lyrics.to_string();
    }

    let semitones = match semitone_offset(from_key, to_key) {
        Some(semitones) => semitones,
        None => {
            log::debug!("Transpose skipped: unrecognized key '{}' or '{}'", from_key, to_key);
            return lyrics.to_string();
        }
    };

    log::debug!("Transposing {} → {} ({:+} semitones)", from_key, to_key, semitones);

    BRACKETED_CHORD
        .replace_all(lyrics, |caps: &Captures| {
            format!("[{}]", transpose_chord(&caps[1], semitones))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_c_to_d() {
        assert_eq!(transpose_lyrics("[C]Hello [G]world", "C", "D"), "[D]Hello [A]world");
    }

    #[test]
    fn test_transpose_c_to_g_minor_chords() {
        assert_eq!(transpose_lyrics("[Am]test [F]ok", "C", "G"), "[Em]test [C]ok");
    }

    #[test]
    fn test_transpose_downwards_wraps() {
        assert_eq!(transpose_lyrics("[C] [D] [E]", "D", "C"), "[A#] [C] [D]");
        assert_eq!(transpose_lyrics("[C]", "B", "C"), "[C#]");
    }

    #[test]
    fn test_suffixes_are_preserved() {
        assert_eq!(
            transpose_lyrics("[Cmaj7] [Dm7b5] [Gsus4] [E7#9] [Aadd9]", "C", "D"),
            "[Dmaj7] [Em7b5] [Asus4] [F#7#9] [Badd9]"
        );
    }

    #[test]
    fn test_slash_chords() {
        assert_eq!(transpose_lyrics("[C/G]x [D/F#]y", "C", "D"), "[D/A]x [E/G#]y");
        assert_eq!(transpose_chord("Bb/D", 3), "Db/F");
        assert_eq!(transpose_chord("Ab/Eb", 2), "Bb/F");
    }

    #[test]
    fn test_flat_spelling_preference() {
        assert_eq!(transpose_chord("Db", 2), "Eb");
        assert_eq!(transpose_chord("Bbm", 1), "Bm");
        assert_eq!(transpose_chord("Eb7", -1), "D7");
        assert_eq!(transpose_chord("C#", 2), "D#");
        assert_eq!(transpose_chord("C", 1), "C#");
    }

    #[test]
    fn test_same_key_is_noop() {
        let lyrics = "[Db]one [Bb/F]two";
        assert_eq!(transpose_lyrics(lyrics, "C", "C"), lyrics);
        assert_eq!(transpose_lyrics(lyrics, "C#", "Db"), lyrics);
        assert_eq!(transpose_lyrics(lyrics, "Bb", "A#"), lyrics);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let lyrics = "[C]Hello";
        assert_eq!(transpose_lyrics(lyrics, "H", "C"), lyrics);
        assert_eq!(transpose_lyrics(lyrics, "C", "Cb"), lyrics);
        assert_eq!(transpose_lyrics(lyrics, "", "D"), lyrics);
    }

    #[test]
    fn test_minor_key_names() {
        assert_eq!(semitone_offset("Am", "Em"), Some(-5));
        assert_eq!(transpose_lyrics("[Am]la [E7]la", "Am", "Bm"), "[Bm]la [F#7]la");
    }

    #[test]
    fn test_unrecognized_parts_untouched() {
        assert_eq!(
            transpose_lyrics("[Chorus] [Cb] [G/x] [E#m]", "C", "D"),
            "[Dhorus] [Cb] [A/x] [E#m]"
        );
        assert_eq!(transpose_lyrics("[Verse 1] [N.C.] []", "C", "E"), "[Verse 1] [N.C.] []");
    }

    #[test]
    fn test_text_outside_brackets_preserved() {
        let lyrics = "  Intro:\r\n[G]  Ama-[C]zing grace\n\n[D7]how [G]sweet ]the[ sound\t";
        let transposed = transpose_lyrics(lyrics, "G", "A");
        assert_eq!(
            transposed,
            "  Intro:\r\n[A]  Ama-[D]zing grace\n\n[E7]how [A]sweet ]the[ sound\t"
        );
    }

    #[test]
    fn test_semitone_offset() {
        assert_eq!(semitone_offset("C", "D"), Some(2));
        assert_eq!(semitone_offset("D", "C"), Some(-2));
        assert_eq!(semitone_offset("Db", "B"), Some(10));
        assert_eq!(semitone_offset("X", "C"), None);
    }
}
