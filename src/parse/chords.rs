/// Chord token extraction from lyric text
///
/// Two grammars are supported:
///
/// - Bracketed: `[C]Hello [G7]world`, the inline notation stored with songs.
///   Only groups whose content starts with a pitch letter are chords.
/// - Bare-or-bracketed: any bracket group, or a bare chord-shaped word such
///   as `Am7` in a pasted list like `C G Am F`.
///
/// Both keep first-seen order. Deduplication and reductions are separate
/// steps so call sites can pick the flavour they need.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::models::chord::{parse_chord, ChordParse};

lazy_static! {
    /// `[` pitch letter, optional accidental, anything but brackets, `]`
    pub static ref BRACKETED_CHORD: Regex = Regex::new(r"\[([A-G][b#]?[^\[\]]*)\]").unwrap();

    /// A bracket group, or a bare chord-shaped word
    ///
    /// `maj` is tried before `m` so "Dmaj7" is one token rather than "Dm".
    static ref BARE_OR_BRACKETED: Regex =
        Regex::new(r"\[([^\]]+)\]|([A-G][#b]?(?:maj|m|dim|aug|sus|add|[0-9])*)").unwrap();

    /// Quality and extension markers dropped when reducing to a base chord
    static ref CHORD_MODIFIERS: Regex = Regex::new(r"7|maj|dim|aug|sus|add|\d").unwrap();
}

/// Chord tokens in `[...]` groups, in order of appearance, duplicates kept
pub fn extract_bracketed(text: &str) -> Vec<String> {
    BRACKETED_CHORD
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Chord tokens from bracket groups or bare chord words, duplicates kept
///
/// Bracket groups that do not start with a pitch letter (`[Verse 2]`) are
/// skipped. A bare match must start a word, and may only be followed by
/// more chord notation: the "Am" inside "Amazing" is not a chord, while
/// "Bm7b5" and "C7#9" yield their chord-shaped prefixes "Bm7" and "C7".
pub fn extract_chord_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for caps in BARE_OR_BRACKETED.captures_iter(text) {
        if let Some(group) = caps.get(1) {
            if parse_chord(group.as_str()).is_parsed() {
                tokens.push(group.as_str().to_string());
            }
        } else if let Some(bare) = caps.get(2) {
            if is_bare_chord(text, bare.start(), bare.end()) {
                tokens.push(bare.as_str().to_string());
            }
        }
    }

    tokens
}

fn is_bare_chord(text: &str, start: usize, end: usize) -> bool {
    let is_word_char = |c: char| c.is_alphanumeric() || c == '_' || c == '#';
    if text[..start].chars().next_back().map_or(false, is_word_char) {
        return false;
    }

    let mut rest = text[end..].chars();
    match rest.next() {
        None => true,
        // Altered extensions: "b5", "#9", "#11", "(b9)", "+5", bass notes
        Some('#' | '/' | '(' | '+') => true,
        Some('b') => rest.next().map_or(false, |c| c.is_ascii_digit()),
        Some(c) => !is_word_char(c),
    }
}

/// Reduce a token to its root, keeping a minor `m`
///
/// "Cmaj7" → "C", "G7" → "G", "Am7" → "Am", "Bbm" → "Bbm", "C/G" → "C".
/// Returns `None` for tokens that do not start with a pitch letter.
pub fn root_only(token: &str) -> Option<String> {
    match parse_chord(token) {
        ChordParse::Parsed(chord) => {
            let minor = chord.suffix.starts_with('m') && !chord.suffix.starts_with("maj");
            Some(if minor {
                format!("{}m", chord.root)
            } else {
                chord.root
            })
        }
        ChordParse::Unparsed(_) => None,
    }
}

/// Reduce a token to root plus major/minor quality for key matching
///
/// "Am7" → "Am", "G7" → "G", "Cmaj7" → "C", "Dsus4" → "D", "Fadd9" → "F".
pub fn base_chord(token: &str) -> String {
    CHORD_MODIFIERS.replace_all(token, "").into_owned()
}

/// Remove repeats, keeping the first occurrence of each item
pub fn dedup_ordered<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Distinct root chords written inline, e.g. for a "chords in this song" strip
///
/// `"[Cmaj7]Oh [G7]my [Am]soul"` → `["C", "G", "Am"]`
pub fn extract_detected_chords(text: &str) -> Vec<String> {
    dedup_ordered(extract_bracketed(text).iter().filter_map(|t| root_only(t)))
}

/// Distinct root chords from pasted text in either notation
pub fn extract_chord_roots(text: &str) -> Vec<String> {
    dedup_ordered(extract_chord_tokens(text).iter().filter_map(|t| root_only(t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bracketed() {
        assert_eq!(
            extract_bracketed("[C]Hello [G/B]world [C]"),
            vec!["C", "G/B", "C"]
        );
        assert!(extract_bracketed("no chords here").is_empty());
    }

    #[test]
    fn test_extract_bracketed_skips_non_chords() {
        assert_eq!(extract_bracketed("[Verse 1]\n[Am]la [x] []"), vec!["Am"]);
    }

    #[test]
    fn test_extract_bracketed_ignores_unbalanced() {
        assert_eq!(extract_bracketed("[C oops [D]"), vec!["D"]);
        assert!(extract_bracketed("[G").is_empty());
    }

    #[test]
    fn test_extract_chord_tokens_bare_list() {
        assert_eq!(
            extract_chord_tokens("C G Am F"),
            vec!["C", "G", "Am", "F"]
        );
        assert_eq!(
            extract_chord_tokens("Dmaj7  Bbm7 F#sus4 Cadd9"),
            vec!["Dmaj7", "Bbm7", "F#sus4", "Cadd9"]
        );
    }

    #[test]
    fn test_extract_chord_tokens_mixed() {
        assert_eq!(
            extract_chord_tokens("[Am7]Hello, C G | [Verse] [D/F#]"),
            vec!["Am7", "C", "G", "D/F#"]
        );
    }

    #[test]
    fn test_extract_chord_tokens_ignores_words() {
        assert!(extract_chord_tokens("Amazing grace, how sweet").is_empty());
        assert_eq!(extract_chord_tokens("Bad Cat E"), vec!["E"]);
    }

    #[test]
    fn test_extract_chord_tokens_altered_chords() {
        assert_eq!(
            extract_chord_tokens("Bm7b5 E7b9 Am"),
            vec!["Bm7", "E7", "Am"]
        );
        assert_eq!(
            extract_chord_tokens("C7#9 Cmaj7#11 G7(b13) Caug+5 D/F#"),
            vec!["C7", "Cmaj7", "G7", "Caug", "D", "F#"]
        );
        assert_eq!(extract_chord_roots("Bm7b5 E7b9 Am"), vec!["Bm", "E", "Am"]);
        // "b" followed by a letter is still part of a word
        assert!(extract_chord_tokens("Abby Ebony").is_empty());
    }

    #[test]
    fn test_root_only() {
        assert_eq!(root_only("Cmaj7").as_deref(), Some("C"));
        assert_eq!(root_only("G7").as_deref(), Some("G"));
        assert_eq!(root_only("Am7").as_deref(), Some("Am"));
        assert_eq!(root_only("Ebm").as_deref(), Some("Ebm"));
        assert_eq!(root_only("D/F#").as_deref(), Some("D"));
        assert_eq!(root_only("verse"), None);
    }

    #[test]
    fn test_base_chord() {
        assert_eq!(base_chord("Am7"), "Am");
        assert_eq!(base_chord("G7"), "G");
        assert_eq!(base_chord("Cmaj7"), "C");
        assert_eq!(base_chord("Bdim"), "B");
        assert_eq!(base_chord("Dsus4"), "D");
        assert_eq!(base_chord("Fadd9"), "F");
        assert_eq!(base_chord("Caug"), "C");
        assert_eq!(base_chord("F#m"), "F#m");
    }

    #[test]
    fn test_dedup_ordered() {
        let items = ["C", "G", "C", "Am", "G"].iter().map(|s| s.to_string());
        assert_eq!(dedup_ordered(items), vec!["C", "G", "Am"]);
    }

    #[test]
    fn test_extract_detected_chords() {
        assert_eq!(
            extract_detected_chords("[Cmaj7]Oh [G7]my [Am]soul"),
            vec!["C", "G", "Am"]
        );
        assert_eq!(
            extract_detected_chords("[C]a [C7]b [Cm]c [Cmaj7]d"),
            vec!["C", "Cm"]
        );
    }

    #[test]
    fn test_extract_chord_roots() {
        assert_eq!(extract_chord_roots("C G7 Am7 [F]x G"), vec!["C", "G", "Am", "F"]);
        assert!(extract_chord_roots("").is_empty());
    }
}
