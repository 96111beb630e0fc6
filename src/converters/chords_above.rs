//! Chords-above-lyrics → inline bracket conversion
//!
//! Songs pasted from chord sites usually put chords on their own line,
//! aligned over the syllable they fall on:
//!
//! ```text
//! G       C         G
//! Amazing grace how sweet the sound
//! ```
//!
//! The editor stores the inline form instead:
//!
//! ```text
//! [G]Amazing [C]grace how [G]sweet the sound
//! ```
//!
//! Alignment is by character column, so tabs should be expanded beforehand.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A whole whitespace-separated word that reads as a chord
    static ref CHORD_WORD: Regex = Regex::new(
        r"^[A-G][#b]?(?:maj|min|m|dim|aug|sus|add|M|\+|°|ø|[0-9#b()])*(?:/[A-G][#b]?)?$"
    )
    .unwrap();
}

/// Chords of a chord-only line with the character column each starts at
///
/// `None` if the line is blank, already uses brackets, or has any word that
/// is not a chord.
fn chord_columns(line: &str) -> Option<Vec<(usize, &str)>> {
    if line.trim().is_empty() || line.contains('[') {
        return None;
    }

    let mut chords = Vec::new();
    let mut start: Option<(usize, usize)> = None; // (byte, column)

    for (column, (byte, ch)) in line.char_indices().enumerate() {
        match (ch.is_whitespace(), start) {
            (false, None) => start = Some((byte, column)),
            (true, Some((begin, col))) => {
                chords.push((col, &line[begin..byte]));
                start = None;
            }
            _ => {}
        }
    }
    if let Some((begin, col)) = start {
        chords.push((col, &line[begin..]));
    }

    if chords.iter().all(|(_, word)| CHORD_WORD.is_match(word)) {
        Some(chords)
    } else {
        None
    }
}

/// True if the line holds nothing but chords
pub fn is_chord_line(line: &str) -> bool {
    chord_columns(line.trim_end_matches('\r')).is_some()
}

/// True if converting `text` would change it
pub fn has_chords_above_lyrics(text: &str) -> bool {
    text.split('\n').any(is_chord_line)
}

/// Insert each chord as `[Chord]` at its column of the lyric line
fn merge_line(chords: &[(usize, &str)], lyric: &str) -> String {
    let mut chars: Vec<char> = lyric.chars().collect();

    // Right to left so earlier columns stay valid
    for (column, chord) in chords.iter().rev() {
        if *column > chars.len() {
            chars.resize(*column, ' ');
        }
        let bracketed: Vec<char> = format!("[{}]", chord).chars().collect();
        chars.splice(*column..*column, bracketed);
    }

    chars.into_iter().collect()
}

fn split_line_ending(line: &str) -> (&str, &str) {
    match line.strip_suffix('\r') {
        Some(body) => (body, "\r"),
        None => (line, ""),
    }
}

/// Rewrite chords-above-lyrics layout into inline bracket notation
///
/// Lines that are not chord lines pass through untouched, as do line
/// endings. A chord line with no lyric under it becomes `[C] [G] [Am]`.
pub fn chords_above_to_inline(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let (body, ending) = split_line_ending(lines[i]);

        let chords = match chord_columns(body) {
            Some(chords) => chords,
            None => {
                output.push(lines[i].to_string());
                i += 1;
                continue;
            }
        };

        let lyric = lines.get(i + 1).map(|next| split_line_ending(next));
        match lyric {
            Some((lyric_body, lyric_ending))
                if !lyric_body.trim().is_empty()
                    && !lyric_body.contains('[')
                    && chord_columns(lyric_body).is_none() =>
            {
                output.push(format!("{}{}", merge_line(&chords, lyric_body), lyric_ending));
                i += 2;
            }
            _ => {
                let inline: Vec<String> = chords.iter().map(|(_, c)| format!("[{}]", c)).collect();
                output.push(format!("{}{}", inline.join(" "), ending));
                i += 1;
            }
        }
    }

    log::debug!("Converted chords-above layout: {} → {} lines", lines.len(), output.len());
    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_chord_line() {
        assert!(is_chord_line("G          C        G"));
        assert!(is_chord_line("  Am7  D/F#  Bbmaj7 Csus4 E7(b9)"));
        assert!(!is_chord_line("Amazing grace how sweet the sound"));
        assert!(!is_chord_line(""));
        assert!(!is_chord_line("   "));
        assert!(!is_chord_line("[G]Amazing"));
        assert!(!is_chord_line("G C and then D"));
    }

    #[test]
    fn test_merge_basic() {
        let text = format!("G{}C{}G\nAmazing grace how sweet the sound", " ".repeat(7), " ".repeat(9));
        assert_eq!(
            chords_above_to_inline(&text),
            "[G]Amazing [C]grace how [G]sweet the sound"
        );
    }

    #[test]
    fn test_chord_past_end_of_lyric() {
        let text = "C      G\nHello";
        assert_eq!(chords_above_to_inline(text), "[C]Hello  [G]");
    }

    #[test]
    fn test_standalone_chord_lines() {
        let text = "Intro:\nC  G  Am  F\n\nC G\nC    G\nla   la";
        assert_eq!(
            chords_above_to_inline(text),
            "Intro:\n[C] [G] [Am] [F]\n\n[C] [G]\n[C]la   [G]la"
        );
    }

    #[test]
    fn test_preserves_crlf_and_plain_text() {
        let text = "Verse 1\r\nD    A\r\nSing it out\r\n";
        assert_eq!(
            chords_above_to_inline(text),
            "Verse 1\r\n[D]Sing [A]it out\r\n"
        );
    }

    #[test]
    fn test_unicode_columns() {
        let text = "E     A\nÉcoute moi";
        assert_eq!(chords_above_to_inline(text), "[E]Écoute[A] moi");
    }

    #[test]
    fn test_inline_text_unchanged() {
        let text = "[G]Amazing [C]grace\nhow sweet";
        assert_eq!(chords_above_to_inline(text), text);
        assert!(!has_chords_above_lyrics(text));
    }
}
