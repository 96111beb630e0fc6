// Extraction, normalization and layout conversion working together

use songbook_wasm::{
    analyze_lyrics_key, chords_above_to_inline, extract_chord_roots, extract_detected_chords,
    normalize_root, transpose_lyrics, Key,
};

#[test]
fn test_scenario_extract_detected_chords() {
    assert_eq!(
        extract_detected_chords("[Cmaj7]Oh [G7]my [Am]soul"),
        vec!["C", "G", "Am"]
    );
}

#[test]
fn test_extract_detected_chords_edge_cases() {
    assert!(extract_detected_chords("").is_empty());
    assert!(extract_detected_chords("[Intro] no chords").is_empty());
    assert_eq!(extract_detected_chords("[Bb]a [Bbm7]b [A#]c"), vec!["Bb", "Bbm", "A#"]);
}

#[test]
fn test_extract_chord_roots_from_pasted_list() {
    assert_eq!(extract_chord_roots("Capo 2: G  D/F#  Em7  Cadd9"), vec!["G", "D", "F#", "Em", "C"]);
}

#[test]
fn test_normalization_idempotent() {
    let tokens = [
        "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#",
        "Bb", "B", "Bbm7", "Ebmaj7/G", "F#sus4", "Abdim", "Cb", "E#", "Hm", "",
    ];
    for token in tokens {
        let once = normalize_root(token);
        assert_eq!(normalize_root(&once), once, "token {:?}", token);
    }
}

#[test]
fn test_normalization_keeps_suffix() {
    assert_eq!(normalize_root("Ebmaj7/G"), "D#maj7/G");
    assert_eq!(normalize_root("Abdim"), "G#dim");
}

#[test]
fn test_convert_then_transpose() {
    let pasted = format!("C{}F{}C\nWhen peace like a river\n", " ".repeat(10), " ".repeat(6));
    let inline = chords_above_to_inline(&pasted);
    assert_eq!(inline, "[C]When peace [F]like a [C]river\n");

    let transposed = transpose_lyrics(&inline, "C", "Eb");
    assert_eq!(transposed, "[D#]When peace [G#]like a [D#]river\n");
}

#[test]
fn test_convert_then_analyze() {
    let pasted = "G              C       G\nAmazing grace, how sweet the sound\n      D          G\nThat saved a wretch like me";
    let inline = chords_above_to_inline(pasted);
    let result = analyze_lyrics_key(&inline);
    assert_eq!(result.detected_chords, vec!["G", "C", "D"]);
    assert_eq!(result.possible_keys[0], Key::major("G"));
}
