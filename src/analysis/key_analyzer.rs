/// Chord-based key detection
///
/// Every one of the 24 key profiles is scored against a frequency table of
/// base chords (root + major/minor quality). The tonic chord counts extra,
/// and ending on the tonic earns a flat bonus. Confidence grows with the
/// lead of the best key over the runner-up and shrinks for short inputs.

use std::collections::HashMap;

use crate::analysis::config::AnalyzerConfig;
use crate::catalog::{normalize_root, KeyProfile, KEY_PROFILES};
use crate::models::key::{KeyAnalysis, KeyScore};
use crate::parse::{base_chord, dedup_ordered, extract_bracketed, extract_chord_tokens};

/// Analyze pasted text: bracketed chords or bare chord lists like `C G Am F`
pub fn analyze_key(text: &str) -> KeyAnalysis {
    analyze_key_with_config(text, &AnalyzerConfig::default())
}

pub fn analyze_key_with_config(text: &str, config: &AnalyzerConfig) -> KeyAnalysis {
    analyze_chords(&extract_chord_tokens(text), config)
}

/// Analyze inline-bracket lyrics, ignoring anything outside `[...]`
pub fn analyze_lyrics_key(lyrics: &str) -> KeyAnalysis {
    analyze_chords(&extract_bracketed(lyrics), &AnalyzerConfig::default())
}

/// Analyze an already extracted chord sequence
///
/// A ranking where every key scores zero (only unrecognized roots such as
/// "Cb Fb") is returned as-is: the first keys in profile order, with the
/// confidence the formula gives for a zero gap.
pub fn analyze_chords(chords: &[String], config: &AnalyzerConfig) -> KeyAnalysis {
    if chords.is_empty() {
        log::debug!("Key analysis: no chords detected");
        return KeyAnalysis::empty();
    }

    let detected_chords = dedup_ordered(chords.iter().cloned());
    let ranked = rank_keys(chords, config);
    let confidence = confidence(&ranked, detected_chords.len(), config);

    let possible_keys = ranked
        .iter()
        .take(config.max_candidates)
        .map(|scored| scored.key.clone())
        .collect::<Vec<_>>();

    if let Some(best) = ranked.first() {
        log::debug!(
            "Key analysis: {} chords ({} distinct), best {} (score {}), confidence {}",
            chords.len(),
            detected_chords.len(),
            best.key,
            best.score,
            confidence
        );
    }

    KeyAnalysis {
        possible_keys,
        detected_chords,
        confidence,
    }
}

/// Score all 24 keys, best first
///
/// Equal scores keep profile order (majors then minors, circle of fifths).
pub fn rank_keys(chords: &[String], config: &AnalyzerConfig) -> Vec<KeyScore> {
    let frequencies = chord_frequencies(chords);
    let final_chord = chords.last().map(|c| normalize_root(c));

    let mut ranked: Vec<KeyScore> = KEY_PROFILES
        .iter()
        .map(|profile| KeyScore {
            key: profile.key(),
            score: score_profile(profile, &frequencies, final_chord.as_deref(), config),
        })
        .collect();

    // sort_by is stable, which is what keeps ties in profile order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

fn chord_frequencies(chords: &[String]) -> HashMap<String, u32> {
    let mut frequencies = HashMap::new();
    for chord in chords {
        *frequencies.entry(base_chord(chord)).or_insert(0) += 1;
    }
    frequencies
}

fn score_profile(
    profile: &KeyProfile,
    frequencies: &HashMap<String, u32>,
    final_chord: Option<&str>,
    config: &AnalyzerConfig,
) -> u32 {
    let tonic = profile.tonic_chord();

    let mut score: u32 = profile
        .chords
        .iter()
        .filter_map(|chord| frequencies.get(*chord))
        .sum();

    if let Some(count) = frequencies.get(&tonic) {
        score += config.tonic_weight * count;
    }

    if final_chord == Some(tonic.as_str()) {
        score += config.final_chord_bonus;
    }

    log::trace!("  {} {}: {}", profile.tonic, profile.scale, score);
    score
}

/// Confidence in 0-100 from the ranked scores and number of distinct chords
pub fn confidence(ranked: &[KeyScore], distinct_chords: usize, config: &AnalyzerConfig) -> u8 {
    if distinct_chords == 0 {
        return 0;
    }

    let first = ranked.first().map_or(0, |s| s.score);
    let second = ranked.get(1).map_or(0, |s| s.score);
    let gap = first.saturating_sub(second);

    let value = config.base_confidence + config.gap_bonus(gap) - config.sparse_penalty(distinct_chords);
    value.clamp(0, 100) as u8
}
