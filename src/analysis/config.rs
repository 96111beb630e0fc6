//! Tunable weights for key analysis
//!
//! Defaults reproduce the scoring used by the song editor. The web UI can
//! override any subset by passing a partial object to `analyzeKeyWithConfig`.

use serde::{Deserialize, Serialize};

/// Multiplier applied to occurrences of a key's own tonic chord
pub const DEFAULT_TONIC_WEIGHT: u32 = 2;

/// Bonus when the song ends on the key's tonic chord
pub const DEFAULT_FINAL_CHORD_BONUS: u32 = 5;

/// Confidence before gap bonuses and sparsity penalties
pub const DEFAULT_BASE_CONFIDENCE: i32 = 50;

/// Number of candidate keys returned
pub const DEFAULT_MAX_CANDIDATES: usize = 3;

/// Confidence bonus once the lead over the runner-up exceeds `over`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapBonus {
    pub over: u32,
    pub bonus: i32,
}

/// Confidence penalty when fewer than `below` distinct chords were found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparsePenalty {
    pub below: usize,
    pub penalty: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerConfig {
    pub tonic_weight: u32,
    pub final_chord_bonus: u32,
    pub base_confidence: i32,
    /// Checked in order; the first match applies
    pub gap_bonuses: Vec<GapBonus>,
    /// Checked in order; the first match applies
    pub sparse_penalties: Vec<SparsePenalty>,
    pub max_candidates: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            tonic_weight: DEFAULT_TONIC_WEIGHT,
            final_chord_bonus: DEFAULT_FINAL_CHORD_BONUS,
            base_confidence: DEFAULT_BASE_CONFIDENCE,
            gap_bonuses: vec![
                GapBonus { over: 10, bonus: 30 },
                GapBonus { over: 5, bonus: 20 },
                GapBonus { over: 2, bonus: 10 },
            ],
            sparse_penalties: vec![
                SparsePenalty { below: 4, penalty: 20 },
                SparsePenalty { below: 8, penalty: 10 },
            ],
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl AnalyzerConfig {
    pub fn gap_bonus(&self, gap: u32) -> i32 {
        self.gap_bonuses
            .iter()
            .find(|g| gap > g.over)
            .map_or(0, |g| g.bonus)
    }

    pub fn sparse_penalty(&self, distinct_chords: usize) -> i32 {
        self.sparse_penalties
            .iter()
            .find(|p| distinct_chords < p.below)
            .map_or(0, |p| p.penalty)
    }
}
