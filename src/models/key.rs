/// Musical key model: a tonic spelling plus a major/minor scale
///
/// Keys are identified by the tonic as the user spelled it ("Bb", "F#") so
/// that UI selectors and analysis results show familiar names. Pitch-class
/// arithmetic goes through `catalog::chromatic_index`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChordError;
use crate::models::chord::{parse_chord, ChordParse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Major,
    Minor,
}

impl Scale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scale {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "major" | "maj" | "" => Ok(Scale::Major),
            "minor" | "min" | "m" => Ok(Scale::Minor),
            _ => Err(ChordError::InvalidScale(s.to_string())),
        }
    }
}

/// A key candidate, serialized as `{ "key": "C", "scale": "major" }`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub key: String,
    pub scale: Scale,
}

impl Key {
    pub fn new(key: impl Into<String>, scale: Scale) -> Self {
        Self {
            key: key.into(),
            scale,
        }
    }

    pub fn major(key: impl Into<String>) -> Self {
        Self::new(key, Scale::Major)
    }

    pub fn minor(key: impl Into<String>) -> Self {
        Self::new(key, Scale::Minor)
    }

    /// Name of the tonic chord: "C" for C major, "Am" for A minor
    pub fn tonic_chord(&self) -> String {
        match self.scale {
            Scale::Major => self.key.clone(),
            Scale::Minor => format!("{}m", self.key),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.scale)
    }
}

impl FromStr for Key {
    type Err = ChordError;

    /// Accepts "C", "Am", "C#m", "Bb major", "F# minor"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_chord(s.trim()) {
            ChordParse::Parsed(chord) => {
                let scale = chord
                    .suffix
                    .parse::<Scale>()
                    .map_err(|_| ChordError::InvalidKey(s.to_string()))?;
                Ok(Key::new(chord.root, scale))
            }
            ChordParse::Unparsed(_) => Err(ChordError::InvalidKey(s.to_string())),
        }
    }
}

/// A key together with its raw analyzer score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyScore {
    #[serde(flatten)]
    pub key: Key,
    pub score: u32,
}

/// Output of key analysis
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyAnalysis {
    /// Up to three candidates, best first
    pub possible_keys: Vec<Key>,
    /// Chord tokens as written, deduplicated in first-seen order
    pub detected_chords: Vec<String>,
    /// 0-100
    pub confidence: u8,
}

impl KeyAnalysis {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.possible_keys.is_empty() && self.detected_chords.is_empty()
    }

    pub fn best(&self) -> Option<&Key> {
        self.possible_keys.first()
    }
}
