/// Chord token model
///
/// A chord token is a root pitch spelling (`C`, `F#`, `Bb`, ...) followed by
/// a free-form suffix (`m7`, `sus4`, `maj7`, ...). The suffix is never
/// interpreted; it rides along untouched through normalization and
/// transposition.
///
/// Slash chords (`C/G`, `Am7/E`) are a sequence of independently parsed parts.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    /// Leading root, then everything else as suffix
    static ref CHORD_PARTS: Regex = Regex::new(r"^([A-G][b#]?)(.*)$").unwrap();
}

/// Accidental used when a root was spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Accidental of a spelled root such as "C", "F#" or "Bb"
    pub fn of_root(root: &str) -> Accidental {
        if root.ends_with('#') {
            Accidental::Sharp
        } else if root.len() > 1 && root.ends_with('b') {
            Accidental::Flat
        } else {
            Accidental::Natural
        }
    }
}

/// A chord split into its root spelling and opaque suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedChord {
    pub root: String,
    pub suffix: String,
}

impl ParsedChord {
    pub fn new(root: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            suffix: suffix.into(),
        }
    }

    pub fn accidental(&self) -> Accidental {
        Accidental::of_root(&self.root)
    }

    pub fn is_flat(&self) -> bool {
        self.accidental() == Accidental::Flat
    }
}

impl fmt::Display for ParsedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)
    }
}

/// Result of a permissive chord parse
///
/// Anything that does not start with a pitch letter is kept verbatim as
/// `Unparsed` so callers can echo it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChordParse {
    Parsed(ParsedChord),
    Unparsed(String),
}

impl ChordParse {
    pub fn as_parsed(&self) -> Option<&ParsedChord> {
        match self {
            ChordParse::Parsed(chord) => Some(chord),
            ChordParse::Unparsed(_) => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, ChordParse::Parsed(_))
    }
}

impl fmt::Display for ChordParse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordParse::Parsed(chord) => write!(f, "{}", chord),
            ChordParse::Unparsed(raw) => write!(f, "{}", raw),
        }
    }
}

/// Split a token into root and suffix
///
/// The root is the longest `[A-G][b#]?` prefix. Tokens without a leading
/// pitch letter come back as `ChordParse::Unparsed`.
pub fn parse_chord(token: &str) -> ChordParse {
    match CHORD_PARTS.captures(token) {
        Some(caps) => ChordParse::Parsed(ParsedChord::new(&caps[1], &caps[2])),
        None => ChordParse::Unparsed(token.to_string()),
    }
}

/// A chord written as one or more `/`-separated parts (chord over bass)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashChord {
    pub parts: Vec<ChordParse>,
}

impl SlashChord {
    pub fn parse(content: &str) -> Self {
        Self {
            parts: content.split('/').map(parse_chord).collect(),
        }
    }

    /// Rebuild every part with `f`, leaving the `/` separators in place
    pub fn map_parts<F>(&self, f: F) -> SlashChord
    where
        F: Fn(&ChordParse) -> ChordParse,
    {
        SlashChord {
            parts: self.parts.iter().map(f).collect(),
        }
    }

    pub fn bass(&self) -> Option<&ChordParse> {
        if self.parts.len() > 1 {
            self.parts.last()
        } else {
            None
        }
    }
}

impl fmt::Display for SlashChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}
