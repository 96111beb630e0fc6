//! Error types for typed key parsing
//!
//! The chord engine itself never fails on musical input; these errors only
//! surface where a caller asks for a strongly-typed `Key` or `Scale`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// Key name does not start with a recognized pitch class
    #[error("Invalid key: '{0}'. Expected a pitch name such as C, F#, Bb or Am")]
    InvalidKey(String),

    /// Scale name is neither major nor minor
    #[error("Invalid scale: '{0}'. Expected 'major' or 'minor'")]
    InvalidScale(String),
}
