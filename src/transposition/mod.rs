pub mod chord_transpose;

pub use chord_transpose::{semitone_offset, transpose_chord, transpose_lyrics, transpose_root};
