/// Static key profiles for chord-based key detection
///
/// Each profile lists the chords idiomatically heard in a key. Matching is by
/// exact spelling, so entries use the spelling a songwriter would write in
/// that key ("Bb" in F major, "A#" in B major).
///
/// Major profile layout: I, ii, iii, IV, V, vi, vii°, V7, vi7, Imaj7, IVmaj7
/// Minor profile layout: i, ii°, III, iv, v, VI, VII, V, V7, i7, IIImaj7
///
/// Order matters: majors then minors, both following the circle of fifths.
/// The analyzer keeps this order for equal scores.

use crate::models::key::{Key, Scale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyProfile {
    /// Tonic root as displayed ("F#", "Bb")
    pub tonic: &'static str,
    pub scale: Scale,
    pub chords: &'static [&'static str],
}

impl KeyProfile {
    const fn major(tonic: &'static str, chords: &'static [&'static str]) -> Self {
        Self { tonic, scale: Scale::Major, chords }
    }

    const fn minor(tonic: &'static str, chords: &'static [&'static str]) -> Self {
        Self { tonic, scale: Scale::Minor, chords }
    }

    /// Chord name of the tonic: "C" for C major, "Am" for A minor
    pub fn tonic_chord(&self) -> String {
        self.key().tonic_chord()
    }

    pub fn key(&self) -> Key {
        Key::new(self.tonic, self.scale)
    }
}

pub static KEY_PROFILES: [KeyProfile; 24] = [
    // Major keys
    KeyProfile::major("C", &["C", "Dm", "Em", "F", "G", "Am", "Bdim", "G7", "Am7", "Cmaj7", "Fmaj7"]),
    KeyProfile::major("G", &["G", "Am", "Bm", "C", "D", "Em", "F#dim", "D7", "Em7", "Gmaj7", "Cmaj7"]),
    KeyProfile::major("D", &["D", "Em", "F#m", "G", "A", "Bm", "C#dim", "A7", "Bm7", "Dmaj7", "Gmaj7"]),
    KeyProfile::major("A", &["A", "Bm", "C#m", "D", "E", "F#m", "G#dim", "E7", "F#m7", "Amaj7", "Dmaj7"]),
    KeyProfile::major("E", &["E", "F#m", "G#m", "A", "B", "C#m", "D#dim", "B7", "C#m7", "Emaj7", "Amaj7"]),
    KeyProfile::major("B", &["B", "C#m", "D#m", "E", "F#", "G#m", "A#dim", "F#7", "G#m7", "Bmaj7", "Emaj7"]),
    KeyProfile::major("F#", &["F#", "G#m", "A#m", "B", "C#", "D#m", "E#dim", "C#7", "D#m7", "F#maj7", "Bmaj7"]),
    KeyProfile::major("Db", &["Db", "Ebm", "Fm", "Gb", "Ab", "Bbm", "Cdim", "Ab7", "Bbm7", "Dbmaj7", "Gbmaj7"]),
    KeyProfile::major("Ab", &["Ab", "Bbm", "Cm", "Db", "Eb", "Fm", "Gdim", "Eb7", "Fm7", "Abmaj7", "Dbmaj7"]),
    KeyProfile::major("Eb", &["Eb", "Fm", "Gm", "Ab", "Bb", "Cm", "Ddim", "Bb7", "Cm7", "Ebmaj7", "Abmaj7"]),
    KeyProfile::major("Bb", &["Bb", "Cm", "Dm", "Eb", "F", "Gm", "Adim", "F7", "Gm7", "Bbmaj7", "Ebmaj7"]),
    KeyProfile::major("F", &["F", "Gm", "Am", "Bb", "C", "Dm", "Edim", "C7", "Dm7", "Fmaj7", "Bbmaj7"]),
    // Minor keys (relative minors, same order)
    KeyProfile::minor("A", &["Am", "Bdim", "C", "Dm", "Em", "F", "G", "E", "E7", "Am7", "Cmaj7"]),
    KeyProfile::minor("E", &["Em", "F#dim", "G", "Am", "Bm", "C", "D", "B", "B7", "Em7", "Gmaj7"]),
    KeyProfile::minor("B", &["Bm", "C#dim", "D", "Em", "F#m", "G", "A", "F#", "F#7", "Bm7", "Dmaj7"]),
    KeyProfile::minor("F#", &["F#m", "G#dim", "A", "Bm", "C#m", "D", "E", "C#", "C#7", "F#m7", "Amaj7"]),
    KeyProfile::minor("C#", &["C#m", "D#dim", "E", "F#m", "G#m", "A", "B", "G#", "G#7", "C#m7", "Emaj7"]),
    KeyProfile::minor("G#", &["G#m", "A#dim", "B", "C#m", "D#m", "E", "F#", "D#", "D#7", "G#m7", "Bmaj7"]),
    KeyProfile::minor("D#", &["D#m", "E#dim", "F#", "G#m", "A#m", "B", "C#", "A#", "A#7", "D#m7", "F#maj7"]),
    KeyProfile::minor("Bb", &["Bbm", "Cdim", "Db", "Ebm", "Fm", "Gb", "Ab", "F", "F7", "Bbm7", "Dbmaj7"]),
    KeyProfile::minor("F", &["Fm", "Gdim", "Ab", "Bbm", "Cm", "Db", "Eb", "C", "C7", "Fm7", "Abmaj7"]),
    KeyProfile::minor("C", &["Cm", "Ddim", "Eb", "Fm", "Gm", "Ab", "Bb", "G", "G7", "Cm7", "Ebmaj7"]),
    KeyProfile::minor("G", &["Gm", "Adim", "Bb", "Cm", "Dm", "Eb", "F", "D", "D7", "Gm7", "Bbmaj7"]),
    KeyProfile::minor("D", &["Dm", "Edim", "F", "Gm", "Am", "Bb", "C", "A", "A7", "Dm7", "Fmaj7"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{chromatic_index, root_pitch_class, CIRCLE_OF_FIFTHS};

    #[test]
    fn test_profile_counts() {
        let majors = KEY_PROFILES.iter().filter(|p| p.scale == Scale::Major).count();
        let minors = KEY_PROFILES.iter().filter(|p| p.scale == Scale::Minor).count();
        assert_eq!(majors, 12);
        assert_eq!(minors, 12);
        assert!(KEY_PROFILES.iter().all(|p| p.chords.len() == 11));
    }

    #[test]
    fn test_majors_follow_circle_of_fifths() {
        let tonics: Vec<&str> = KEY_PROFILES[..12].iter().map(|p| p.tonic).collect();
        assert_eq!(tonics, CIRCLE_OF_FIFTHS.to_vec());
    }

    #[test]
    fn test_minors_are_relative_to_majors() {
        for (major, minor) in KEY_PROFILES[..12].iter().zip(KEY_PROFILES[12..].iter()) {
            let major_pc = chromatic_index(major.tonic).unwrap();
            let minor_pc = chromatic_index(minor.tonic).unwrap();
            assert_eq!((major_pc + 9) % 12, minor_pc, "{} vs {}m", major.tonic, minor.tonic);
        }
    }

    #[test]
    fn test_profiles_start_with_tonic_chord() {
        for profile in KEY_PROFILES.iter() {
            assert_eq!(profile.chords[0], profile.tonic_chord());
        }
    }

    #[test]
    fn test_major_triads_are_diatonic() {
        // I ii iii IV V vi sit 0 2 4 5 7 9 semitones above the tonic
        let steps = [0, 2, 4, 5, 7, 9];
        for profile in KEY_PROFILES[..12].iter() {
            let tonic = chromatic_index(profile.tonic).unwrap();
            for (chord, step) in profile.chords.iter().zip(steps) {
                assert_eq!(
                    root_pitch_class(chord),
                    Some((tonic + step) % 12),
                    "{} in {} major",
                    chord,
                    profile.tonic
                );
            }
        }
    }
}
