use std::fmt;

// ── Spelling tables ───────────────────────────────────────────────────────────

/// Chromatic scale in sharp spelling; the index is the pitch class.
const SHARP_NAMES: [&str; 12] = ["C","C#","D","D#","E","F","F#","G","G#","A","A#","B"];

/// Sharp ↔ flat pairs for the five non-natural pitch classes.
const ENHARMONIC_PAIRS: [(&str, &str); 5] = [
    ("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb"),
];

/// Flat spellings of naturals, only understood when reading names back in.
const FLAT_NATURALS: [(&str, &str); 2] = [("E", "Fb"), ("B", "Cb")];

/// Roots whose keys are spelled with flats.
const FLAT_PREFERRED: [&str; 10] = ["F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb", "D", "G", "C"];

fn sharp_to_flat(name: &str) -> Option<&'static str> {
    ENHARMONIC_PAIRS.iter().find(|(s, _)| *s == name).map(|(_, f)| *f)
}

fn flat_to_sharp(name: &str) -> Option<&'static str> {
    ENHARMONIC_PAIRS.iter()
        .chain(FLAT_NATURALS.iter())
        .find(|(_, f)| *f == name)
        .map(|(s, _)| *s)
}

// ── Notation ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    Sharp,
    Flat,
}

impl Notation {
    pub const ALL: [Notation; 2] = [Self::Sharp, Self::Flat];
}

// ── Pitch class ───────────────────────────────────────────────────────────────

/// One of the 12 chromatic pitch classes, 0 = C … 11 = B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    #[cfg(test)]
    pub const C: PitchClass = PitchClass(0);
    pub const D: PitchClass = PitchClass(2);
    pub const E: PitchClass = PitchClass(4);
    pub const G: PitchClass = PitchClass(7);
    pub const A: PitchClass = PitchClass(9);
    pub const B: PitchClass = PitchClass(11);

    /// Wraps any semitone count into the octave.
    pub fn new(semitone: u8) -> Self {
        Self(semitone % 12)
    }

    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }

    pub fn transpose(self, semitones: u8) -> Self {
        Self::new(self.0 + semitones % 12)
    }

    pub fn is_natural(self) -> bool {
        !SHARP_NAMES[self.0 as usize].contains('#')
    }

    /// Sharp-based name used for comparisons and fretboard labels.
    pub fn canonical_name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }

    /// Display name under `notation`. Naturals are spelled the same either way.
    pub fn spelling(self, notation: Notation) -> &'static str {
        let sharp = self.canonical_name();
        match notation {
            Notation::Flat if !self.is_natural() => sharp_to_flat(sharp).unwrap_or(sharp),
            _                                    => sharp,
        }
    }

    /// Notation this root's keys are written in.
    pub fn preferred_notation(self) -> Notation {
        let sharp = self.canonical_name();
        let flat  = self.spelling(Notation::Flat);
        if FLAT_PREFERRED.contains(&sharp) || FLAT_PREFERRED.contains(&flat) {
            Notation::Flat
        } else {
            Notation::Sharp
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Reduces any sharp, flat or natural spelling to its pitch class.
pub fn canonicalize(name: &str) -> Option<PitchClass> {
    let sharp = flat_to_sharp(name).unwrap_or(name);
    SHARP_NAMES.iter().position(|n| *n == sharp).map(|i| PitchClass(i as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_spelling() {
        for pc in PitchClass::all() {
            for notation in Notation::ALL {
                assert_eq!(canonicalize(pc.spelling(notation)), Some(pc));
            }
        }
    }

    #[test]
    fn test_naturals_are_fixed_points() {
        let naturals: Vec<_> = PitchClass::all().filter(|pc| pc.is_natural()).collect();
        assert_eq!(naturals.len(), 7);
        for pc in naturals {
            assert_eq!(pc.spelling(Notation::Sharp), pc.spelling(Notation::Flat));
        }
    }

    #[test]
    fn test_flat_spellings() {
        let flats: Vec<_> = PitchClass::all().map(|pc| pc.spelling(Notation::Flat)).collect();
        assert_eq!(flats, ["C","Db","D","Eb","E","F","Gb","G","Ab","A","Bb","B"]);
    }

    #[test]
    fn test_canonicalize_flat_naturals() {
        assert_eq!(canonicalize("Cb"), Some(PitchClass::new(11)));
        assert_eq!(canonicalize("Fb"), Some(PitchClass::E));
        assert_eq!(canonicalize("Gb"), Some(PitchClass::new(6)));
        assert_eq!(canonicalize("H"), None);
    }

    #[test]
    fn test_preferred_notation() {
        let sharp: Vec<_> = PitchClass::all()
            .filter(|pc| pc.preferred_notation() == Notation::Sharp)
            .map(|pc| pc.canonical_name())
            .collect();
        assert_eq!(sharp, ["E", "A", "B"]);
        assert_eq!(PitchClass::new(6).preferred_notation(), Notation::Flat);
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(PitchClass::new(11).transpose(1), PitchClass::C);
        assert_eq!(PitchClass::E.transpose(12), PitchClass::E);
        assert_eq!(PitchClass::new(14), PitchClass::new(2));
    }

}
