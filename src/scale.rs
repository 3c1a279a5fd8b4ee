use std::str::FromStr;

use crate::error::TheoryError;
use crate::note::{Notation, PitchClass};

// ── Scale families ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScaleFamily {
    Major,
    Minor,
    PentaMajor,
    PentaMinor,
    Blues,
    Diminished,
}

impl ScaleFamily {
    pub const ALL: [ScaleFamily; 6] = [
        Self::Major,
        Self::Minor,
        Self::PentaMajor,
        Self::PentaMinor,
        Self::Blues,
        Self::Diminished,
    ];

    /// Checkbox label.
    pub fn name(self) -> &'static str {
        match self {
            Self::Major      => "Major",
            Self::Minor      => "Minor",
            Self::PentaMajor => "Major Pentatonic",
            Self::PentaMinor => "Minor Pentatonic",
            Self::Blues      => "Blues",
            Self::Diminished => "Diminished",
        }
    }

    /// Text following the root in a key's display name.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Major      => "major",
            Self::Minor      => "minor",
            Self::PentaMajor => "major pentatonic",
            Self::PentaMinor => "minor pentatonic",
            Self::Blues      => "blues",
            Self::Diminished => "diminished",
        }
    }

    /// Semitone steps between successive scale degrees.
    pub fn steps(self) -> &'static [u8] {
        match self {
            Self::Major      => &[2,2,1,2,2,2,1],
            Self::Minor      => &[2,1,2,2,1,2,2],
            Self::PentaMajor => &[2,2,3,2,3],
            Self::PentaMinor => &[3,2,2,3,2],
            Self::Blues      => &[3,2,1,1,3,2],
            Self::Diminished => &[2,1,2,1,2,1,2,1],
        }
    }

    /// Notes produced per key. Diminished walks its whole cycle and lands back
    /// on the root, so it carries one extra note.
    pub fn note_count(self) -> usize {
        match self {
            Self::Diminished => self.steps().len() + 1,
            _                => self.steps().len(),
        }
    }

    /// Pitch classes of the scale on `root`, root first.
    pub fn pitch_classes(self, root: PitchClass) -> Vec<PitchClass> {
        let mut notes = Vec::with_capacity(self.note_count());
        let mut current = root;
        notes.push(current);
        for &step in self.steps().iter().take(self.note_count() - 1) {
            current = current.transpose(step);
            notes.push(current);
        }
        notes
    }

    /// Scale notes on `root` spelled under `notation`.
    pub fn spelled_notes(self, root: PitchClass, notation: Notation) -> Vec<&'static str> {
        self.pitch_classes(root).into_iter().map(|pc| pc.spelling(notation)).collect()
    }
}

impl FromStr for ScaleFamily {
    type Err = TheoryError;

    /// Accepts `minor-pentatonic`, `pentatonic_minor`, `pentatonicMinor` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "major"                                => Ok(Self::Major),
            "minor"                                => Ok(Self::Minor),
            "majorpentatonic" | "pentatonicmajor"  => Ok(Self::PentaMajor),
            "minorpentatonic" | "pentatonicminor"  => Ok(Self::PentaMinor),
            "blues"                                => Ok(Self::Blues),
            "diminished"                           => Ok(Self::Diminished),
            _ => Err(TheoryError::UnknownFamily(s.to_string())),
        }
    }
}
