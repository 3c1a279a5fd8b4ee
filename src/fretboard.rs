use crate::note::{canonicalize, PitchClass};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Fixed six-string, twelve-fret neck and its drawing constants.
#[derive(Clone, Debug, PartialEq)]
pub struct FretboardGeometry {
    pub string_count:     usize,
    pub fret_count:       usize,
    pub string_spacing:   f64,
    pub fret_spacing:     f64,
    pub dot_radius:       f64,
    pub x_offset:         f64,
    pub y_offset:         f64,
    pub string_color:     &'static str,
    pub fret_color:       &'static str,
    pub root_note_color:  &'static str,
    pub scale_note_color: &'static str,
    pub marker_positions: &'static [usize],
}

impl Default for FretboardGeometry {
    fn default() -> Self {
        Self {
            string_count:     6,
            fret_count:       12,
            string_spacing:   30.0,
            fret_spacing:     50.0,
            dot_radius:       10.0,
            x_offset:         40.0,
            y_offset:         20.0,
            string_color:     "#333",
            fret_color:       "#555",
            root_note_color:  "#FF5733",
            scale_note_color: "#33A1FF",
            marker_positions: &[3, 5, 7, 9, 12],
        }
    }
}

// ── Tuning ────────────────────────────────────────────────────────────────────

/// Open-string pitch classes, listed in drawing order (row 0 first).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuning(pub [PitchClass; 6]);

impl Tuning {
    pub fn standard() -> Self {
        use PitchClass as P;
        Self([P::E, P::A, P::D, P::G, P::B, P::E])
    }

    /// Letter drawn left of a string; empty past the last string.
    pub fn label(&self, string: usize) -> &'static str {
        self.0.get(string).map(|pc| pc.canonical_name()).unwrap_or("")
    }

    pub fn open_classes(&self) -> [PitchClass; 6] {
        self.0
    }
}

// ── Mapping ───────────────────────────────────────────────────────────────────

/// A highlighted (string, fret) cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Marker {
    pub string:  usize,
    pub fret:    usize,
    pub pitch:   PitchClass,
    pub is_root: bool,
}

pub fn pitch_at(open: PitchClass, fret: usize) -> PitchClass {
    open.transpose((fret % 12) as u8)
}

/// Every cell whose pitch class is among `notes`, root cells flagged.
///
/// Names may be spelled with sharps or flats; they are compared as pitch
/// classes. Names that are not notes at all match nothing.
pub fn map_fretboard(
    geometry: &FretboardGeometry,
    tuning: &Tuning,
    notes: &[&str],
    root: &str,
) -> Vec<Marker> {
    let targets: Vec<PitchClass> = notes.iter().filter_map(|n| canonicalize(n)).collect();
    let root = canonicalize(root);
    let opens = tuning.open_classes();

    let mut markers = Vec::new();
    for (string, &open) in opens.iter().enumerate().take(geometry.string_count) {
        for fret in 0..=geometry.fret_count {
            let pitch = pitch_at(open, fret);
            if targets.contains(&pitch) {
                markers.push(Marker { string, fret, pitch, is_root: Some(pitch) == root });
            }
        }
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_standard_open_classes() {
        let opens = Tuning::standard().open_classes();
        assert_eq!(opens, [4, 9, 2, 7, 11, 4].map(PitchClass::new));
    }

    #[test]
    fn test_standard_labels() {
        let tuning = Tuning::standard();
        let labels: Vec<_> = (0..6).map(|s| tuning.label(s)).collect();
        assert_eq!(labels, vec!["E", "A", "D", "G", "B", "E"]);
        assert_eq!(tuning.label(6), "");
    }

    #[test]
    fn test_fretboard_coverage() {
        let geometry = FretboardGeometry::default();
        for open in Tuning::standard().open_classes() {
            let reachable: HashSet<_> = (0..=geometry.fret_count).map(|f| pitch_at(open, f)).collect();
            assert_eq!(reachable.len(), 12);
            assert_eq!(pitch_at(open, 0), pitch_at(open, 12));
        }
    }

    #[test]
    fn test_chromatic_fills_every_cell() {
        let geometry = FretboardGeometry::default();
        let all = ["C","C#","D","D#","E","F","F#","G","G#","A","A#","B"];
        let markers = map_fretboard(&geometry, &Tuning::standard(), &all, "C");
        assert_eq!(markers.len(), 6 * 13);
    }

    #[test]
    fn test_c_triad_markers() {
        let geometry = FretboardGeometry::default();
        let markers = map_fretboard(&geometry, &Tuning::standard(), &["C", "E", "G"], "C");

        for m in &markers {
            assert!([PitchClass::C, PitchClass::E, PitchClass::G].contains(&m.pitch));
            assert_eq!(m.is_root, m.pitch == PitchClass::C);
        }
        for string in 0..6 {
            assert!(markers.iter().any(|m| m.string == string), "string {}", string);
        }

        let low_e: Vec<_> = markers.iter()
            .filter(|m| m.string == 0)
            .map(|m| (m.fret, m.is_root))
            .collect();
        assert_eq!(low_e, vec![(0, false), (3, false), (8, true), (12, false)]);
    }

    #[test]
    fn test_flat_spellings_match_sharps() {
        let geometry = FretboardGeometry::default();
        let tuning = Tuning::standard();
        let flats = map_fretboard(&geometry, &tuning, &["Gb", "Bb", "Db"], "Gb");
        let sharps = map_fretboard(&geometry, &tuning, &["F#", "A#", "C#"], "F#");
        assert_eq!(flats, sharps);
        assert!(flats.iter().any(|m| m.is_root));
    }

    #[test]
    fn test_repeated_notes_do_not_duplicate_cells() {
        let geometry = FretboardGeometry::default();
        let dim = ["C", "D", "Eb", "F", "Gb", "Ab", "A", "B", "C"];
        let markers = map_fretboard(&geometry, &Tuning::standard(), &dim, "C");
        let cells: HashSet<_> = markers.iter().map(|m| (m.string, m.fret)).collect();
        assert_eq!(cells.len(), markers.len());
    }

    #[test]
    fn test_unknown_names_match_nothing() {
        let geometry = FretboardGeometry::default();
        let markers = map_fretboard(&geometry, &Tuning::standard(), &["H", "X"], "H");
        assert!(markers.is_empty());
    }
}
