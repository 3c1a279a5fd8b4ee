use crate::fretboard::{FretboardGeometry, Marker, Tuning};

const EMPTY_CELL: &str = "----";

fn cell(marker: Option<&Marker>) -> String {
    match marker {
        Some(m) if m.is_root => format!("[{:<2}]", m.pitch.canonical_name()),
        Some(m)              => format!(" {:<2} ", m.pitch.canonical_name()),
        None                 => EMPTY_CELL.to_string(),
    }
}

/// Plain-text neck: a fret-number header, then one row per string in tuning order.
/// Root cells are bracketed.
pub fn neck_diagram(geometry: &FretboardGeometry, tuning: &Tuning, markers: &[Marker]) -> Vec<String> {
    let frets = 0..=geometry.fret_count;
    let header: Vec<String> = frets.clone().map(|f| format!("{:^4}", f)).collect();

    let mut lines = vec![format!("   |{}|", header.join("|"))];
    for string in 0..geometry.string_count {
        let cells: Vec<String> = frets.clone()
            .map(|fret| cell(markers.iter().find(|m| m.string == string && m.fret == fret)))
            .collect();
        lines.push(format!("{:>2} |{}|", tuning.label(string), cells.join("|")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::map_fretboard;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_neck() {
        let lines = neck_diagram(&FretboardGeometry::default(), &Tuning::standard(), &[]);
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("   | 0  | 1  |"));
        assert_eq!(lines[1], format!(" E |{}|", vec![EMPTY_CELL; 13].join("|")));
    }

    #[test]
    fn test_c_triad_on_low_e() {
        let geometry = FretboardGeometry::default();
        let tuning = Tuning::standard();
        let markers = map_fretboard(&geometry, &tuning, &["C", "E", "G"], "C");
        let lines = neck_diagram(&geometry, &tuning, &markers);
        assert_eq!(
            lines[1],
            " E | E  |----|----| G  |----|----|----|----|[C ]|----|----|----| E  |"
        );
    }
}
