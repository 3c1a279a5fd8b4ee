//! Drawing primitives for the fretboard, independent of any output surface.
//!
//! Coordinates are in surface units with the origin at the top-left corner and
//! `y` growing downwards. A renderer replays the shapes in order.

use crate::fretboard::{FretboardGeometry, Marker, Tuning};

pub const BACKGROUND_COLOR: &str = "#E5E0C4";
pub const INLAY_COLOR:      &str = "#888";
pub const LABEL_COLOR:      &str = "#333";
pub const NOTE_TEXT_COLOR:  &str = "white";

const INLAY_RADIUS: f64 = 5.0;
const NUT_WIDTH:    f64 = 5.0;
const FRET_WIDTH:   f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Align {
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Fill   { color: &'static str },
    Line   { x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: &'static str },
    Circle { x: f64, y: f64, radius: f64, color: &'static str },
    Text   { x: f64, y: f64, text: String, size: u16, align: Align, color: &'static str },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width:  f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn push(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }
}

impl FretboardGeometry {
    pub fn surface_size(&self) -> (f64, f64) {
        let width  = self.x_offset + self.fret_count as f64 * self.fret_spacing + 20.0;
        let height = self.y_offset + self.string_count as f64 * self.string_spacing + 25.0;
        (width, height)
    }

    pub fn string_y(&self, string: usize) -> f64 {
        self.y_offset + string as f64 * self.string_spacing
    }

    /// Centre of the space behind `fret`; open-string notes sit in the first space.
    pub fn note_x(&self, fret: usize) -> f64 {
        if fret == 0 {
            self.x_offset + 0.5 * self.fret_spacing
        } else {
            self.x_offset + (fret as f64 - 0.5) * self.fret_spacing
        }
    }

    /// Thicker for the lower strings.
    pub fn string_width(&self, string: usize) -> f64 {
        1.0 + (self.string_count - string) as f64 * 0.5
    }
}

/// The bare neck: background, strings, frets, nut, inlays and labels.
pub fn fretboard_scene(geometry: &FretboardGeometry, tuning: &Tuning) -> Scene {
    let (width, height) = geometry.surface_size();
    let g = geometry;
    let left   = g.x_offset;
    let right  = g.x_offset + g.fret_count as f64 * g.fret_spacing;
    let top    = g.y_offset;
    let bottom = g.string_y(g.string_count - 1);

    let mut shapes = vec![Shape::Fill { color: BACKGROUND_COLOR }];

    for s in 0..g.string_count {
        let y = g.string_y(s);
        shapes.push(Shape::Line {
            x1: left, y1: y, x2: right, y2: y,
            width: g.string_width(s), color: g.string_color,
        });
    }

    for fret in 0..=g.fret_count {
        let x = left + fret as f64 * g.fret_spacing;
        shapes.push(Shape::Line { x1: x, y1: top, x2: x, y2: bottom, width: FRET_WIDTH, color: g.fret_color });
    }

    shapes.push(Shape::Line { x1: left, y1: top, x2: left, y2: bottom, width: NUT_WIDTH, color: g.fret_color });

    for &fret in g.marker_positions.iter().filter(|&&f| f <= g.fret_count) {
        let x = left + (fret as f64 - 0.5) * g.fret_spacing;
        if fret == 12 {
            for row in [1.0, 4.0] {
                shapes.push(Shape::Circle { x, y: top + row * g.string_spacing, radius: INLAY_RADIUS, color: INLAY_COLOR });
            }
        } else {
            shapes.push(Shape::Circle { x, y: top + 2.5 * g.string_spacing, radius: INLAY_RADIUS, color: INLAY_COLOR });
        }
    }

    let label_y = top + g.string_count as f64 * g.string_spacing + 15.0;
    for fret in 1..=g.fret_count {
        shapes.push(Shape::Text {
            x: left + (fret as f64 - 0.5) * g.fret_spacing,
            y: label_y,
            text: fret.to_string(),
            size: 12,
            align: Align::Center,
            color: LABEL_COLOR,
        });
    }

    for s in 0..g.string_count {
        shapes.push(Shape::Text {
            x: left - 10.0,
            y: g.string_y(s) + 4.0,
            text: tuning.label(s).to_string(),
            size: 12,
            align: Align::Right,
            color: LABEL_COLOR,
        });
    }

    Scene { width, height, shapes }
}

/// A coloured dot with the note name inscribed, per marker.
pub fn highlight_shapes(geometry: &FretboardGeometry, markers: &[Marker]) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(markers.len() * 2);
    for m in markers {
        let x = geometry.note_x(m.fret);
        let y = geometry.string_y(m.string);
        let color = if m.is_root { geometry.root_note_color } else { geometry.scale_note_color };
        shapes.push(Shape::Circle { x, y, radius: geometry.dot_radius, color });
        shapes.push(Shape::Text {
            x,
            y: y + 3.0,
            text: m.pitch.canonical_name().to_string(),
            size: 10,
            align: Align::Center,
            color: NOTE_TEXT_COLOR,
        });
    }
    shapes
}
