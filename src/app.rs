use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::catalog::Catalog;
use crate::error::TheoryError;
use crate::fretboard::{map_fretboard, FretboardGeometry, Marker, Tuning};
use crate::layout::{fretboard_scene, highlight_shapes, Scene};
use crate::scale::ScaleFamily;
use crate::selector::{select_random_key, FamilySet, SelectedKey, Selection, EMPTY_SELECTION_MSG};

// ── Key display ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyDisplay {
    /// Nothing generated yet.
    Idle,
    Prompt,
    Key(SelectedKey),
}

impl KeyDisplay {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Idle     => vec!["Press Enter to generate a key".to_string()],
            Self::Prompt   => vec![EMPTY_SELECTION_MSG.to_string()],
            Self::Key(key) => vec![key.name.clone(), key.notes_text()],
        }
    }
}

// ── App state ─────────────────────────────────────────────────────────────────

pub struct App {
    catalog:  Catalog,
    pub geometry: FretboardGeometry,
    pub tuning:   Tuning,
    rng:      Pcg32,

    pub enabled:     FamilySet,
    pub cursor:      usize,
    pub display:     KeyDisplay,
    /// Highlights currently drawn. Left untouched by an empty selection.
    pub markers:     Vec<Marker>,
    pub should_quit: bool,
    pub status_msg:  String,
}

impl App {
    pub fn new(enabled: FamilySet, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let catalog = Catalog::build();
        let status_msg = format!("Seed: {}  │  {} keys", seed, catalog.len());
        Self {
            catalog,
            geometry:    FretboardGeometry::default(),
            tuning:      Tuning::standard(),
            rng:         Pcg32::seed_from_u64(seed),
            enabled,
            cursor:      0,
            display:     KeyDisplay::Idle,
            markers:     Vec::new(),
            should_quit: false,
            status_msg,
        }
    }

    /// Entries a draw currently picks from; each key counts once per notation.
    pub fn pool_size(&self) -> usize {
        self.enabled.iter().map(|f| self.catalog.merged(f).len()).sum()
    }

    // ── Generate ──────────────────────────────────────────────────────────

    /// Draws a key from the enabled families and maps it onto the neck.
    pub fn generate(&mut self) -> Result<(), TheoryError> {
        match select_random_key(&self.catalog, &self.enabled, &mut self.rng)? {
            Selection::NoSelection => {
                self.display = KeyDisplay::Prompt;
                self.status_msg = "No scale type enabled".to_string();
            }
            Selection::Key(key) => {
                self.markers = map_fretboard(&self.geometry, &self.tuning, &key.notes, &key.root);
                self.status_msg = format!("Generated: {} ({} positions)", key.name, self.markers.len());
                self.display = KeyDisplay::Key(key);
            }
        }
        Ok(())
    }

    /// Bare neck with the current highlights on top.
    pub fn scene(&self) -> Scene {
        let mut scene = fretboard_scene(&self.geometry, &self.tuning);
        scene.push(highlight_shapes(&self.geometry, &self.markers));
        scene
    }

    // ── Family toggles ────────────────────────────────────────────────────

    pub fn toggle_family(&mut self, index: usize) {
        let Some(&family) = ScaleFamily::ALL.get(index) else { return };
        let on = self.enabled.toggle(family);
        self.cursor = index;
        self.status_msg = format!("{}: {}", family.name(), if on { "on" } else { "off" });
    }

    pub fn toggle_at_cursor(&mut self) {
        self.toggle_family(self.cursor);
    }

    pub fn cursor_up(&mut self) {
        let n = ScaleFamily::ALL.len();
        self.cursor = if self.cursor == 0 { n - 1 } else { self.cursor - 1 };
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % ScaleFamily::ALL.len();
    }

    pub fn enable_all(&mut self) {
        self.enabled = FamilySet::all();
        self.status_msg = "All scale types on".to_string();
    }

    pub fn clear_all(&mut self) {
        self.enabled = FamilySet::none();
        self.status_msg = "All scale types off".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Shape;
    use pretty_assertions::assert_eq;

    fn dot_count(scene: &Scene) -> usize {
        scene.shapes.iter().filter(|s| matches!(s, Shape::Circle { radius, .. } if *radius == 10.0)).count()
    }

    #[test]
    fn test_initial_state() {
        let app = App::new(FamilySet::all(), Some(1));
        assert_eq!(app.display, KeyDisplay::Idle);
        assert!(app.markers.is_empty());
        assert_eq!(dot_count(&app.scene()), 0);
        assert_eq!(app.status_msg, "Seed: 1  │  72 keys");
    }

    #[test]
    fn test_pool_size_follows_toggles() {
        let mut app = App::new(FamilySet::all(), Some(1));
        assert_eq!(app.pool_size(), 144);
        app.clear_all();
        assert_eq!(app.pool_size(), 0);
        app.toggle_family(2);
        assert_eq!(app.pool_size(), 24);
    }

    #[test]
    fn test_generate_shows_key_and_markers() {
        let mut app = App::new(FamilySet::all(), Some(5));
        app.generate().unwrap();
        let KeyDisplay::Key(key) = &app.display else { panic!("expected a key") };
        let lines = app.display.lines();
        assert_eq!(lines[0], key.name);
        assert!(lines[1].starts_with("Notes: "));
        assert!(!app.markers.is_empty());
        assert!(app.markers.iter().any(|m| m.is_root));
        assert_eq!(dot_count(&app.scene()), app.markers.len());
    }

    #[test]
    fn test_empty_selection_keeps_previous_neck() {
        let mut app = App::new(FamilySet::all(), Some(11));
        app.generate().unwrap();
        let before = app.markers.clone();

        app.clear_all();
        app.generate().unwrap();
        assert_eq!(app.display, KeyDisplay::Prompt);
        assert_eq!(app.display.lines(), vec!["Please select at least one scale type".to_string()]);
        assert_eq!(app.markers, before);
    }

    #[test]
    fn test_toggles_and_cursor() {
        let mut app = App::new(FamilySet::none(), Some(2));
        app.cursor_up();
        assert_eq!(app.cursor, 5);
        app.toggle_at_cursor();
        assert!(app.enabled.contains(ScaleFamily::Diminished));
        assert_eq!(app.status_msg, "Diminished: on");
        app.cursor_down();
        assert_eq!(app.cursor, 0);
        app.toggle_family(1);
        assert_eq!(app.cursor, 1);
        assert!(app.enabled.contains(ScaleFamily::Minor));
        app.toggle_family(9);
        assert_eq!(app.cursor, 1);
        app.enable_all();
        assert_eq!(app.enabled, FamilySet::all());
    }

    #[test]
    fn test_only_enabled_family_is_drawn() {
        let mut app = App::new([ScaleFamily::Blues].into_iter().collect(), Some(8));
        for _ in 0..20 {
            app.generate().unwrap();
            let KeyDisplay::Key(key) = &app.display else { panic!("expected a key") };
            assert!(key.name.ends_with(" blues"));
        }
    }
}
