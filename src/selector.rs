use rand::Rng;

use crate::catalog::Catalog;
use crate::error::TheoryError;
use crate::note::Notation;
use crate::scale::ScaleFamily;

pub const EMPTY_SELECTION_MSG: &str = "Please select at least one scale type";

// ── Enabled families ──────────────────────────────────────────────────────────

/// One toggle per scale family, indexed in `ScaleFamily::ALL` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FamilySet([bool; 6]);

impl FamilySet {
    pub fn all() -> Self {
        Self([true; 6])
    }

    pub fn none() -> Self {
        Self::default()
    }

    fn slot(family: ScaleFamily) -> usize {
        ScaleFamily::ALL.iter().position(|&f| f == family).unwrap_or(0)
    }

    pub fn contains(&self, family: ScaleFamily) -> bool {
        self.0[Self::slot(family)]
    }

    pub fn set(&mut self, family: ScaleFamily, on: bool) {
        self.0[Self::slot(family)] = on;
    }

    /// Flips the toggle and returns its new state.
    pub fn toggle(&mut self, family: ScaleFamily) -> bool {
        let slot = Self::slot(family);
        self.0[slot] = !self.0[slot];
        self.0[slot]
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&on| on)
    }

    pub fn iter(&self) -> impl Iterator<Item = ScaleFamily> + '_ {
        ScaleFamily::ALL.into_iter().filter(|&f| self.contains(f))
    }
}

impl FromIterator<ScaleFamily> for FamilySet {
    fn from_iter<I: IntoIterator<Item = ScaleFamily>>(iter: I) -> Self {
        let mut set = Self::none();
        for family in iter {
            set.set(family, true);
        }
        set
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// The key drawn for one generate request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedKey {
    pub name:  String,
    /// First token of `name`, as displayed.
    pub root:   String,
    pub family: ScaleFamily,
    pub notes:  Vec<&'static str>,
}

impl SelectedKey {
    /// "Notes: C, D, E, …" line under the key name.
    pub fn notes_text(&self) -> String {
        format!("Notes: {}", self.notes.join(", "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Key(SelectedKey),
    /// No family enabled; the caller shows `EMPTY_SELECTION_MSG`.
    NoSelection,
}

/// Names eligible for a draw. Both notations are always included, so every key
/// appears once per notation and is weighted twice over.
pub fn eligible_pool<'a>(catalog: &'a Catalog, enabled: &FamilySet) -> Vec<&'a str> {
    let mut pool = Vec::new();
    for notation in Notation::ALL {
        for family in enabled.iter() {
            pool.extend(catalog.bucket(notation, family).iter().map(String::as_str));
        }
    }
    pool
}

/// Draws uniformly from the eligible pool.
///
/// An empty pool is `Ok(NoSelection)`. A drawn name missing from the lookup
/// is an `Err`, never folded into the empty case.
pub fn select_random_key<R: Rng>(
    catalog: &Catalog,
    enabled: &FamilySet,
    rng: &mut R,
) -> Result<Selection, TheoryError> {
    let pool = eligible_pool(catalog, enabled);
    if pool.is_empty() {
        return Ok(Selection::NoSelection);
    }

    let name = pool[rng.gen_range(0..pool.len())];
    let (Some(key), Some(notes)) = (catalog.key(name), catalog.notes(name)) else {
        return Err(TheoryError::MissingKey(name.to_string()));
    };
    let root = name.split(' ').next().unwrap_or(name);

    Ok(Selection::Key(SelectedKey {
        name:   name.to_string(),
        root:   root.to_string(),
        family: key.family,
        notes:  notes.to_vec(),
    }))
}
