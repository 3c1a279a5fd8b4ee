use std::collections::HashMap;

use crate::note::{Notation, PitchClass};
use crate::scale::ScaleFamily;

// ── Key ───────────────────────────────────────────────────────────────────────

/// A root and a scale family. Spelling follows the root's preferred notation,
/// so the name and the note list are always derived from the same two values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    pub root:   PitchClass,
    pub family: ScaleFamily,
}

impl Key {
    pub fn new(root: PitchClass, family: ScaleFamily) -> Self {
        Self { root, family }
    }

    pub fn notation(&self) -> Notation {
        self.root.preferred_notation()
    }

    pub fn root_name(&self) -> &'static str {
        self.root.spelling(self.notation())
    }

    /// e.g. "Gb minor pentatonic".
    pub fn name(&self) -> String {
        format!("{} {}", self.root_name(), self.family.suffix())
    }

    pub fn notes(&self) -> Vec<&'static str> {
        self.family.spelled_notes(self.root, self.notation())
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Entry {
    key:   Key,
    notes: Vec<&'static str>,
}

/// Every key over 12 roots and 6 families, filed per requested notation.
///
/// A key lands in both notation buckets (its name is fixed by the root's
/// preferred notation, not by the bucket), twice in the merged bucket of its
/// family, and once in the name lookup. Built once, read-only afterwards.
#[derive(Debug)]
pub struct Catalog {
    buckets: HashMap<(Notation, ScaleFamily), Vec<String>>,
    merged:  HashMap<ScaleFamily, Vec<String>>,
    lookup:  HashMap<String, Entry>,
}

impl Catalog {
    pub fn build() -> Self {
        let mut buckets: HashMap<(Notation, ScaleFamily), Vec<String>> = HashMap::new();
        let mut merged: HashMap<ScaleFamily, Vec<String>> = HashMap::new();
        let mut lookup = HashMap::new();

        for notation in Notation::ALL {
            for root in PitchClass::all() {
                for family in ScaleFamily::ALL {
                    let key  = Key::new(root, family);
                    let name = key.name();
                    buckets.entry((notation, family)).or_default().push(name.clone());
                    merged.entry(family).or_default().push(name.clone());
                    lookup.entry(name).or_insert_with(|| Entry { key, notes: key.notes() });
                }
            }
        }

        Self { buckets, merged, lookup }
    }

    /// Names filed under `family` for one requested notation, in root order.
    pub fn bucket(&self, notation: Notation, family: ScaleFamily) -> &[String] {
        self.buckets.get(&(notation, family)).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sharp-requested names followed by flat-requested names for `family`.
    pub fn merged(&self, family: ScaleFamily) -> &[String] {
        self.merged.get(&family).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn notes(&self, name: &str) -> Option<&[&'static str]> {
        self.lookup.get(name).map(|e| e.notes.as_slice())
    }

    pub fn key(&self, name: &str) -> Option<Key> {
        self.lookup.get(name).map(|e| e.key)
    }

    /// Number of distinct key names.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Drops a name from the lookup while leaving its bucket slots in place.
    #[cfg(test)]
    pub fn forget(&mut self, name: &str) {
        self.lookup.remove(name);
    }
}
