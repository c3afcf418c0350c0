//! Keyed records with an explicit base chain.
//!
//! A [`Record`] is a string-keyed structure. Keys stored directly on the
//! record are its *own* keys; a record may additionally link to a base
//! record whose keys (and those of its own base, transitively) are visible
//! as *inherited* keys. The base link is the explicit stand-in for a
//! prototype chain, so the merge engine's `inherited` axis can be honored
//! without a host object model.
//!
//! Own keys enumerate in the map's natural (sorted) order; visible keys
//! enumerate own keys first, then each base level in chain order, with the
//! nearest declaration of a key shadowing farther ones.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use crate::value::Value;

/// Shared handle to a record.
pub type RecordRef = Rc<RefCell<Record>>;

/// A string-keyed structure with an optional base record.
#[derive(Default)]
pub struct Record {
    entries: BTreeMap<String, Value>,
    base: Option<RecordRef>,
}

impl Record {
    /// Create an empty record with no base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record inheriting from `base`.
    pub fn with_base(base: RecordRef) -> Self {
        Self {
            entries: BTreeMap::new(),
            base: Some(base),
        }
    }

    /// Wrap this record in a shared handle.
    pub fn into_ref(self) -> RecordRef {
        Rc::new(RefCell::new(self))
    }

    /// A fresh empty record behind a shared handle.
    pub fn new_ref() -> RecordRef {
        Self::new().into_ref()
    }

    /// The base record, if any.
    pub fn base(&self) -> Option<RecordRef> {
        self.base.clone()
    }

    /// Replace the base link.
    pub fn set_base(&mut self, base: Option<RecordRef>) {
        self.base = base;
    }

    /// Look up a key declared directly on this record.
    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    /// Look up a key on this record or anywhere along its base chain.
    ///
    /// The nearest declaration wins. A malformed cyclic base chain is
    /// tolerated: the walk stops on revisiting a record.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.get_own(key) {
            return Some(value);
        }
        let mut seen = HashSet::new();
        let mut current = self.base.clone();
        while let Some(record) = current {
            if !seen.insert(Rc::as_ptr(&record) as usize) {
                break;
            }
            let record = record.borrow();
            if let Some(value) = record.get_own(key) {
                return Some(value);
            }
            current = record.base.clone();
        }
        None
    }

    /// Set a key directly on this record, shadowing any inherited value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Remove an own key, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Returns `true` if `key` is declared directly on this record.
    pub fn contains_own(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys declared directly on this record, in natural order.
    pub fn own_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Own keys followed by inherited keys, nearest declaration first.
    ///
    /// Each key appears once: a key declared on this record shadows the
    /// same key anywhere in the base chain, and a nearer base level shadows
    /// a farther one.
    pub fn visible_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for key in self.entries.keys() {
            seen.insert(key.clone());
            keys.push(key.clone());
        }
        let mut visited = HashSet::new();
        let mut current = self.base.clone();
        while let Some(record) = current {
            if !visited.insert(Rc::as_ptr(&record) as usize) {
                break;
            }
            let record = record.borrow();
            for key in record.entries.keys() {
                if seen.insert(key.clone()) {
                    keys.push(key.clone());
                }
            }
            current = record.base.clone();
        }
        keys
    }

    /// Iterate over own entries in natural order.
    pub fn own_entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Number of own keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record declares no own keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Record {
    /// Own entries only; base chains are not consulted.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        map.entries(self.entries.iter());
        map.finish()?;
        if self.base.is_some() {
            f.write_str(" + base")?;
        }
        Ok(())
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            base: None,
        }
    }
}
