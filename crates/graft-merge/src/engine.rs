//! The recursive merge core and its public entry points.
//!
//! `merge_with` walks each source left to right and each visible key in the
//! source's enumeration order, deciding per value whether to assign it
//! directly, rebuild it (sequences), or recurse into it (records). Later
//! sources overwrite earlier ones on key collisions. The `visited` set is
//! shared across the whole call tree spawned by one entry point, sequence
//! copies included: a source structure is entered at most once, which both
//! terminates cyclic inputs and skips re-merging shared substructures.

use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, trace};

use graft_value::{Kind, Record, RecordRef, Value};

use crate::sequence::copy_sequence_with;

/// Deep merge of the sources' own properties into `target`.
///
/// Keys contributed by a source's base chain are not visited. Returns the
/// same handle that was passed in.
pub fn assign(target: &RecordRef, sources: &[Value]) -> RecordRef {
    debug!(sources = sources.len(), "assign: deep merge, own keys only");
    let mut visited = HashSet::new();
    merge_with(target, sources, true, false, &mut visited)
}

/// Deep merge of the sources' own and inherited properties into `target`.
///
/// Returns the same handle that was passed in.
pub fn mixin_deep(target: &RecordRef, sources: &[Value]) -> RecordRef {
    debug!(sources = sources.len(), "mixin_deep: deep merge, visible keys");
    let mut visited = HashSet::new();
    merge_with(target, sources, true, true, &mut visited)
}

/// Shallow merge of the sources' own and inherited properties into `target`.
///
/// Top-level keys only; nested containers are copied by handle, so the
/// target ends up aliasing the sources' substructures. Returns the same
/// handle that was passed in.
pub fn mixin_shallow(target: &RecordRef, sources: &[Value]) -> RecordRef {
    debug!(sources = sources.len(), "mixin_shallow: shallow merge");
    let mut visited = HashSet::new();
    merge_with(target, sources, false, true, &mut visited)
}

/// The engine core. Public entry points fix `deep`/`inherited` and start a
/// fresh visited set; recursive calls share the caller's.
pub(crate) fn merge_with(
    target: &RecordRef,
    sources: &[Value],
    deep: bool,
    inherited: bool,
    visited: &mut HashSet<usize>,
) -> RecordRef {
    for source in sources {
        // Null and non-record sources have no enumerable keys; skip them.
        let src = match source {
            Value::Record(src) => src,
            _ => continue,
        };

        let keys = {
            let src = src.borrow();
            if inherited {
                src.visible_keys()
            } else {
                src.own_keys()
            }
        };

        for key in keys {
            let value = {
                let src = src.borrow();
                if inherited {
                    src.get(&key)
                } else {
                    src.get_own(&key)
                }
            };
            let Some(value) = value else { continue };

            if value.identity().is_some_and(|id| visited.contains(&id)) {
                trace!(key = %key, "skipping already-visited source value");
                continue;
            }

            if !deep {
                target.borrow_mut().set(key, value);
                continue;
            }

            match value.kind() {
                Kind::Sequence => {
                    if let Some(id) = value.identity() {
                        visited.insert(id);
                    }
                    let list = value.as_list().cloned().unwrap_or_default();
                    let copy = Value::List(copy_sequence_with(&list, inherited, visited));
                    target.borrow_mut().set(key, copy);
                }
                Kind::Record => {
                    if let Some(id) = value.identity() {
                        visited.insert(id);
                    }
                    // Merge into the existing nested record when the target
                    // already holds one; otherwise start from empty.
                    let nested = match target.borrow().get_own(&key) {
                        Some(Value::Record(existing)) => existing,
                        _ => Record::new_ref(),
                    };
                    let merged =
                        merge_with(&nested, std::slice::from_ref(&value), deep, inherited, visited);
                    target.borrow_mut().set(key, Value::Record(merged));
                }
                Kind::Scalar => {
                    target.borrow_mut().set(key, value);
                }
            }
        }
    }

    Rc::clone(target)
}
