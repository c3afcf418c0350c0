//! Element-wise rebuilding of ordered sequences.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use graft_value::{ListRef, Record, Value};

use crate::engine::merge_with;

/// Build a fresh copy of `list`, recursing into structural elements.
///
/// Nested sequences are rebuilt the same way; record elements are deep
/// merged into a fresh empty record; every other element is copied by
/// value or handle. The input is never mutated. Always deep: the engine
/// only reaches for this when merging with `deep` set.
///
/// Starts its own visited set seeded with `list` itself, so a
/// self-containing sequence terminates. When invoked from the engine the
/// call tree's shared set is threaded through instead (see
/// [`copy_sequence_with`]).
pub fn copy_sequence(list: &ListRef, inherited: bool) -> ListRef {
    let mut visited = HashSet::new();
    visited.insert(Rc::as_ptr(list) as usize);
    copy_sequence_with(list, inherited, &mut visited)
}

/// [`copy_sequence`] against a caller-supplied visited set.
///
/// Structural elements are entered at most once per call tree: an element
/// whose identity is already in `visited` is copied by handle instead of
/// being descended into, so cycles that pass through a sequence terminate.
pub(crate) fn copy_sequence_with(
    list: &ListRef,
    inherited: bool,
    visited: &mut HashSet<usize>,
) -> ListRef {
    let copied: Vec<Value> = list
        .borrow()
        .iter()
        .map(|element| match element {
            Value::List(inner) => {
                let id = element.identity().unwrap_or_default();
                if visited.insert(id) {
                    Value::List(copy_sequence_with(inner, inherited, visited))
                } else {
                    element.clone()
                }
            }
            Value::Record(_) => {
                let id = element.identity().unwrap_or_default();
                if visited.insert(id) {
                    let fresh = Record::new_ref();
                    Value::Record(merge_with(
                        &fresh,
                        std::slice::from_ref(element),
                        true,
                        inherited,
                        visited,
                    ))
                } else {
                    element.clone()
                }
            }
            other => other.clone(),
        })
        .collect();
    Rc::new(RefCell::new(copied))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn list_of(doc: serde_json::Value) -> ListRef {
        match Value::from_json(doc) {
            Value::List(l) => l,
            other => panic!("fixture is not an array: {other:?}"),
        }
    }

    #[test]
    fn scalars_copy_by_value() {
        let list = list_of(json!([1, "two", null, true]));
        let copy = copy_sequence(&list, false);
        assert!(!Rc::ptr_eq(&list, &copy));
        assert_eq!(Value::List(list), Value::List(copy));
    }

    #[test]
    fn nested_sequences_are_freshly_allocated() {
        let list = list_of(json!([[1, 2], [3]]));
        let copy = copy_sequence(&list, false);

        let original_inner = list.borrow()[0].clone();
        let copied_inner = copy.borrow()[0].clone();
        assert!(!copied_inner.ptr_eq(&original_inner));
        assert_eq!(copied_inner, original_inner);
    }

    #[test]
    fn record_elements_are_deep_merged_into_fresh_records() {
        let list = list_of(json!([{"v": 1}]));
        let copy = copy_sequence(&list, false);

        let original = list.borrow()[0].clone();
        let copied = copy.borrow()[0].clone();
        assert!(!copied.ptr_eq(&original));
        assert_eq!(copied, original);
    }

    #[test]
    fn function_elements_copy_by_handle() {
        let func = Value::func(|_| Value::Null);
        let list: ListRef = Rc::new(RefCell::new(vec![func.clone()]));
        let copy = copy_sequence(&list, false);
        assert!(copy.borrow()[0].ptr_eq(&func));
    }

    #[test]
    fn self_containing_list_copies_itself_by_handle() {
        let list: ListRef = Rc::new(RefCell::new(Vec::new()));
        list.borrow_mut().push(Value::List(Rc::clone(&list)));

        let copy = copy_sequence(&list, false);
        assert!(!Rc::ptr_eq(&list, &copy));
        assert!(copy.borrow()[0].ptr_eq(&Value::List(Rc::clone(&list))));
    }

    #[test]
    fn inherited_flag_reaches_record_elements() {
        let base = match Value::from_json(json!({"b": 2})) {
            Value::Record(r) => r,
            _ => unreachable!(),
        };
        let element = Record::with_base(base).into_ref();
        element.borrow_mut().set("a", Value::Int(1));
        let list: ListRef = Rc::new(RefCell::new(vec![Value::Record(element)]));

        let own_only = copy_sequence(&list, false);
        let with_inherited = copy_sequence(&list, true);

        let own = own_only.borrow()[0].as_record().unwrap().clone();
        assert!(own.borrow().get_own("b").is_none());

        let all = with_inherited.borrow()[0].as_record().unwrap().clone();
        assert_eq!(all.borrow().get_own("b"), Some(Value::Int(2)));
    }
}
