//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! `from_json` is total: every JSON document maps onto the value model.
//! `to_json` is partial: callables and opaque values have no JSON form, and
//! cyclic graphs are rejected rather than looped over. Cycle detection here
//! tracks the *current path* (an identity is released once its subtree is
//! written out), unlike the merge engine's visit-once guard — a shared but
//! acyclic substructure serializes fine, in both places it appears.

use std::collections::HashSet;

use serde_json::{Map as JsonMap, Number, Value as Json};

use crate::error::{ValueError, ValueResult};
use crate::record::Record;
use crate::value::Value;

impl Value {
    /// Build a value from a JSON document.
    ///
    /// Objects become records with no base; arrays become lists; integral
    /// numbers become `Int` and all other numbers `Float`.
    pub fn from_json(json: Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::MAX)),
            },
            Json::String(s) => Self::Str(s),
            Json::Array(items) => Self::list(items.into_iter().map(Self::from_json).collect()),
            Json::Object(map) => {
                let mut record = Record::new();
                for (key, value) in map {
                    record.set(key, Self::from_json(value));
                }
                Self::record(record)
            }
        }
    }

    /// Render this value as a JSON document.
    ///
    /// Records contribute their own entries only; base chains are a merge
    /// concern, not a serialization one.
    ///
    /// # Errors
    ///
    /// [`ValueError::Unrepresentable`] for callables, opaque values, and
    /// non-finite floats; [`ValueError::CyclicValue`] if the value graph
    /// contains a cycle.
    pub fn to_json(&self) -> ValueResult<Json> {
        let mut on_path = HashSet::new();
        self.to_json_guarded(&mut on_path)
    }

    fn to_json_guarded(&self, on_path: &mut HashSet<usize>) -> ValueResult<Json> {
        match self {
            Self::Null => Ok(Json::Null),
            Self::Bool(b) => Ok(Json::Bool(*b)),
            Self::Int(i) => Ok(Json::Number(Number::from(*i))),
            Self::Float(x) => Number::from_f64(*x)
                .map(Json::Number)
                .ok_or(ValueError::Unrepresentable {
                    kind: "non-finite float",
                }),
            Self::Str(s) => Ok(Json::String(s.clone())),
            Self::Time(t) => Ok(Json::String(t.to_rfc3339())),
            Self::List(list) => {
                let id = self.identity().unwrap_or_default();
                if !on_path.insert(id) {
                    return Err(ValueError::CyclicValue);
                }
                let mut items = Vec::with_capacity(list.borrow().len());
                for element in list.borrow().iter() {
                    items.push(element.to_json_guarded(on_path)?);
                }
                on_path.remove(&id);
                Ok(Json::Array(items))
            }
            Self::Record(record) => {
                let id = self.identity().unwrap_or_default();
                if !on_path.insert(id) {
                    return Err(ValueError::CyclicValue);
                }
                let mut map = JsonMap::new();
                for (key, value) in record.borrow().own_entries() {
                    map.insert(key.clone(), value.to_json_guarded(on_path)?);
                }
                on_path.remove(&id);
                Ok(Json::Object(map))
            }
            Self::Func(_) | Self::Opaque(_) => Err(ValueError::Unrepresentable {
                kind: self.type_name(),
            }),
        }
    }
}
