//! The dynamically typed [`Value`] and its shared container handles.
//!
//! Containers (`List`, `Record`) and callables are held behind `Rc` handles
//! so that distinct `Value`s can alias the same underlying structure. That
//! aliasing is what makes reference identity meaningful: the cycle guard in
//! the merge engine tracks handle addresses, and shallow merges copy handles
//! rather than contents.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::record::{Record, RecordRef};

/// Shared handle to an ordered sequence of values.
pub type ListRef = Rc<RefCell<Vec<Value>>>;

/// A callable hosted in the value model.
///
/// Callables are opaque to the merge engine: they are copied by handle and
/// never traversed.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> Value>;

/// A dynamically typed value.
///
/// Scalars (`Null` through `Time`) have value semantics. `List` and
/// `Record` are shared mutable containers. `Func` and `Opaque` carry
/// specialized runtime state and are deliberately excluded from deep
/// traversal (see [`Kind`](crate::Kind)).
#[derive(Clone)]
pub enum Value {
    /// The absent value. Sources equal to `Null` are skipped by the engine.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    Str(String),
    /// Timestamp scalar. Copied by value, never recursed.
    Time(DateTime<Utc>),
    /// Ordered sequence of values.
    List(ListRef),
    /// Keyed record with an optional base chain.
    Record(RecordRef),
    /// Callable. Copied by handle, never recursed.
    Func(NativeFn),
    /// Host-defined value with no structural interpretation.
    Opaque(Rc<dyn Any>),
}

impl Value {
    /// Wrap a vector of values in a fresh list handle.
    pub fn list(items: Vec<Value>) -> Self {
        Self::List(Rc::new(RefCell::new(items)))
    }

    /// Wrap a record in a fresh handle.
    pub fn record(record: Record) -> Self {
        Self::Record(record.into_ref())
    }

    /// Wrap a string-like value.
    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// Wrap a closure as a callable value.
    pub fn func(f: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self::Func(Rc::new(f))
    }

    /// The address of the shared allocation behind this value, if any.
    ///
    /// Scalars have no identity and return `None`. Two handle-backed values
    /// alias the same structure iff their identities are equal; this is the
    /// notion of "same reference" the merge engine's visited set tracks.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Self::List(l) => Some(Rc::as_ptr(l) as usize),
            Self::Record(r) => Some(Rc::as_ptr(r) as usize),
            Self::Func(f) => Some(Rc::as_ptr(f) as *const () as usize),
            Self::Opaque(o) => Some(Rc::as_ptr(o) as *const () as usize),
            _ => None,
        }
    }

    /// Returns `true` if both values are handles to the same allocation.
    ///
    /// Always `false` for scalars, even equal ones.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Returns `true` if this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The record handle, if this value is a record.
    pub fn as_record(&self) -> Option<&RecordRef> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// The list handle, if this value is a list.
    pub fn as_list(&self) -> Option<&ListRef> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// A short name for the value's kind, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Time(_) => "time",
            Self::List(_) => "list",
            Self::Record(_) => "record",
            Self::Func(_) => "function",
            Self::Opaque(_) => "opaque",
        }
    }
}

/// Structural equality.
///
/// Scalars compare by value, lists element-wise, records by own entries
/// (base chains are not consulted). Callables and opaque values compare by
/// handle identity. Not safe on cyclic graphs; the merge engine never
/// produces those comparisons itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::List(a), Self::List(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Record(a), Self::Record(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Func(_), Self::Func(_)) | (Self::Opaque(_), Self::Opaque(_)) => {
                self.identity() == other.identity()
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Int(i) => write!(f, "Int({i})"),
            Self::Float(x) => write!(f, "Float({x})"),
            Self::Str(s) => write!(f, "Str({s:?})"),
            Self::Time(t) => write!(f, "Time({t})"),
            Self::List(l) => write!(f, "List({:?})", l.borrow()),
            Self::Record(r) => write!(f, "Record({:?})", r.borrow()),
            Self::Func(_) => f.write_str("Func(..)"),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_have_no_identity() {
        assert_eq!(Value::Null.identity(), None);
        assert_eq!(Value::Int(7).identity(), None);
        assert_eq!(Value::str("x").identity(), None);
    }

    #[test]
    fn cloned_handles_share_identity() {
        let list = Value::list(vec![Value::Int(1)]);
        let alias = list.clone();
        assert!(list.ptr_eq(&alias));
        assert_eq!(list.identity(), alias.identity());
    }

    #[test]
    fn distinct_allocations_differ_in_identity() {
        let a = Value::list(vec![Value::Int(1)]);
        let b = Value::list(vec![Value::Int(1)]);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b); // structurally equal all the same
    }

    #[test]
    fn equal_scalars_are_never_ptr_eq() {
        assert!(!Value::Int(3).ptr_eq(&Value::Int(3)));
    }

    #[test]
    fn structural_equality_ignores_allocation() {
        let a = Value::record({
            let mut r = Record::new();
            r.set("k", Value::Int(1));
            r
        });
        let b = Value::record({
            let mut r = Record::new();
            r.set("k", Value::Int(1));
            r
        });
        assert_eq!(a, b);
    }

    #[test]
    fn functions_compare_by_identity() {
        let f = Value::func(|_| Value::Null);
        let g = Value::func(|_| Value::Null);
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
    }
}
