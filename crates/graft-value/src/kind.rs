//! Container-kind classification.
//!
//! The merge engine decides per value whether to recurse, rebuild, or copy
//! directly. Only two kinds are structural: ordered sequences (rebuilt
//! element-wise) and plain records (eligible for deep recursion).
//! Everything else is a scalar and is copied by value or by handle —
//! deliberately including timestamps, callables, and opaque host values,
//! which carry runtime state a structural traversal would corrupt.

use std::fmt;

use crate::value::Value;

/// The classification the merge engine keys its recursion decisions on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// An ordered, indexed sequence ([`Value::List`]).
    Sequence,
    /// A plain keyed record ([`Value::Record`]).
    Record,
    /// Anything else: copied by value or handle, never recursed.
    Scalar,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence => f.write_str("sequence"),
            Self::Record => f.write_str("record"),
            Self::Scalar => f.write_str("scalar"),
        }
    }
}

impl Value {
    /// Classify this value for the merge engine.
    pub fn kind(&self) -> Kind {
        match self {
            Self::List(_) => Kind::Sequence,
            Self::Record(_) => Kind::Record,
            _ => Kind::Scalar,
        }
    }
}
