//! Error types for value conversions.

use thiserror::Error;

/// Errors produced by value conversion operations.
///
/// The merge engine itself never fails; fallibility in this crate is
/// confined to the JSON interop in [`crate::json`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The value kind has no JSON representation (functions, opaque host
    /// values, non-finite floats).
    #[error("cannot represent {kind} value as JSON")]
    Unrepresentable { kind: &'static str },

    /// The value graph contains a cycle along the current path.
    #[error("cyclic value cannot be converted to JSON")]
    CyclicValue,
}

/// Convenience alias for conversion results.
pub type ValueResult<T> = Result<T, ValueError>;
