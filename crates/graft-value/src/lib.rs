//! Dynamic value model for graft.
//!
//! This crate provides the data model the merge engine operates on: a
//! dynamically typed [`Value`] with shared-handle containers, a keyed
//! [`Record`] structure with an optional base (prototype) link, and the
//! container-kind classifier that decides what the engine may recurse into.
//!
//! # Key Types
//!
//! - [`Value`] — Dynamically typed value (scalars, lists, records, callables)
//! - [`Record`] — String-keyed structure with an optional base chain
//! - [`RecordRef`] / [`ListRef`] / [`NativeFn`] — Shared container handles
//! - [`Kind`] — Container-kind classification (sequence, record, scalar)
//! - [`ValueError`] — Conversion failures (JSON interop)

pub mod error;
pub mod json;
pub mod kind;
pub mod record;
pub mod value;

pub use error::{ValueError, ValueResult};
pub use kind::Kind;
pub use record::{Record, RecordRef};
pub use value::{ListRef, NativeFn, Value};
