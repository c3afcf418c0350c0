//! Merge engine for graft.
//!
//! Combines the properties of one or more source records into a target
//! record, in place, and hands the same target handle back. One recursive
//! engine is parameterized by two independent axes — `deep` (recurse into
//! nested containers) and `inherited` (visit keys contributed by base
//! chains, not just keys declared on the source itself) — and the public
//! entry points are thin parameterizations of it:
//!
//! | Entry point       | deep  | inherited |
//! |-------------------|-------|-----------|
//! | [`assign`]        | true  | false     |
//! | [`mixin_deep`]    | true  | true      |
//! | [`mixin_shallow`] | false | true      |
//!
//! A visited set shared across one call tree guards against cyclic and
//! repeatedly-referenced sources, so merging terminates on any input.

pub mod engine;
pub mod sequence;

pub use engine::{assign, mixin_deep, mixin_shallow};
pub use sequence::copy_sequence;
