//! Utility surface for graft.
//!
//! Small collaborators that sit beside the merge engine without touching
//! it: randomized identifier tokens and partial application of callables
//! hosted in the value model.
//!
//! # Key Functions
//!
//! - [`new_identifier`] — Randomized hyphenated hex token (UUID v4)
//! - [`bind_with_args`] / [`bind_value`] — Fix leading call arguments

pub mod bind;
pub mod ident;

pub use bind::{bind_value, bind_with_args};
pub use ident::new_identifier;
