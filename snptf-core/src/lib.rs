//! # Core models for SNP-driven motif changes
//!
//! This crate holds the small set of value types shared by the scanning and
//! prediction crates: motif hits, variants, sequence windows and the
//! strand/effect tags attached to every reported motif change. It also
//! exposes the nucleotide helpers (reverse complement) and the error type
//! used across the workspace.
//!
pub mod consts;
pub mod errors;
pub mod models;
pub mod seq;

// re-export for cleaner imports
pub use consts::*;
pub use errors::*;
pub use models::*;
pub use seq::*;
