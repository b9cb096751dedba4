//! Modules generated from `testdata/` at build time.
//!
//! Compiling this crate checks that generated source builds against the
//! runtime; the tests check that it serves what was embedded.

pub mod fixture;

/// Source of the `assets` module, exactly as compiled
pub const GENERATED: &str = include_str!(concat!(env!("OUT_DIR"), "/assets.rs"));

include!(concat!(env!("OUT_DIR"), "/assets.rs"));
include!(concat!(env!("OUT_DIR"), "/private_assets.rs"));
