#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared data model for the address interpolation pipeline.
//!
//! This crate contains only data types and the invariants they enforce.
//! It has no heavyweight dependencies (no geometry engine, no I/O):
//!
//! - [`Name`] / [`Names`]: display forms of a street name, ranked by
//!   priority. [`Names::finalize`] enforces the "unique primary variant"
//!   invariant every downstream consumer relies on.
//! - [`Context`]: the country/region a batch of records belongs to.
//! - [`AddressRecord`]: one address point parsed from a GeoJSON Feature
//!   line, validated for the required house number.

pub mod address;
pub mod context;
pub mod name;

pub use address::{AddressRecord, RecordError};
pub use context::Context;
pub use name::{Name, Names};
