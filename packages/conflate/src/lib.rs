#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Conflation: deciding whether an incoming address duplicates one
//! already in the corpus.
//!
//! The spatial store supplies nearby [`Candidate`]s; [`compare`] applies
//! the match predicate (identical tokenized street name, identical
//! coordinates) and emits a [`Directive`]: create the record, or merge
//! it into the first matching candidate. The predicate is deliberately
//! exact — a coordinate off by any nonzero amount is a new record, so
//! imprecise sources can never silently corrupt an existing entry.
//!
//! [`MemoryStore`] is an R-tree-backed [`CandidateStore`] for tests and
//! in-process runs; production runs plug a persistent spatial store into
//! the same trait.

pub mod compare;
pub mod store;

pub use compare::{Candidate, Directive, compare};
pub use store::{CandidateStore, MemoryStore, SEARCH_RADIUS_DEG};
