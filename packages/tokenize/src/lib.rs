#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Street-name tokenization for the address interpolation pipeline.
//!
//! Tokenization is applied symmetrically to every name that enters the
//! system so that "Main St NW" and "MAIN STREET NORTHWEST" compare equal:
//!
//! - **Build time**: language-tagged abbreviation equivalence classes are
//!   compiled into a [`ReplacementTable`] mapping every variant spelling
//!   (diacritic-stripped, lowercased) to its canonical shortest form.
//! - **Run time**: [`tokenize`] normalizes a display string into a token
//!   sequence using the table; [`tokenize_complex`] additionally reports
//!   which tokens had no table entry at all ("tokenless"), which marks
//!   already-canonical input.
//!
//! The table is built once per run and read-only thereafter; there is no
//! process-wide replacer state.

pub mod diacritics;
pub mod languages;
pub mod replacer;
pub mod tokenizer;

pub use diacritics::diacritics;
pub use replacer::{ReplacementTable, ReplacerError};
pub use tokenizer::{Tokenized, tokenize, tokenize_complex};
