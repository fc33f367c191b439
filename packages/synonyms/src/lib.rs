#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Jurisdiction-aware synonym expansion for street names.
//!
//! Given a feature's raw display names and the country/region the batch
//! belongs to, [`expand`] produces the full ranked variant list the rest
//! of the pipeline matches and labels against:
//!
//! - highway designations are recognized in their many surface forms
//!   ("US 81", "U.S. Route 81", "NB-101", "King's Highway 7") and
//!   expanded to every display convention of the jurisdiction;
//! - numeric street names gain ordinal-suffix and written-number forms
//!   ("5 Avenue" -> "5th Avenue", "Twenty-First St" -> "21st St");
//! - names matching a disallowed pattern (drive-throughs) reject the
//!   whole feature.
//!
//! The [`policy`] module carries the feature-level intake rules that are
//! decided alongside naming: degenerate network geometries and road
//! classes that may not go unnamed.

pub mod expand;
pub mod highway;
pub mod numeric;
pub mod policy;
pub mod regions;

pub use expand::expand;
