#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Post-processing pipeline from internal working features to the
//! final output schema.
//!
//! [`Pipeline::feat`] threads a feature through a fixed ordered list of
//! pure steps, each `fn(Feature, &PostOpts) -> Option<Feature>`. `None`
//! drops the feature from output. The order is load-bearing and must
//! not be permuted by callers:
//!
//! 1. [`intersections`] — resolve or strip `carmen:intersections`
//! 2. [`id`] — assign a partition-unique numeric feature id
//! 3. [`text`] — label, dedupe and truncate every `carmen:text*`
//! 4. [`dedupe_address`] — drop repeated numbers with their coordinates
//! 5. [`sort`] — ascending numeric order per address sub-sequence
//! 6. [`centre`] — tile-validated representative point
//! 7. [`props`] — promote allow-listed per-address properties
//! 8. [`internal`] — strip `internal:*` keys; always last
//!
//! `text` must precede `props` (labeling reads the carrier `props`
//! removes); `dedupe_address` must precede `sort` and both must precede
//! `props` so the parallel arrays stay index-aligned; `internal` runs
//! last so every earlier step may still consult internal properties.
//! A step given a feature without its expected shape passes it through
//! unchanged rather than failing.

pub mod centre;
pub mod dedupe_address;
pub mod id;
pub mod internal;
pub mod intersections;
pub mod label;
pub mod props;
pub mod sort;
pub mod text;

use std::sync::atomic::{AtomicU64, Ordering};

use geojson::Feature;

/// One pipeline step. Returns the (possibly mutated) feature, or `None`
/// to drop it from output.
pub type Step = fn(Feature, &PostOpts) -> Option<Feature>;

/// Options shared by every step of one run.
pub struct PostOpts {
    /// Emit resolved `carmen:intersections` instead of stripping them.
    pub intersections: bool,

    /// Per-address properties to promote onto the output feature.
    pub props: Vec<String>,

    /// Emit per-record diagnostics for recoverable conditions.
    pub warn: bool,

    worker_id: u64,
    worker_count: u64,
    sequence: AtomicU64,
}

impl Default for PostOpts {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl PostOpts {
    /// Options for one worker of a partitioned run.
    ///
    /// # Panics
    ///
    /// Panics if `worker_id` is not below `worker_count`.
    #[must_use]
    pub fn new(worker_id: u64, worker_count: u64) -> Self {
        assert!(worker_id < worker_count, "worker id out of range");

        Self {
            intersections: false,
            props: Vec::new(),
            warn: true,
            worker_id,
            worker_count,
            sequence: AtomicU64::new(0),
        }
    }

    /// The next feature id for this worker.
    ///
    /// Ids are `worker_id + n * worker_count`, so concurrent partitions
    /// can never collide.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed);
        self.worker_id + n * self.worker_count
    }
}

/// The ordered chain of post-processing steps.
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// The fixed default step order. See the module docs for why the
    /// order matters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: vec![
                intersections::post,
                id::post,
                text::post,
                dedupe_address::post,
                sort::post,
                centre::post,
                props::post,
                internal::post,
            ],
        }
    }

    /// Runs a feature through every step in order.
    #[must_use]
    pub fn feat(&self, feature: Feature, opts: &PostOpts) -> Option<Feature> {
        let mut feature = feature;
        for step in &self.steps {
            feature = step(feature, opts)?;
        }
        Some(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Geometry, Value};
    use serde_json::json;

    fn working_feature() -> Feature {
        let mut feature = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::GeometryCollection(vec![
                Geometry::new(Value::MultiPoint(vec![
                    vec![-77.036_50, 38.895_10],
                    vec![-77.036_40, 38.895_20],
                    vec![-77.036_30, 38.895_30],
                ])),
            ]))),
            id: None,
            properties: Some(serde_json::Map::new()),
            foreign_members: None,
        };

        let props = feature.properties.as_mut().unwrap();
        props.insert(
            "carmen:text".into(),
            json!([
                { "display": "Main Street", "priority": 0, "tokenized": "main st" },
                { "display": "Main St", "priority": -1, "tokenized": "main st" }
            ]),
        );
        props.insert("carmen:addressnumber".into(), json!([[3, 1, 3]]));
        props.insert("internal:nid".into(), json!(9));

        feature
    }

    #[test]
    fn pipeline_produces_the_output_schema() {
        let pipeline = Pipeline::new();
        let out = pipeline.feat(working_feature(), &PostOpts::default()).unwrap();

        let props = out.properties.as_ref().unwrap();
        assert_eq!(props["carmen:text"], json!("Main Street"));
        assert_eq!(props["carmen:addressnumber"], json!([[1, 3]]));
        assert!(props.contains_key("carmen:center"));
        assert!(!props.keys().any(|key| key.starts_with("internal:")));
        assert!(out.id.is_some());
    }

    #[test]
    fn dropped_features_yield_none() {
        let mut feature = working_feature();
        feature
            .properties
            .as_mut()
            .unwrap()
            .insert("carmen:text".into(), json!([]));

        let pipeline = Pipeline::new();
        assert!(pipeline.feat(feature, &PostOpts::default()).is_none());
    }

    #[test]
    fn worker_ids_never_collide_across_partitions() {
        let a = PostOpts::new(0, 3);
        let b = PostOpts::new(1, 3);
        let c = PostOpts::new(2, 3);

        let mut seen = std::collections::BTreeSet::new();
        for opts in [&a, &b, &c] {
            for _ in 0..100 {
                assert!(seen.insert(opts.next_id()), "id collision");
            }
        }
    }
}
