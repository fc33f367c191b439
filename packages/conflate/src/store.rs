//! The candidate-store seam and an in-memory implementation.

use rstar::{AABB, RTree, RTreeObject};

use crate::compare::Candidate;

/// Search envelope half-width in degrees for candidate queries.
pub const SEARCH_RADIUS_DEG: f64 = 0.01;

/// The spatial store boundary consumed by conflation.
///
/// Access is read/append-only: conflation queries candidates near an
/// incoming point and appends newly created records, it never rewrites
/// existing entries.
pub trait CandidateStore {
    /// Candidates near a point, nearest first.
    fn query(&self, point: [f64; 2]) -> Vec<Candidate>;

    /// Adds a record to the corpus.
    fn append(&mut self, candidate: Candidate);
}

/// A candidate stored in the R-tree keyed by its point.
struct StoredCandidate {
    candidate: Candidate,
}

impl RTreeObject for StoredCandidate {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.candidate.point)
    }
}

/// An append-only in-memory candidate store.
///
/// Backs tests and single-process runs; a persistent spatial store
/// replaces it behind the same trait for full imports.
#[derive(Default)]
pub struct MemoryStore {
    tree: RTree<StoredCandidate>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl CandidateStore for MemoryStore {
    /// Candidates within the search envelope of the point, ordered
    /// nearest first (ties by ascending id for determinism).
    fn query(&self, point: [f64; 2]) -> Vec<Candidate> {
        let envelope = AABB::from_corners(
            [point[0] - SEARCH_RADIUS_DEG, point[1] - SEARCH_RADIUS_DEG],
            [point[0] + SEARCH_RADIUS_DEG, point[1] + SEARCH_RADIUS_DEG],
        );

        let mut nearby: Vec<&Candidate> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|stored| &stored.candidate)
            .collect();

        nearby.sort_by(|a, b| {
            let da = distance_sq(a.point, point);
            let db = distance_sq(b.point, point);
            da.total_cmp(&db).then(a.id.cmp(&b.id))
        });

        nearby.into_iter().cloned().collect()
    }

    fn append(&mut self, candidate: Candidate) {
        self.tree.insert(StoredCandidate { candidate });
    }
}

fn distance_sq(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx.mul_add(dx, dy * dy)
}
