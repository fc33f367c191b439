#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Partitioned execution of the address intake pipeline.
//!
//! Input lines are distributed across N workers by ordinal position:
//! line `i` always belongs to worker `i % N`. Partitions are disjoint
//! and deterministic, so workers need no coordination and each worker's
//! output preserves its partition's input order. Across workers no
//! relative ordering is guaranteed; callers concatenate or interleave
//! the per-worker outputs as their consumer requires.
//!
//! Each worker runs the full intake for its lines: parse, synonym
//! expansion, tokenization, and conflation against the shared candidate
//! store, emitting one directive per surviving record. Cancellation is
//! graceful: feeding stops, every already-buffered line is still
//! processed, and each worker acknowledges before exit.

pub mod worker;

use std::sync::Arc;
use std::sync::atomic::AtomicI64;

use address_itp_conflate::CandidateStore;
use address_itp_feature::Context;
use address_itp_post::PostOpts;
use address_itp_tokenize::{ReplacementTable, ReplacerError};
use futures::future;
use tokio::sync::{mpsc, watch};

/// Lines buffered per worker before the feeder blocks.
const CHANNEL_DEPTH: usize = 256;

/// Errors that abort a whole run.
///
/// Everything per-record is warned and skipped inside the workers; only
/// configuration-time failures surface here.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The replacement-table source was unusable.
    #[error("replacer configuration: {0}")]
    Config(#[from] ReplacerError),

    /// A worker task panicked.
    #[error("worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// The configuration surface consumed by the core.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Language tags resolved into the replacement table.
    pub languages: Vec<String>,

    /// Country/region the batch belongs to.
    pub context: Context,

    /// Emit resolved intersection properties in post-processing.
    pub intersections: bool,

    /// Per-address properties promoted onto output features.
    pub props: Vec<String>,

    /// Emit per-record warnings for malformed input.
    pub warn: bool,

    /// Number of partitions. Clamped to at least 1.
    pub workers: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            context: Context::default(),
            intersections: false,
            props: Vec::new(),
            warn: true,
            workers: 1,
        }
    }
}

impl RunConfig {
    /// Post-processing options for one worker of this run.
    #[must_use]
    pub fn post_opts(&self, worker_id: u64) -> PostOpts {
        let mut opts = PostOpts::new(worker_id, self.workers.max(1) as u64);
        opts.intersections = self.intersections;
        opts.props = self.props.clone();
        opts.warn = self.warn;
        opts
    }
}

/// The worker owning an input line.
#[must_use]
pub const fn partition(line_index: usize, worker_count: usize) -> usize {
    line_index % worker_count
}

/// A configured run over a shared candidate store.
pub struct Runner<S> {
    table: Arc<ReplacementTable>,
    context: Context,
    warn: bool,
    workers: usize,
    store: Arc<std::sync::Mutex<S>>,
    ids: Arc<AtomicI64>,
}

impl<S> Runner<S>
where
    S: CandidateStore + Send + 'static,
{
    /// Builds the replacement table and wraps the store for sharing.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] when the replacement table cannot
    /// be built; no run can proceed without it.
    pub fn new(config: &RunConfig, store: S) -> Result<Self, RunnerError> {
        let table = ReplacementTable::for_languages(&config.languages)?;

        Ok(Self {
            table: Arc::new(table),
            context: config.context.clone(),
            warn: config.warn,
            workers: config.workers.max(1),
            store: Arc::new(std::sync::Mutex::new(store)),
            ids: Arc::new(AtomicI64::new(1)),
        })
    }

    /// Access to the store once the run is over, for callers that want
    /// to inspect or persist the final corpus.
    #[must_use]
    pub fn store(&self) -> Arc<std::sync::Mutex<S>> {
        Arc::clone(&self.store)
    }

    /// Processes every line, returning each worker's output lines in
    /// partition order.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Join`] if a worker task panics.
    pub async fn run(&self, lines: Vec<String>) -> Result<Vec<Vec<String>>, RunnerError> {
        let (_cancel_tx, cancel_rx) = watch::channel(false);
        self.run_with_cancel(lines, cancel_rx).await
    }

    /// Like [`Runner::run`], stopping early when `cancel` flips to
    /// `true`: no further lines are fed, but every line already
    /// buffered to a worker is still processed and emitted complete.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Join`] if a worker task panics.
    pub async fn run_with_cancel(
        &self,
        lines: Vec<String>,
        cancel: watch::Receiver<bool>,
    ) -> Result<Vec<Vec<String>>, RunnerError> {
        let mut senders: Vec<mpsc::Sender<String>> = Vec::with_capacity(self.workers);
        let mut handles = Vec::with_capacity(self.workers);

        for worker_id in 0..self.workers {
            let (tx, rx) = mpsc::channel::<String>(CHANNEL_DEPTH);
            senders.push(tx);

            let env = worker::WorkerEnv {
                worker_id,
                table: Arc::clone(&self.table),
                context: self.context.clone(),
                warn: self.warn,
                store: Arc::clone(&self.store),
                ids: Arc::clone(&self.ids),
            };

            handles.push(tokio::spawn(worker::run(env, rx)));
        }

        for (index, line) in lines.into_iter().enumerate() {
            if *cancel.borrow() {
                log::info!("cancellation requested, draining buffered input");
                break;
            }

            let target = partition(index, self.workers);
            if senders[target].send(line).await.is_err() {
                break;
            }
        }

        // Closing the channels lets each worker drain its buffer and
        // acknowledge.
        drop(senders);

        let outputs = future::try_join_all(handles).await?;
        Ok(outputs)
    }
}
