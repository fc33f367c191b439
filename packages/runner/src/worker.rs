//! One worker's intake loop over its partition of the input.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use address_itp_conflate::{Candidate, CandidateStore, Directive, compare};
use address_itp_feature::{AddressRecord, Context};
use address_itp_synonyms::expand;
use address_itp_tokenize::{ReplacementTable, tokenize};
use serde_json::Value;
use tokio::sync::mpsc;

/// Everything a worker task needs, cloned per worker.
pub struct WorkerEnv<S> {
    pub worker_id: usize,
    pub table: Arc<ReplacementTable>,
    pub context: Context,
    pub warn: bool,
    pub store: Arc<std::sync::Mutex<S>>,
    pub ids: Arc<AtomicI64>,
}

/// Consumes the worker's input channel until it closes, returning the
/// emitted directive lines in input order.
///
/// The channel closing is the termination signal: whatever the feeder
/// already buffered is still processed before the worker acknowledges
/// and exits.
pub async fn run<S>(env: WorkerEnv<S>, mut rx: mpsc::Receiver<String>) -> Vec<String>
where
    S: CandidateStore + Send,
{
    let mut output = Vec::new();
    let mut seen: u64 = 0;

    while let Some(line) = rx.recv().await {
        seen += 1;
        if let Some(emitted) = process_line(&env, &line) {
            output.push(emitted);
        }
    }

    log::info!(
        "worker {} done: {} of {seen} records emitted",
        env.worker_id,
        output.len()
    );

    output
}

/// Runs one line through intake: parse, expand, tokenize, conflate.
///
/// Returns the serialized directive, or `None` when the line is skipped
/// (malformed input warns; policy rejections drop silently).
fn process_line<S>(env: &WorkerEnv<S>, line: &str) -> Option<String>
where
    S: CandidateStore + Send,
{
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(err) => {
            if env.warn {
                log::warn!("worker {}: skipping unparsable line: {err}", env.worker_id);
            }
            return None;
        }
    };

    let mut record = match AddressRecord::from_feature(&value) {
        Ok(record) => record,
        Err(err) => {
            if env.warn {
                log::warn!("worker {}: skipping record: {err}", env.worker_id);
            }
            return None;
        }
    };

    record.names = expand(std::mem::take(&mut record.names), &env.context)?;

    for name in &mut record.names.names {
        name.tokenized = Some(tokenize(&name.display, &env.table).join(" "));
    }

    let directive = {
        let store = env.store.lock().ok()?;
        let candidates = store.query(record.point);
        compare(&record, &candidates, &env.table)
    };

    if matches!(directive, Directive::Create { .. }) {
        let candidate = Candidate {
            id: env.ids.fetch_add(1, Ordering::Relaxed),
            names: record.names.clone(),
            point: record.point,
            feature: record.to_feature(),
        };

        if let Ok(mut store) = env.store.lock() {
            store.append(candidate);
        }
    }

    serde_json::to_string(&directive).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use address_itp_conflate::MemoryStore;
    use serde_json::json;

    fn env() -> WorkerEnv<MemoryStore> {
        WorkerEnv {
            worker_id: 0,
            table: Arc::new(
                ReplacementTable::for_languages(&["en".to_string()]).unwrap(),
            ),
            context: Context::new(Some("us"), None),
            warn: false,
            store: Arc::new(std::sync::Mutex::new(MemoryStore::new())),
            ids: Arc::new(AtomicI64::new(1)),
        }
    }

    #[test]
    fn emits_a_create_for_a_new_record() {
        let env = env();
        let emitted = process_line(
            &env,
            &json!({
                "type": "Feature",
                "properties": { "number": "4", "street": "Main Street", "source": "test" },
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
            })
            .to_string(),
        )
        .unwrap();

        let value: Value = serde_json::from_str(&emitted).unwrap();
        assert_eq!(value["action"], json!("create"));

        // The record entered the corpus with its names tokenized.
        let store = env.store.lock().unwrap();
        let stored = store.query([0.0, 0.0]);
        assert_eq!(stored.len(), 1);
        assert_eq!(
            stored[0].names.names[0].tokenized.as_deref(),
            Some("main st")
        );
    }

    #[test]
    fn empty_lines_are_skipped() {
        assert!(process_line(&env(), "").is_none());
        assert!(process_line(&env(), "   ").is_none());
    }

    #[test]
    fn synonym_variants_are_tokenized_for_matching() {
        let env = env();
        process_line(
            &env,
            &json!({
                "type": "Feature",
                "properties": { "number": "4", "street": "US 81", "source": "test" },
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
            })
            .to_string(),
        )
        .unwrap();

        let store = env.store.lock().unwrap();
        let stored = store.query([0.0, 0.0]);
        let tokenized: Vec<&str> = stored[0]
            .names
            .names
            .iter()
            .filter_map(|name| name.tokenized.as_deref())
            .collect();

        assert!(tokenized.contains(&"us rte 81"));
        assert!(tokenized.contains(&"us hwy 81"));
    }
}
