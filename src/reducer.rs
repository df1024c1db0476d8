//! src/reducer.rs
use crate::error::PipelineError;
use crate::shuffler::GroupedEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedEntry {
    word: String,
    total: u64,
}

impl ReducedEntry {
    pub fn new(word: String, total: u64) -> Self {
        ReducedEntry { word, total }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn into_parts(self) -> (String, u64) {
        (self.word, self.total)
    }
}

/// Fan-out stage that folds each word's counts into a single total across a
/// bounded set of workers. Reductions are independent of each other, so the
/// workers share no state; output order is unspecified.
#[derive(Debug, Clone)]
pub struct ReducerPool {
    workers: usize,
}

impl ReducerPool {
    pub fn new(workers: usize) -> Self {
        ReducerPool {
            workers: workers.max(1),
        }
    }

    pub fn with_available_parallelism() -> Self {
        Self::new(crate::mapper::available_parallelism())
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    #[tracing::instrument(name = "Reduce grouped entries", skip_all, fields(groups = entries.len(), workers = self.workers))]
    pub async fn reduce(
        &self,
        entries: Vec<GroupedEntry>,
    ) -> Result<Vec<ReducedEntry>, PipelineError> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }
        let chunk_size = entries.len().div_ceil(self.workers);
        let mut handles = Vec::with_capacity(self.workers);
        let mut remaining = entries;
        while !remaining.is_empty() {
            let tail = remaining.split_off(chunk_size.min(remaining.len()));
            let chunk = std::mem::replace(&mut remaining, tail);
            handles.push(tokio::spawn(async move {
                chunk
                    .into_iter()
                    .map(|entry| {
                        let (word, counts) = entry.into_parts();
                        ReducedEntry::new(word, counts.iter().sum())
                    })
                    .collect::<Vec<_>>()
            }));
        }

        // Wait for all reducers before ranking starts
        let mut reduced = Vec::new();
        for handle in handles {
            let totals = handle
                .await
                .map_err(|e| PipelineError::WorkerFailure(e.into()))?;
            reduced.extend(totals);
        }
        Ok(reduced)
    }
}
