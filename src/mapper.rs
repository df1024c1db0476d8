//! src/mapper.rs
use crate::error::PipelineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedPair {
    word: String,
    count: u64,
}

impl MappedPair {
    pub fn new(word: String) -> Self {
        MappedPair { word, count: 1 }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn into_parts(self) -> (String, u64) {
        (self.word, self.count)
    }
}

/// Fan-out stage that turns every token into a `(word, 1)` pair across a
/// bounded set of workers. The order of the returned pairs relative to the
/// input is unspecified; downstream stages must not rely on it.
#[derive(Debug, Clone)]
pub struct MapperPool {
    workers: usize,
}

impl MapperPool {
    pub fn new(workers: usize) -> Self {
        MapperPool {
            workers: workers.max(1),
        }
    }

    pub fn with_available_parallelism() -> Self {
        Self::new(available_parallelism())
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    #[tracing::instrument(name = "Map tokens", skip_all, fields(tokens = tokens.len(), workers = self.workers))]
    pub async fn map(&self, tokens: Vec<String>) -> Result<Vec<MappedPair>, PipelineError> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }
        let chunk_size = tokens.len().div_ceil(self.workers);
        let mut handles = Vec::with_capacity(self.workers);
        let mut remaining = tokens;
        while !remaining.is_empty() {
            let tail = remaining.split_off(chunk_size.min(remaining.len()));
            let chunk = std::mem::replace(&mut remaining, tail);
            handles.push(tokio::spawn(async move {
                chunk.into_iter().map(MappedPair::new).collect::<Vec<_>>()
            }));
        }

        // Wait for all mappers before the shuffle starts
        let mut pairs = Vec::new();
        for handle in handles {
            let mapped = handle
                .await
                .map_err(|e| PipelineError::WorkerFailure(e.into()))?;
            pairs.extend(mapped);
        }
        Ok(pairs)
    }
}

pub(crate) fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
