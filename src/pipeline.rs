//! src/pipeline.rs
use crate::error::PipelineError;
use crate::mapper::MapperPool;
use crate::ranker::{rank, RankedEntry};
use crate::reducer::ReducerPool;
use crate::shuffler::shuffle;
use crate::tokenizer::tokenize;
use uuid::Uuid;

/// Fan-out/fan-in word-frequency pipeline: tokenize, map in parallel,
/// shuffle sequentially, reduce in parallel, rank. Each stage completes
/// before the next begins; every intermediate is created and consumed
/// within a single call to [`Pipeline::run`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    mappers: MapperPool,
    reducers: ReducerPool,
}

impl Pipeline {
    pub fn new(workers: usize) -> Self {
        Pipeline {
            mappers: MapperPool::new(workers),
            reducers: ReducerPool::new(workers),
        }
    }

    pub fn with_available_parallelism() -> Self {
        Pipeline {
            mappers: MapperPool::with_available_parallelism(),
            reducers: ReducerPool::with_available_parallelism(),
        }
    }

    #[tracing::instrument(
        name = "Run word frequency pipeline",
        skip(self, text),
        fields(run_id = %Uuid::new_v4(), text_bytes = text.len(), top_n)
    )]
    pub async fn run(&self, text: &str, top_n: usize) -> Result<Vec<RankedEntry>, PipelineError> {
        if top_n == 0 {
            return Err(PipelineError::InvalidTopN(top_n));
        }
        let tokens = tokenize(text);
        tracing::debug!("Tokenized input into {} tokens", tokens.len());
        let mapped = self.mappers.map(tokens).await?;
        let grouped = shuffle(mapped);
        let reduced = self.reducers.reduce(grouped).await?;
        Ok(rank(reduced, top_n))
    }
}

/// Single call surface over the whole pipeline, using the hardware-derived
/// default worker count.
pub async fn top_words(text: &str, top_n: usize) -> Result<Vec<RankedEntry>, PipelineError> {
    Pipeline::with_available_parallelism().run(text, top_n).await
}
