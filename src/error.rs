//! src/error.rs

#[derive(thiserror::Error)]
pub enum PipelineError {
    #[error("The input text was unavailable")]
    InputUnavailable(#[source] anyhow::Error),
    #[error("top_n must be at least 1, got {0}")]
    InvalidTopN(usize),
    #[error("A worker task failed")]
    WorkerFailure(#[source] anyhow::Error),
}

impl std::fmt::Debug for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
