//! src/main.rs
use anyhow::Context;
use clap::Parser;
use wordfreq::configuration::get_configuration;
use wordfreq::pipeline::Pipeline;
use wordfreq::provider::{HttpTextProvider, TextProvider};
use wordfreq::render::{ConsoleChart, ResultsConsumer};
use wordfreq::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "wordfreq", about = "Parallel map-reduce word frequency counter")]
struct Cli {
    /// Fetch the text from this URL instead of the configured one
    #[arg(long)]
    url: Option<String>,
    /// How many of the most frequent words to display
    #[arg(long)]
    top_n: Option<usize>,
    /// Worker count for the map and reduce stages
    #[arg(long)]
    workers: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("wordfreq")?;
    let cli = Cli::parse();
    let mut configuration = get_configuration().context("Failed to read configuration.")?;
    if let Some(url) = cli.url {
        configuration.source.url = url;
    }
    if let Some(top_n) = cli.top_n {
        configuration.pipeline.top_n = top_n;
    }
    if let Some(workers) = cli.workers {
        configuration.pipeline.workers = Some(workers);
    }

    let provider = HttpTextProvider::new(&configuration.source.url, configuration.source.timeout())
        .context("Failed to build the text provider")?;
    let text = provider
        .fetch()
        .await
        .context("Nothing to count: the input text could not be fetched")?;

    let pipeline = match configuration.pipeline.workers {
        Some(workers) => Pipeline::new(workers),
        None => Pipeline::with_available_parallelism(),
    };
    let ranked = pipeline.run(&text, configuration.pipeline.top_n).await?;

    ConsoleChart::default().present(&ranked)
}
