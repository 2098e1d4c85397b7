//! Tweetgraph - topic clusters and interaction networks for a post corpus
//!
//! Loads a corpus file, clusters the posts by text and reports mention,
//! retweet, quote and hashtag networks plus tie/triad counts for the whole
//! corpus and for every cluster.

mod config;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tweetgraph_analysis::{corpus, CorpusAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "tweetgraph", version, about)]
struct Cli {
    /// Corpus file (JSON array or JSON Lines of post records)
    #[arg(short, long)]
    corpus: PathBuf,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of clusters
    #[arg(short = 'k', long)]
    clusters: Option<usize>,

    /// Fixed clustering seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write the full analysis as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the first records of the corpus to this file
    #[arg(long)]
    write_sample: Option<PathBuf>,

    /// Records kept by --write-sample
    #[arg(long, default_value_t = 2000)]
    sample_size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let (mut analysis_config, config_path) =
        config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    info!("Configuration loaded from {}", config_path.display());

    if let Some(clusters) = cli.clusters {
        analysis_config.number_of_clusters = clusters;
    }
    if cli.seed.is_some() {
        analysis_config.seed = cli.seed;
    }

    let records = corpus::load_records(&cli.corpus)
        .with_context(|| format!("Failed to load corpus {}", cli.corpus.display()))?;

    if let Some(path) = &cli.write_sample {
        corpus::save_records(path, corpus::sample(&records, cli.sample_size))
            .context("Failed to write corpus sample")?;
    }

    let analyzer = CorpusAnalyzer::new(analysis_config);
    let analysis = analyzer
        .analyze(&records)
        .context("Corpus analysis failed")?;

    let text = report::render(&analysis).context("Failed to render report")?;
    print!("{}", text);

    if let Some(path) = &cli.json {
        let json = serde_json::to_string_pretty(&analysis).context("Failed to serialize analysis")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Analysis written to {}", path.display());
    }

    Ok(())
}
