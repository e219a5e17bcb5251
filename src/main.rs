use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use corpus_cleaner::app::clean_corpus_use_case::CleanCorpusUseCase;
use corpus_cleaner::app::corpus_stats_use_case::CorpusStatsUseCase;
use corpus_cleaner::config::Config;
use corpus_cleaner::constants;
use corpus_cleaner::infra::FsCorpusAdapter;
use corpus_cleaner::{logging, observability};

#[derive(Parser)]
#[command(name = "corpus_cleaner")]
#[command(about = "Normalize raw text into a clean language-modeling corpus")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults to ./corpus_cleaner.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging, including per-stage traces
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a raw corpus file and write the cleaned corpus
    Clean {
        /// Raw corpus file (defaults to <base_dir>/<raw_dir>/<corpus_file>)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Cleaned corpus file (defaults to <base_dir>/<clean_dir>/<corpus_file>)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print recorded metrics in Prometheus text format after the run
        #[arg(long)]
        print_metrics: bool,
    },
    /// Summarize a corpus as whitespace-separated words
    Stats {
        /// Corpus file (defaults to the cleaned corpus path)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Number of most frequent words to list
        #[arg(long, default_value_t = constants::DEFAULT_TOP_WORDS)]
        top: usize,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let _log_guard = logging::init_logging(&config.logging, cli.verbose);

    match cli.command {
        Commands::Clean {
            input,
            output,
            print_metrics,
        } => {
            if print_metrics {
                observability::init();
            }

            let input = input.unwrap_or_else(|| config.paths.input_path());
            let output = output.unwrap_or_else(|| config.paths.output_path());
            info!(input = %input.display(), output = %output.display(), "Cleaning corpus");

            let adapter = FsCorpusAdapter::new(config.output.create_parent_dirs);
            let use_case =
                CleanCorpusUseCase::with_default_normalizer(Box::new(adapter.clone()), Box::new(adapter));
            let report = use_case
                .run(&input, &output)
                .context("Corpus cleaning failed")?;

            println!("Cleaned corpus written to {}", report.output_path.display());
            println!("   Input bytes:  {}", report.input_bytes);
            println!("   Output bytes: {}", report.output_bytes);
            println!("   Words:        {}", report.token_count);

            if let Some(rendered) = observability::render() {
                println!();
                print!("{}", rendered);
            }
        }
        Commands::Stats { input, top, json } => {
            let input = input.unwrap_or_else(|| config.paths.output_path());
            let use_case = CorpusStatsUseCase::new(Box::new(FsCorpusAdapter::default()));
            let summary = use_case
                .summarize(&input, top)
                .context("Corpus summary failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Corpus: {}", input.display());
                println!("   Words:      {}", summary.token_count);
                println!("   Vocabulary: {}", summary.vocabulary_size);
                for entry in &summary.most_frequent {
                    println!("   {:>10}  {}", entry.count, entry.word);
                }
            }
        }
    }

    Ok(())
}
