use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use parley::analysis::aggregate;
use parley::config::{parse_delimiter, parse_top_words, Config};
use parley::dataset::load_messages;
use parley::output::{json, terminal, ReportFormat};
use parley::text::{Normalizer, StopWordSource, StopWords};
use parley::topics::TopicTable;

/// Parley: word and topic statistics for exported message datasets.
///
/// Reads the message column of a CSV file and reports message volume, the
/// most frequent words, and how many messages touch each configured topic.
#[derive(Parser)]
#[command(name = "parley", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the message column of a delimited file
    Analyze(AnalyzeArgs),

    /// Show the topic table and which keywords can never match
    Topics {
        /// JSON topic file (defaults to PARLEY_TOPICS_FILE or the built-in table)
        #[arg(long)]
        topics: Option<PathBuf>,
    },

    /// Show the tokens a single message normalizes to
    Tokens {
        /// The message text
        text: String,

        /// Stop-word list: nltk, iso, or a path to a word list
        #[arg(long)]
        stopwords: Option<StopWordSource>,
    },
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Delimited file to analyze (overrides INPUT_CSV_FILE)
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Column holding the message text (overrides MESSAGE_COLUMN)
    #[arg(long, short)]
    column: Option<String>,

    /// JSON topic file (overrides PARLEY_TOPICS_FILE)
    #[arg(long)]
    topics: Option<PathBuf>,

    /// Stop-word list: nltk, iso, or a path to a word list
    #[arg(long)]
    stopwords: Option<StopWordSource>,

    /// Field delimiter, e.g. ";" or "tab" (overrides PARLEY_DELIMITER)
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<u8>,

    /// Number of most frequent words to report (overrides PARLEY_TOP_WORDS)
    #[arg(long, value_parser = parse_top_words)]
    top: Option<usize>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

impl AnalyzeArgs {
    /// Layer the CLI flags over the environment configuration.
    fn apply(self, config: &mut Config) -> ReportFormat {
        if let Some(file) = self.file {
            config.input_file = file;
        }
        if let Some(column) = self.column {
            config.message_column = column;
        }
        if let Some(topics) = self.topics {
            config.topics_file = Some(topics);
        }
        if let Some(stopwords) = self.stopwords {
            config.stopwords = stopwords;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(top) = self.top {
            config.top_words = top;
        }
        self.format
    }
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("parley=info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze(args) => {
            info!("Starting message analysis...");

            let mut config = Config::load().context("Invalid configuration")?;
            let format = args.apply(&mut config);

            let table = config
                .topic_table()
                .context("Failed to load topic table")?;
            let stop_words = StopWords::load(&config.stopwords)
                .context("Failed to initialize language resources")?;
            let normalizer = Normalizer::new(stop_words);

            let dataset = load_messages(
                &config.input_file,
                &config.message_column,
                config.delimiter,
            )
            .context("Failed to load data")?;

            let report = aggregate(dataset.messages(), &normalizer, &table, config.top_words)
                .context("Failed to analyze messages")?;

            match format {
                ReportFormat::Text => terminal::display_report(&report),
                ReportFormat::Json => json::display_report(&report)?,
            }

            info!("Message analysis complete.");
        }

        Commands::Topics { topics } => {
            let table = match topics {
                Some(path) => TopicTable::load(&path),
                None => Config::load()?.topic_table(),
            }
            .context("Failed to load topic table")?;
            terminal::display_topic_table(&table);
        }

        Commands::Tokens { text, stopwords } => {
            let source = match stopwords {
                Some(source) => source,
                None => Config::load()?.stopwords,
            };
            let stop_words =
                StopWords::load(&source).context("Failed to initialize language resources")?;
            let tokens = Normalizer::new(stop_words).normalize_text(&text);
            terminal::display_tokens(&text, &tokens);
        }
    }

    Ok(())
}
