//! CLI for conjugo - conjugation page to JSON extractor

use clap::{Parser, Subcommand, ValueEnum};
use conjugo::render::{JsonRenderer, Renderer, TextRenderer};
use conjugo::{server, AppConfig, Conjugation, ConjugationConverter, ConjugationService};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to ./conjugo.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract conjugations from a saved HTML page
    Extract {
        /// Input HTML file path
        input: PathBuf,

        /// Word the page conjugates (empty output when omitted)
        #[arg(long)]
        word: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Fetch and extract the conjugation page of a word
    Search {
        /// Language code, e.g. fr
        lang: String,

        word: String,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Ask the site whether a word exists (raw upstream JSON)
    Check {
        lang: String,

        query: String,
    },

    /// Run the HTTP service
    Serve {
        /// Listen address (overrides server.bind)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Pretty,
    Text,
}

impl Format {
    fn render(self, result: &Conjugation) -> conjugo::Result<String> {
        match self {
            Format::Json => JsonRenderer::default().render(result),
            Format::Pretty => JsonRenderer::pretty().render(result),
            Format::Text => TextRenderer.render(result),
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CONJUGO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Logs go to stderr so stdout stays pipeable JSON.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(args: Args) -> conjugo::Result<()> {
    let config_file = args.config.as_deref();

    match args.command {
        Command::Extract {
            input,
            word,
            format,
        } => {
            // Offline: fetch and server settings are not read.
            let options = AppConfig::load_extract_options(config_file)?;
            let converter = ConjugationConverter::new(options);
            let result = converter.convert_file(&input, word.as_deref())?;
            println!("{}", format.render(&result)?);
        }
        Command::Search { lang, word, format } => {
            let config = AppConfig::load(config_file)?;
            let service = ConjugationService::from_config(&config)?;
            let result = service
                .search_word(Some(lang.as_str()), Some(word.as_str()))
                .await?;
            println!("{}", format.render(&result)?);
        }
        Command::Check { lang, query } => {
            let config = AppConfig::load(config_file)?;
            let service = ConjugationService::from_config(&config)?;
            let body = service
                .check_word(Some(lang.as_str()), Some(query.as_str()))
                .await?;
            println!("{}", body);
        }
        Command::Serve { bind } => {
            let config = AppConfig::load(config_file)?;
            let service = Arc::new(ConjugationService::from_config(&config)?);
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let listener = server::bind(&bind)?;
            server::serve(listener, service).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.quiet, args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
