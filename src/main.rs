use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;

use corkboard::classify::model::find_model_file;
use corkboard::classify::JobClassifier;
use corkboard::config::Config;
use corkboard::jobs::{FlatFileStore, JobStore};
use corkboard::output;

/// Corkboard: a job board with classifier-suggested categories.
///
/// Lists jobs from a flat data file, accepts new postings through the web
/// form, and suggests a category for each posting using a pre-trained
/// text classifier.
#[derive(Parser)]
#[command(name = "corkboard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "5000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Classify a job description from the command line
    Classify {
        /// The description text
        text: String,
    },

    /// Show artifact and data availability
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("corkboard=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let classifier = Arc::new(JobClassifier::load(&config.artifact_paths()));

            // A missing listings file shouldn't keep the site down — serve
            // an empty board and let postings accumulate in the sidecar.
            let store = match FlatFileStore::open(&config.listings_path, &config.posted_path) {
                Ok(store) => store,
                Err(e) => {
                    warn!(error = %e, "Could not load job listings; starting empty");
                    FlatFileStore::empty(&config.posted_path)
                }
            };
            let store: Arc<dyn JobStore> = Arc::new(store);

            corkboard::web::run_server(store, classifier, port, &bind).await?;
        }

        Commands::Classify { text } => {
            let config = Config::load()?;
            let classifier = JobClassifier::load(&config.artifact_paths());

            let cleaned = classifier.preprocessed(&text);
            let result = classifier.classify_job(&text);
            output::display_classification(&text, cleaned.as_deref(), &result);
        }

        Commands::Status => {
            let config = Config::load()?;
            let paths = config.artifact_paths();

            println!("{}", "=== Corkboard status ===".bold());
            output::display_check(
                "stopwords",
                paths.stopwords.exists(),
                &paths.stopwords.display().to_string(),
            );
            output::display_check(
                "vocabulary",
                paths.vocabulary.exists(),
                &paths.vocabulary.display().to_string(),
            );

            match find_model_file(&paths.model_dirs) {
                Ok(path) => {
                    output::display_check("model", true, &path.display().to_string())
                }
                Err(_) => output::display_check(
                    "model",
                    false,
                    &format!("searched {:?}", paths.model_dirs),
                ),
            }
            output::display_check(
                "label encoder",
                paths.label_encoder.exists(),
                &paths.label_encoder.display().to_string(),
            );
            output::display_check(
                "listings",
                config.listings_path.exists(),
                &config.listings_path.display().to_string(),
            );

            let classifier = JobClassifier::load(&paths);
            if classifier.is_degraded() {
                println!(
                    "\nClassifier: {}",
                    "degraded — classification calls will report an error".red()
                );
            } else {
                let labels = classifier.labels().unwrap_or_default();
                println!(
                    "\nClassifier: {} ({} categories: {})",
                    "ready".green().bold(),
                    labels.len(),
                    labels.join(", ")
                );
            }

            if let Ok(store) = FlatFileStore::open(&config.listings_path, &config.posted_path) {
                let jobs = store.list().await;
                let categories = store.categories().await;
                println!(
                    "Jobs: {} across {} categories",
                    jobs.len(),
                    categories.len()
                );
            }
        }
    }

    Ok(())
}
