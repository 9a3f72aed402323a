//! Main entry point for the SPARCS gateway server

use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};
use sparcs_api::{
    config::ApiConfig,
    errors::{ApiError, ApiResult},
    records::RecordsClient,
    schema::export_schema_sdl,
    store::BookStore,
};

/// sparcs-api: GraphQL gateway over books, clock, and health records
#[derive(Debug, Parser)]
#[command(name = "sparcs-api", about = "GraphQL gateway over books, clock, and health records", version)]
struct Args {
    /// Optional path to a configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Export GraphQL schema to a file in SDL format
    ExportSchema {
        /// Output file path (defaults to stdout if not specified)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Args {
    /// Load the configuration file given on the command line
    ///
    /// Without one, defaults apply (which themselves honor PORT,
    /// BOOKS_DB_PATH, RECORDS_URL, CORS_ALLOWED_ORIGINS, and
    /// ENGINE_API_KEY environment variables).
    fn load_config(&self) -> ApiResult<ApiConfig> {
        match &self.config {
            None => Ok(ApiConfig::default()),
            Some(path) => {
                let file = std::fs::File::open(path)?;
                serde_yaml::from_reader(file).map_err(|e| ApiError::ConfigError(e.to_string()))
            }
        }
    }
}

#[tokio::main]
async fn main() -> ApiResult<()> {
    let args = Args::parse();
    let config = args.load_config()?;

    // Handle subcommands
    if let Some(Command::ExportSchema { output }) = args.command {
        let store = BookStore::load(&config.database_path).await?;
        let records = RecordsClient::new(&config.records_url, Duration::from_secs(config.records_timeout_secs))?;
        let sdl = export_schema_sdl(store, records);

        if let Some(output_path) = output {
            std::fs::write(&output_path, sdl)?;
            eprintln!("GraphQL schema exported to: {}", output_path.display());
        } else {
            println!("{}", sdl);
        }

        return Ok(());
    }

    sparcs_api::start_server(config).await
}
