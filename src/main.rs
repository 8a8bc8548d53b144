//! Book catalog client - Entry Point

use bookcat::client::{CatalogApi, HttpCatalogClient};
use bookcat::export::ExportFormat;
use bookcat::state::SearchField;
use bookcat::view::{ColorConfig, TuiOptions};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Book catalog client - browse, search, add and export catalog records
#[derive(Parser, Debug)]
#[command(name = "bookcat")]
#[command(version)]
#[command(about = "Terminal client for a remote book catalog")]
pub struct Args {
    /// Base URL of the catalog API (e.g. http://localhost:8080/api)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Field the search query is matched against
    /// (all, id, title, author, genre, date, isbn)
    #[arg(long, default_value = "all")]
    pub field: SearchField,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Write an export of the whole catalog and exit without starting the TUI
    #[arg(long, value_enum)]
    pub export: Option<ExportFormat>,

    /// Directory for export files
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = bookcat::config::load_config_with_precedence(args.config.clone())?;
        let merged = bookcat::config::merge_config(config_file);
        let with_env = bookcat::config::apply_env_overrides(merged);
        bookcat::config::apply_cli_overrides(with_env, args.api_url.clone(), args.out.clone())
    };

    bookcat::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let client = HttpCatalogClient::new(&config.client_config())?;

    if let Some(format) = args.export {
        let path = bookcat::headless::export_once(&client, format, &config.export_dir, Utc::now())?;
        println!("{}", path.display());
        return Ok(());
    }

    let api: Arc<dyn CatalogApi> = Arc::new(client);
    let options = TuiOptions {
        export_dir: config.export_dir,
        colors: ColorConfig::from_env_and_args(args.no_color),
        initial_search: args.search,
        search_field: args.field,
    };

    bookcat::view::run_with_client(api, options)?;

    Ok(())
}
