use anyhow::Context;
use clap::Parser;
use pokedex::api::{PokeApiClient, RecordSource};
use pokedex::config::{Config, ConfigStore};
use pokedex::logging::init_tracing;
use pokedex::print::{run_once, OutputFormat};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "pokedex", version, about = "Look up Pokémon by name or Pokédex number")]
struct Cli {
    /// Name or Pokédex number to look up first
    query: Option<String>,

    /// Path to the config file (default: ~/.config/pokedex/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Look up once and print the result instead of starting the TUI
    #[arg(long)]
    print: bool,

    /// Print the result as JSON
    #[arg(long, requires = "print")]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::read_from(&path)?;
    let store = ConfigStore::new(config, path);
    store.update(|config| {
        if let Some(base_url) = cli.base_url {
            config.api.base_url = base_url;
        }
        if let Some(query) = cli.query {
            config.lookup.initial_query = query;
        }
    });
    let config = store.get();
    let log_file = init_tracing(&config.log);
    config.validate()?;

    tracing::info!(
        config = %store.path().display(),
        log_file = ?log_file,
        base_url = %config.api.base_url,
        query = %config.lookup.initial_query,
        "Starting pokedex"
    );

    let client = PokeApiClient::new(&config.api).context("Failed to build HTTP client")?;
    let source: Arc<dyn RecordSource> = Arc::new(client);

    if cli.print {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let mut stdout = io::stdout();
        let found = run_once(source, &config.lookup.initial_query, format, &mut stdout).await?;
        stdout.flush()?;
        if !found {
            std::process::exit(1);
        }
        return Ok(());
    }

    pokedex::ui::run(&config, source).await?;
    Ok(())
}
