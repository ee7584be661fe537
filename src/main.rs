//! smartscout - command-line access to the SmartScout analytics API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use smartscout::commands::{call, catalog, CallCommand};
use smartscout::config::{ApiKey, Config, OutputFormat};
use smartscout::{Endpoint, Marketplace};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "smartscout",
    version,
    about = "Query the SmartScout e-commerce analytics API",
    long_about = "Typed client for the SmartScout API. Requests are JSON documents using the API's wire field names; run `smartscout schema <endpoint>` to see them."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// API key
    #[arg(long, global = true, env = "SMARTSCOUT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API root URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Marketplace code (US, UK, DE, ...) for requests that do not name one
    #[arg(short, long, global = true)]
    marketplace: Option<Marketplace>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true)]
    proxy: Option<String>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging (includes the curl line for each request)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log each request as a curl command
    #[arg(long, global = true)]
    show_curl: bool,

    /// Show the API key in curl output
    #[arg(long, global = true)]
    no_redact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available endpoints
    #[command(alias = "ls")]
    Endpoints,

    /// Show the request and response fields of an endpoint
    Schema {
        /// Endpoint name (see `endpoints`)
        endpoint: Endpoint,
    },

    /// Call an endpoint
    #[command(alias = "c")]
    Call {
        /// Endpoint name (see `endpoints`)
        endpoint: Endpoint,

        /// JSON request file, or `-` for stdin
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Follow nextPageId until the last page
        #[arg(long)]
        all_pages: bool,

        /// Page limit for --all-pages
        #[arg(long)]
        max_pages: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else if cli.show_curl {
        EnvFilter::new(Level::INFO.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(key) = cli.api_key {
        config.api_key = Some(ApiKey::new(key));
    }
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    if let Some(marketplace) = cli.marketplace {
        config.marketplace = marketplace;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.verbose |= cli.verbose || cli.show_curl;
    if cli.no_redact {
        config.redact_credentials = false;
    }

    match cli.command {
        Commands::Endpoints => {
            println!("{}", catalog::list_endpoints(config.format));
        }

        Commands::Schema { endpoint } => {
            println!("{}", catalog::describe_schema(endpoint, config.format));
        }

        Commands::Call { endpoint, request, all_pages, max_pages } => {
            if let Some(max) = max_pages {
                config.max_pages = max;
            }

            let request = call::read_request(request.as_deref())?;
            let cmd = CallCommand::new(config);
            let output = cmd.execute(endpoint, request, all_pages).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
