use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use escount::settings::default_config_path;
use escount::{check_availability, connect, init_tracing, ClientConfig, CountService, RawQuery};

/// Count documents in an Elasticsearch cluster.
///
/// # Environment Variables
///
/// - `ESCOUNT_URL`: search engine URL (default `http://127.0.0.1:9200`)
/// - `ESCOUNT_TIMEOUT_SECS`: request timeout in seconds
/// - `ESCOUNT_LOG`: logging level (trace, debug, info, warn, error)
#[derive(Debug, Parser)]
#[command(name = "escount", version, about)]
struct Args {
    /// Indices to count in; all indices when omitted
    indices: Vec<String>,

    /// Restrict the count to a document type (repeatable)
    #[arg(short = 't', long = "type")]
    types: Vec<String>,

    /// Query DSL as JSON, e.g. '{"term": {"user": "kimchy"}}'
    #[arg(short, long)]
    query: Option<String>,

    /// Ask the server for pretty-printed JSON
    #[arg(long)]
    pretty: bool,

    /// Dump the outgoing request and the response
    #[arg(long)]
    debug: bool,

    /// Config file; defaults to the platform config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search engine URL, overrides config and environment
    #[arg(long)]
    url: Option<String>,
}

fn main() {
    init_tracing();

    match run(Args::parse()) {
        Ok(count) => println!("{count}"),
        Err(err) => {
            eprintln!("[escount] {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<i64> {
    let mut config = match args.config.clone().or_else(default_config_path) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            ClientConfig::load(&path).context("failed to load configuration")?
        }
        None => ClientConfig::default(),
    }
    .with_env_overrides();

    if let Some(url) = args.url {
        config.url = url;
    }

    if !check_availability(&config.url) {
        warn!(url = %config.url, "search engine did not answer the availability check");
    }

    let mut service = CountService::new(connect(&config))
        .indices(args.indices)
        .types(args.types)
        .pretty(args.pretty)
        .debug(args.debug);

    if let Some(text) = args.query {
        let query = RawQuery::parse(&text).context("query is not valid JSON")?;
        service = service.query(query);
    }

    service
        .execute()
        .with_context(|| format!("count request to {} failed", config.url))
}
