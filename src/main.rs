use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use tracing::{info, warn};

use kids_video_aggregator::models::into_content_items;
use kids_video_aggregator::{Config, CuratedAggregator, KidsApiClient, KidsService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("kids_video_aggregator=info,warn")
        .init();

    let matches = Command::new("Kids Video Aggregator")
        .version("0.1.0")
        .author("TigreRoll")
        .about("Kid-friendly video aggregation service")
        .subcommand_required(true)
        .subcommand(
            Command::new("search")
                .about("Search the kids surface for videos")
                .arg(
                    Arg::new("query")
                        .value_name("QUERY")
                        .help("Search query (max 100 characters)")
                        .required(true),
                )
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .value_name("FILTER")
                        .help("Search filter (accepted for compatibility, ignored)"),
                ),
        )
        .subcommand(
            Command::new("home")
                .about("Fetch the kids home feed")
                .arg(
                    Arg::new("region")
                        .short('r')
                        .long("region")
                        .value_name("REGION")
                        .help("Region code")
                        .default_value("US"),
                ),
        )
        .subcommand(
            Command::new("curated")
                .about("Aggregate videos directly from the curated channel list"),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP API server")
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .value_name("PORT")
                        .help("Listen port (overrides configuration)"),
                ),
        )
        .get_matches();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });
    config.validate()?;

    match matches.subcommand() {
        Some(("search", sub)) => run_search(config, sub).await,
        Some(("home", sub)) => run_home(config, sub).await,
        Some(("curated", _)) => run_curated(config).await,
        Some(("serve", sub)) => run_serve(config, sub).await,
        _ => unreachable!("subcommand is required"),
    }
}

async fn run_search(config: Config, matches: &ArgMatches) -> Result<()> {
    let query = matches.get_one::<String>("query").unwrap();
    let filter = matches.get_one::<String>("filter").map(String::as_str);

    let service = KidsService::new(config);
    let page = service.search(query, filter).await?;

    info!("✅ Found {} videos", page.items.len());
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

async fn run_home(config: Config, matches: &ArgMatches) -> Result<()> {
    let region = matches.get_one::<String>("region").unwrap();

    let service = KidsService::new(config);
    let items = service.videos(Some(region)).await?;

    info!("✅ Collected {} videos", items.len());
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}

async fn run_curated(config: Config) -> Result<()> {
    let client = KidsApiClient::new(config.upstream);
    let aggregator = CuratedAggregator::new(config.aggregation, config.sources.channels);
    let items = into_content_items(aggregator.aggregate(&client).await);

    info!("✅ Collected {} videos", items.len());
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}

#[cfg(feature = "api")]
async fn run_serve(config: Config, matches: &ArgMatches) -> Result<()> {
    use std::sync::Arc;

    let port = match matches.get_one::<String>("port") {
        Some(port) => port.parse()?,
        None => config.server.port,
    };
    let bind_address = config.server.bind_address.clone();

    let service = Arc::new(KidsService::new(config));
    kids_video_aggregator::api::start_http_server(service, &bind_address, port).await
}

#[cfg(not(feature = "api"))]
async fn run_serve(_config: Config, _matches: &ArgMatches) -> Result<()> {
    Err(anyhow::anyhow!(
        "This binary was built without the 'api' feature; rebuild with --features api"
    ))
}
