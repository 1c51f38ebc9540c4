mod config;
mod ingest;
mod output;
mod steamspy;

use clap::Parser;
use gemrank_core::{
    rank_catalog, render_ranking, AudienceSource, RankingOptions, ReportLayout,
    DEFAULT_LINK_WIDTH, STEAM_STORE_URL,
};
use reqwest::Client;
use std::path::PathBuf;

/// Ranking direction of the original hidden-gems experiment: large audience,
/// few reviews first.
const DEFAULT_RATIO_EXPONENT: f64 = -1.0;

/// Metadata dump size when no --top is given.
const DEFAULT_INSPECT_COUNT: usize = 10;

const DEFAULT_RETRIES: usize = 3;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "gemrank", version, about = "Rank a Steam catalog by hidden-gem score")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Fetch the catalog and print the hidden-gem ranking
    Rank(RankArgs),
    /// Create a default config file at ~/.config/gemrank/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// Local JSON snapshot of the SteamSpy bulk response, instead of fetching
    #[arg(long)]
    input: Option<PathBuf>,

    /// Exponent applied to the audience-to-review ratio.
    /// Negative values surface hidden gems. Default: -1.0
    #[arg(long)]
    exponent: Option<f64>,

    /// Audience estimate to trust: "players" or "owners". Default: players
    #[arg(long)]
    source: Option<String>,

    /// Print only the top N entries (inclusive). Omit to print everything.
    #[arg(long)]
    top: Option<usize>,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Minimum width of the link field in report lines. Default: 40
    #[arg(long)]
    link_width: Option<usize>,

    /// Store page prefix prepended to each appid
    #[arg(long)]
    url_prefix: Option<String>,

    /// SteamSpy bulk endpoint
    #[arg(long)]
    api_url: Option<String>,

    /// Max retries when the fetch fails. Default: 3. Set to 0 to disable.
    #[arg(long)]
    retries: Option<usize>,

    /// Path to config file (default: ~/.config/gemrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show progress, and dump the raw records of the top entries to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_audience_source(value: &str) -> AudienceSource {
    match value {
        "players" => AudienceSource::Players,
        "owners" => AudienceSource::Owners,
        other => bail(format!("Unknown audience source \"{other}\". Use \"players\" or \"owners\".")),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args).await,
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default exponent, output path, etc.");
        }
    }
}

async fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let ratio_exponent = args.exponent.or(cfg.ratio_exponent).unwrap_or(DEFAULT_RATIO_EXPONENT);
    let audience_source = args.source
        .or(cfg.audience_source)
        .map(|s| parse_audience_source(&s))
        .unwrap_or(AudienceSource::Players);

    let top = args.top.or(cfg.top);
    if top == Some(0) {
        bail("--top must be at least 1");
    }

    let output_path = args.output.or(cfg.output);
    let layout = ReportLayout {
        url_prefix: args.url_prefix
            .or(cfg.url_prefix)
            .unwrap_or_else(|| STEAM_STORE_URL.to_string()),
        link_width: args.link_width.or(cfg.link_width).unwrap_or(DEFAULT_LINK_WIDTH),
    };
    let api_url = args.api_url
        .or(cfg.api_url)
        .unwrap_or_else(|| steamspy::DEFAULT_API_URL.to_string());
    let retries = args.retries.or(cfg.retries).unwrap_or(DEFAULT_RETRIES);

    let records = match args.input {
        Some(ref path) => {
            if args.verbose {
                eprintln!("Loading catalog snapshot from {}", path.display());
            }
            steamspy::load_snapshot(path).unwrap_or_else(|e| bail(e))
        }
        None => {
            if args.verbose {
                eprintln!("Fetching catalog from {api_url}");
            }
            let client = Client::new();
            steamspy::fetch_catalog(&client, &api_url, retries, args.verbose)
                .await
                .unwrap_or_else(|e| bail(e))
        }
    };

    if args.verbose {
        eprintln!(
            "Ranking {} records (exponent {ratio_exponent}, source {audience_source:?})",
            records.len(),
        );
    }

    let catalog = ingest::build_catalog(&records).unwrap_or_else(|e| bail(e));

    let options = RankingOptions {
        ratio_exponent,
        audience_source,
    };
    let ranking = rank_catalog(&catalog, &options);
    let lines = render_ranking(&ranking, top, &layout);

    match output_path {
        Some(path) => {
            output::write_report(&path, &lines).unwrap_or_else(|e| bail(e));
            if args.verbose {
                eprintln!("Wrote {} lines to {}", lines.len(), path.display());
            }
        }
        None => output::print_report(&lines),
    }

    if args.verbose {
        output::print_top_metadata(&ranking, &records, top.unwrap_or(DEFAULT_INSPECT_COUNT));
    }
}
