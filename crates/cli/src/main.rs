//! Command Line Interface for the Market Trend backend.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use market_trend_api::{ApiServer, AppState, ServerConfig};
use market_trend_domain::Category;
use market_trend_protocols::PoolDataSource;
use market_trend_protocols::fixture::FixturePoolSource;
use market_trend_protocols::rpc::{RpcConfig, RpcProvider};
use market_trend_protocols::uniswap_v3::UniswapV3Client;
use market_trend_ranking::config::MarketTrendConfig;
use market_trend_ranking::engine::RankingEngine;
use market_trend_ranking::market_trend::{MarketTrend, TrendState, TrendView};
use market_trend_ranking::report::RankingReport;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "market-trend")]
#[command(about = "Ranks DEX liquidity pools for the Market Trend widget", long_about = None)]
struct Cli {
    /// JSON-RPC endpoint, overrides MARKET_TREND_RPC_URL
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one sweep and print the ranked table
    Rank {
        /// Category tab (all, defi, layer1, meme)
        #[arg(short, long, default_value = "all")]
        category: Category,

        /// Read pools from a JSON fixture instead of the chain
        #[arg(long)]
        fixture: Option<PathBuf>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the configured tokens
    Tokens,
    /// Serve the JSON API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,

        /// Read pools from a JSON fixture instead of the chain
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = MarketTrendConfig::from_env()?;
    if let Some(url) = cli.rpc_url {
        config.rpc_url = url;
    }

    match cli.command {
        Commands::Rank {
            category,
            fixture,
            json,
        } => {
            let widget = build_widget(&config, fixture.as_deref())?;
            let view = widget.select_category(category).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render_view(&view));
            }
        }
        Commands::Tokens => {
            let tokens = config.token_list()?;
            let quote = &config.ranking.quote;
            println!("Quote: {} ({})", quote.symbol, quote.address);
            println!("{:<8} | {:<20} | {:<42}", "Symbol", "Name", "Address");
            println!("{}", "-".repeat(76));
            for token in tokens.as_slice() {
                let marker = if token.is_at(&quote.address) { " (quote)" } else { "" };
                println!("{:<8} | {:<20} | {}{}", token.symbol, token.name, token.address, marker);
            }
        }
        Commands::Serve {
            host,
            port,
            fixture,
        } => {
            let widget = build_widget(&config, fixture.as_deref())?;
            let mut server_config = ServerConfig::from_env()?;
            if let Some(host) = host {
                server_config.host = host;
            }
            if let Some(port) = port {
                server_config.port = port;
            }
            ApiServer::new(server_config, AppState::new(Arc::new(widget)))
                .run()
                .await
                .context("API server failed")?;
        }
    }

    Ok(())
}

fn build_widget(config: &MarketTrendConfig, fixture: Option<&std::path::Path>) -> Result<MarketTrend> {
    let source: Arc<dyn PoolDataSource> = match fixture {
        Some(path) => {
            info!(path = %path.display(), "Using pool fixture");
            Arc::new(
                FixturePoolSource::from_file(path)
                    .with_context(|| format!("loading fixture {}", path.display()))?,
            )
        }
        None => {
            let rpc = Arc::new(RpcProvider::connect(&RpcConfig::new(&config.rpc_url))?);
            Arc::new(UniswapV3Client::new(rpc, &config.factory_address)?)
        }
    };

    let engine = RankingEngine::new(source, config.token_list()?, config.ranking.clone());
    Ok(MarketTrend::new(engine))
}

fn render_view(view: &TrendView) -> String {
    match &view.state {
        TrendState::Populated(report) if report.is_empty() => {
            format!("No pools found ({} candidates, {} without a pool)\n", report.candidates, report.missing)
        }
        TrendState::Populated(report) => render_table(report),
        TrendState::Unavailable(report) => format!(
            "Market data unavailable: all {} pool lookups failed\n",
            report.candidates
        ),
        TrendState::ComingSoon => format!("{}: coming soon\n", view.category),
        TrendState::Idle | TrendState::Loading => "Nothing fetched yet\n".to_string(),
    }
}

fn render_table(report: &RankingReport) -> String {
    let mut out = format!(
        "{:<4} | {:<14} | {:>16} | {:>8} | {:>20}\n",
        "#", "Pair", "Price", "24h", "Liquidity"
    );
    out.push_str(&"-".repeat(74));
    out.push('\n');
    for row in &report.rows {
        out.push_str(&format!(
            "{:<4} | {:<14} | {:>16} | {:>8} | {:>20}\n",
            row.rank,
            row.pair,
            row.price,
            row.change_24h.to_string(),
            row.liquidity
        ));
    }
    out.push_str(&format!(
        "{} of {} candidates shown, {} without a pool, {} failed, {} unpriced; fetched {}\n",
        report.rows.len(),
        report.candidates,
        report.missing,
        report.failed,
        report.unpriced,
        report.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out
}
