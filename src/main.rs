use anyhow::{bail, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rughound::analyzer::TokenAnalyzer;
use rughound::config::AnalyzerConfig;
use rughound::core::TokenQuery;
use rughound::source::{
    DexScreenerMetricsSource, FixtureMentionSource, FixtureMetricsSource, LiveMentionSource,
    MentionSource, MetricsSource,
};
use rughound::util::print_analysis;

struct CliArgs {
    address: String,
    symbol: Option<String>,
    live: bool,
    json: bool,
    config_path: Option<String>,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut address = None;
    let mut symbol = None;
    let mut live = false;
    let mut json = false;
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--symbol" => symbol = args.next(),
            "--live" => live = true,
            "--json" => json = true,
            "--config" => config_path = args.next(),
            other if !other.starts_with("--") && address.is_none() => {
                address = Some(other.to_string())
            }
            other => bail!("Unrecognized argument: {other}"),
        }
    }

    let Some(address) = address else {
        bail!("Usage: rughound <token-address> [--symbol SYM] [--live] [--json] [--config PATH]");
    };

    Ok(CliArgs {
        address,
        symbol,
        live,
        json,
        config_path,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("rughound=info")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => AnalyzerConfig::load_from_file(path)?,
        None => AnalyzerConfig::default(),
    };

    let (mention_source, metrics_source): (Box<dyn MentionSource>, Box<dyn MetricsSource>) =
        if args.live {
            let mentions: Box<dyn MentionSource> = match LiveMentionSource::from_env() {
                Ok(source) => Box::new(source),
                Err(e) => {
                    warn!("⚠️ {e}; falling back to fixture mentions");
                    Box::new(FixtureMentionSource)
                }
            };
            (mentions, Box::new(DexScreenerMetricsSource::new()))
        } else {
            (Box::new(FixtureMentionSource), Box::new(FixtureMetricsSource))
        };

    let analyzer = TokenAnalyzer::new(&config, mention_source, metrics_source);

    let token = match args.symbol {
        Some(symbol) => TokenQuery::with_symbol(args.address, symbol),
        None => TokenQuery::new(args.address),
    };

    info!("🚀 Rughound analyzing {}", token.address);
    let analysis = analyzer.analyze(&token).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&analysis);
    }

    Ok(())
}
