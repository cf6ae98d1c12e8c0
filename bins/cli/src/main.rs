//! Sarraf command line converter.
//!
//! A thin host shell around the Sarraf crates: offline conversions run
//! straight through the fixed table, everything else goes through the
//! tiered rate feed with a file-backed cache.
//!
//! Usage: sarraf <AMOUNT> <FROM> <TO>
//!
//! Examples:
//!   sarraf 5000 franc dirham
//!   sarraf 100 MAD EUR

use std::str::FromStr;

use anyhow::Context;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sarraf_core::denomination::breakdown;
use sarraf_core::exchange::convert_with_rates;
use sarraf_core::format::format_amount;
use sarraf_core::offline::convert;
use sarraf_core::units::is_offline_unit;
use sarraf_rates::{HttpClient, JsonFileStore, RateService};
use sarraf_shared::{AppConfig, OfflineUnit};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sarraf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [amount, from, to] = args.as_slice() else {
        anyhow::bail!("usage: sarraf <AMOUNT> <FROM> <TO>");
    };
    let amount = Decimal::from_str(amount).context("AMOUNT must be a number")?;

    let config = AppConfig::load().context("Failed to load configuration")?;

    if is_offline_unit(from) && is_offline_unit(to) {
        convert_offline(amount, from, to)
    } else {
        convert_live(amount, from, to, &config).await
    }
}

/// Offline path: no I/O, fixed historical rates.
fn convert_offline(amount: Decimal, from: &str, to: &str) -> anyhow::Result<()> {
    let result = convert(amount, offline_unit(from)?, offline_unit(to)?)?;
    println!("{}", format_amount(result, to));
    print_breakdown(result, to);
    Ok(())
}

/// Live path: tiered rate feed with a file-backed cache.
async fn convert_live(
    amount: Decimal,
    from: &str,
    to: &str,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let cache_path = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("sarraf")
        .join("rates.json");
    let store = JsonFileStore::new(cache_path);
    let client = HttpClient::from_config(&config.feed)?;
    let service = RateService::new(client, store, config.feed.clone());

    let quote = service.fetch_rates().await;
    info!(source = ?quote.source, currencies = quote.rates.len(), "Rates acquired");
    if quote.degraded {
        eprintln!("(offline: using approximate built-in rates)");
    }

    let result = convert_with_rates(amount, from, to, &quote.rates);
    println!("{}", format_amount(result, to));
    print_breakdown(result, to);
    Ok(())
}

/// Maps a CLI code to an offline unit, accepting MAD as the dirham.
fn offline_unit(code: &str) -> anyhow::Result<OfflineUnit> {
    if code.eq_ignore_ascii_case("MAD") {
        return Ok(OfflineUnit::Dirham);
    }
    code.parse::<OfflineUnit>().map_err(anyhow::Error::msg)
}

/// Shows the bill/coin composition for dirham results.
fn print_breakdown(result: Decimal, to: &str) {
    if !(to.eq_ignore_ascii_case("MAD") || to.eq_ignore_ascii_case("dirham")) {
        return;
    }
    for line in breakdown(result) {
        println!(
            "  {} x {} ({})",
            line.count,
            format_amount(line.denomination.face_value, "MAD"),
            line.denomination.kind
        );
    }
}
