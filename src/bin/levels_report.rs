// src/bin/levels_report.rs
use anyhow::{bail, Context, Result};
use clap::Parser;
use gann_levels::{
    load_candles_from_csv, sample_from_candles, setup_logging, EngineConfig, LevelsEngine,
    PriceSample, ReportFileManager,
};
use log::*;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about = "Technical levels report generator")]
struct Args {
    /// Path to configuration file
    #[clap(short, long, default_value = "config/levels.toml")]
    config: PathBuf,

    /// Symbol to label the report with
    #[clap(short, long, default_value = "BTC")]
    symbol: String,

    /// CSV file of candles; high/low/close are derived from the window
    #[clap(long)]
    csv: Option<String>,

    /// Number of trailing candles to aggregate when reading CSV
    #[clap(long, default_value = "20")]
    lookback: usize,

    /// Range high (ignored when --csv is given)
    #[clap(long)]
    high: Option<f64>,

    /// Range low (ignored when --csv is given)
    #[clap(long)]
    low: Option<f64>,

    /// Prior close (defaults to the current price)
    #[clap(long)]
    close: Option<f64>,

    /// Current price
    #[clap(long)]
    price: Option<f64>,

    /// Output directory for report files
    #[clap(short, long, default_value = "reports")]
    output: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging();

    let config = EngineConfig::load_from_file(&args.config)
        .context("Failed to load engine configuration")?;

    let sample = build_sample(&args)?;
    info!(
        "Computing levels for {}: price={} high={} low={} close={}",
        args.symbol, sample.price, sample.high, sample.low, sample.close
    );

    let engine = LevelsEngine::new(config);
    let report = engine.analyze(&args.symbol, &sample);

    info!(
        "Pivot {:.2}, nearest support {:.2}, nearest resistance {:.2}",
        report.pivots.get("pivot").unwrap_or(f64::NAN),
        report.percentages.nearest_support,
        report.percentages.nearest_resistance
    );

    let manager = ReportFileManager::new(&args.output);
    let path = manager.write_report(&report)?;
    println!("Report written to {}", path.display());

    Ok(())
}

fn build_sample(args: &Args) -> Result<PriceSample> {
    if let Some(csv_path) = &args.csv {
        let candles = load_candles_from_csv(csv_path)
            .with_context(|| format!("Failed to load candles from {}", csv_path))?;
        return sample_from_candles(&candles, args.lookback)
            .context("CSV contained no candles to sample");
    }

    match (args.high, args.low, args.price) {
        (Some(high), Some(low), Some(price)) => Ok(PriceSample {
            price,
            high,
            low,
            close: args.close.unwrap_or(price),
        }),
        _ => bail!("Provide either --csv or all of --high, --low and --price"),
    }
}
