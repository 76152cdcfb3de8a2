use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use specmark::{
    assemble, mark_data, parse_absorption_lines, parse_trace, EdgePolicy, MarkConfig,
    NegativeSampling,
};

/// Label a spectroscopic trace: positive windows around known absorption
/// lines, matched negative windows from line-free regions, written as CSV.
#[derive(Parser)]
#[command(name = "specmark", version, about)]
struct Args {
    /// Trace measured with the substance (instrument text format).
    trace: PathBuf,

    /// Absorption-line table (tab-separated frequency/amplitude/flag).
    lines: PathBuf,

    /// Output CSV path.
    #[arg(short, long, default_value = "labeled_data.csv")]
    output: PathBuf,

    /// JSON file with a full MarkConfig; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Samples per window.
    #[arg(long)]
    window_width: Option<usize>,

    /// Edge handling for windows near the series boundaries.
    #[arg(long, value_enum)]
    edge_policy: Option<EdgePolicyArg>,

    /// Negative-window selection policy.
    #[arg(long, value_enum)]
    sampling: Option<SamplingArg>,

    /// Resample the trace onto a uniform grid with this step first.
    #[arg(long)]
    step: Option<f64>,

    /// Seed for shuffled negative sampling.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum EdgePolicyArg {
    Strict,
    Padded,
}

#[derive(Clone, Copy, ValueEnum)]
enum SamplingArg {
    Sequential,
    Shuffled,
}

fn build_config(args: &Args) -> Result<MarkConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).context("parsing config JSON")?
        }
        None => MarkConfig::default(),
    };

    if let Some(width) = args.window_width {
        config.window_width = width;
    }
    if let Some(policy) = args.edge_policy {
        config.edge_policy = match policy {
            EdgePolicyArg::Strict => EdgePolicy::Strict,
            EdgePolicyArg::Padded => EdgePolicy::Padded,
        };
    }
    if let Some(sampling) = args.sampling {
        config.negative_sampling = match sampling {
            SamplingArg::Sequential => NegativeSampling::Sequential,
            SamplingArg::Shuffled => NegativeSampling::Shuffled,
        };
    }
    if args.step.is_some() {
        config.resample_step = args.step;
    }
    if args.seed.is_some() {
        config.random_seed = args.seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = build_config(&args)?;

    let trace_text = std::fs::read_to_string(&args.trace)
        .with_context(|| format!("reading trace {}", args.trace.display()))?;
    let series = parse_trace(&trace_text)
        .with_context(|| format!("parsing trace {}", args.trace.display()))?;

    let lines_text = std::fs::read_to_string(&args.lines)
        .with_context(|| format!("reading line table {}", args.lines.display()))?;
    let lines = parse_absorption_lines(&lines_text)
        .with_context(|| format!("parsing line table {}", args.lines.display()))?;

    log::info!(
        "loaded {} trace samples and {} absorption lines",
        series.len(),
        lines.len()
    );

    let dataset = mark_data(&series, &lines.frequencies(), &config)?;
    if !dataset.is_balanced() {
        log::warn!(
            "unbalanced dataset: {} positive vs {} negative windows",
            dataset.positive.len(),
            dataset.negative.len()
        );
    }

    let rows = assemble(&dataset);
    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    log::info!(
        "wrote {} rows ({} windows of {} samples) to {}",
        rows.len(),
        dataset.len(),
        dataset.window_width,
        args.output.display()
    );
    Ok(())
}
