use anyhow::{bail, Context, Result};
use clap::Parser;
use simulator::{output::write_csv, sweep_strengths, ChannelKind, SweepPoint};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::f64::consts::FRAC_PI_2;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Purity decay vs channel strength for one noise channel")]
struct Args {
    /// Channel: dephasing | depolarizing | damping
    #[arg(long, default_value = "depolarizing")]
    channel: ChannelKind,

    /// Comma-separated list of per-tick strengths
    #[arg(long, default_value = "0.01,0.05,0.1,0.2")]
    strengths: String,

    /// Ticks per curve
    #[arg(long, default_value_t = 50)]
    ticks: usize,

    /// Polar angle θ of the prepared state
    #[arg(long, default_value_t = FRAC_PI_2)]
    theta: f64,

    /// Azimuth φ of the prepared state
    #[arg(long, default_value_t = 0.0)]
    phi: f64,

    /// Purity level used for the "ticks to reach" summary
    #[arg(long, default_value_t = 0.75)]
    purity_target: f64,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Output CSV path
    #[arg(long, default_value = "decay_sweep.csv")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build Rayon thread pool")?;
    }

    let strengths = parse_list(&args.strengths);
    if strengths.is_empty() {
        bail!("--strengths must contain at least one number");
    }
    for &s in &strengths {
        if !(0.0..=0.2).contains(&s) {
            warn!(strength = s, "outside the controller range [0, 0.2]; channels clamp to [0, 1]");
        }
    }

    let curves = sweep_strengths(args.theta, args.phi, args.channel, &strengths, args.ticks);

    let rows: Vec<SweepPoint> = curves.iter().flatten().copied().collect();
    write_csv(&args.out, &rows)
        .with_context(|| format!("failed to write CSV to {}", args.out.display()))?;
    info!(rows = rows.len(), out = %args.out.display(), "wrote sweep");

    for curve in &curves {
        let Some(last) = curve.last() else { continue };
        let reach = match ticks_to_reach(curve, args.purity_target) {
            Some(t) => t.to_string(),
            None => "-".to_string(),
        };
        println!(
            "{} p={:.3}  purity@{}={:.6}  |r|={:.6}  ticks to purity<={}: {}",
            args.channel, last.strength, last.tick, last.purity, last.rmag, args.purity_target, reach
        );
    }
    Ok(())
}

/// First tick at which purity falls to `target` or below.
fn ticks_to_reach(curve: &[SweepPoint], target: f64) -> Option<usize> {
    curve.iter().find(|p| p.purity <= target).map(|p| p.tick)
}

fn parse_list(input: &str) -> Vec<f64> {
    input
        .split(',')
        .filter_map(|s| {
            let t = s.trim();
            if t.is_empty() {
                None
            } else {
                t.parse::<f64>().ok()
            }
        })
        .collect()
}
