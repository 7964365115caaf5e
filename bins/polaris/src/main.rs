use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quantum::{
    measurement::{outcome_probability, Basis},
    shot_estimator::estimate_probs,
};
use rng::ShotRng;
use simulator::{
    decode_line, encode_snapshot, NoiseConfig, Session, SessionConfig, SimulatorError, Snapshot,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::f64::consts::FRAC_PI_2;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Single-qubit open-system simulator (density matrix + Kraus noise)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON-lines protocol: events on stdin, snapshots on stdout
    Run(RunArgs),
    /// Evolve a state under noise and print a table per tick
    Demo(EvolveArgs),
    /// Compare exact basis probabilities with shot estimates
    Shots(ShotArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Internal tick period in milliseconds (0 = ticks only from stdin)
    #[arg(long, default_value_t = 0)]
    tick_ms: u64,

    /// Session config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct EvolveArgs {
    /// Polar angle θ in radians
    #[arg(long, default_value_t = FRAC_PI_2)]
    theta: f64,

    /// Azimuth φ in radians
    #[arg(long, default_value_t = 0.0)]
    phi: f64,

    /// Dephasing probability per tick
    #[arg(long, default_value_t = 0.0)]
    dephasing: f64,

    /// Depolarizing probability per tick
    #[arg(long, default_value_t = 0.0)]
    depolarizing: f64,

    /// Amplitude damping rate per tick
    #[arg(long, default_value_t = 0.0)]
    damping: f64,

    /// Number of ticks
    #[arg(long, default_value_t = 20)]
    ticks: usize,
}

impl EvolveArgs {
    fn noise(&self) -> NoiseConfig {
        NoiseConfig::new(self.dephasing, self.depolarizing, self.damping, true)
    }

    fn evolve(&self, mut on_tick: impl FnMut(usize, &Snapshot)) -> Session {
        let mut session = Session::default();
        session.set_angles(self.theta, self.phi);
        on_tick(0, &session.set_noise(self.noise()));
        for t in 1..=self.ticks {
            let snap = session.tick();
            on_tick(t, &snap);
        }
        session
    }
}

#[derive(Args, Debug)]
struct ShotArgs {
    #[command(flatten)]
    evolve: EvolveArgs,

    /// Shots per basis
    #[arg(long, default_value_t = 1000)]
    shots: usize,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "default-seed")]
    seed: String,
}

enum Event {
    Line(String),
    Tick,
    Closed,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run(&args),
        Command::Demo(args) => demo(&args),
        Command::Shots(args) => shots(&args),
    }
}

fn run(args: &RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("failed to load session config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    let mut session = Session::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit(&mut out, &session.snapshot())?;

    // Reader and ticker feed one queue; this thread alone owns the session.
    let (tx, rx) = mpsc::channel();

    let reader_tx = tx.clone();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(l) => {
                    if reader_tx.send(Event::Line(l)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "stdin read failed");
                    break;
                }
            }
        }
        let _ = reader_tx.send(Event::Closed);
    });

    if args.tick_ms > 0 {
        let tick_tx = tx.clone();
        let period = Duration::from_millis(args.tick_ms);
        info!(tick_ms = args.tick_ms, "internal tick source enabled");
        thread::spawn(move || loop {
            thread::sleep(period);
            if tick_tx.send(Event::Tick).is_err() {
                break;
            }
        });
    }
    drop(tx);

    for event in rx {
        match event {
            Event::Line(line) => match decode_line(&line) {
                Ok(msg) => emit(&mut out, &session.handle(msg))?,
                Err(SimulatorError::Empty) => {}
                Err(err) => warn!(error = %err, line = %line.trim(), "skipping inbound line"),
            },
            Event::Tick => emit(&mut out, &session.tick())?,
            Event::Closed => break,
        }
    }

    info!(ticks_applied = session.ticks_applied(), "input closed");
    Ok(())
}

fn emit(out: &mut impl Write, snap: &Snapshot) -> Result<()> {
    writeln!(out, "{}", encode_snapshot(snap)?).context("failed to write snapshot")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn demo(args: &EvolveArgs) -> Result<()> {
    println!(
        "{:>5}  {:>9}  {:>8}  {:>8}  {:>8}  {:>8}  mixed",
        "tick", "purity", "x", "y", "z", "|r|"
    );
    let session = args.evolve(|t, s| {
        println!(
            "{:>5}  {:>9.6}  {:>8.4}  {:>8.4}  {:>8.4}  {:>8.4}  {}",
            t, s.purity, s.bloch.x, s.bloch.y, s.bloch.z, s.bloch.rmag, s.mixed
        );
    });

    let last = session.snapshot();
    match (last.alpha, last.beta) {
        (Some(a), Some(b)) => println!(
            "alpha = {:.4}{:+.4}i, beta = {:.4}{:+.4}i",
            a.re, a.im, b.re, b.im
        ),
        _ => println!("state is mixed: amplitudes not defined"),
    }
    Ok(())
}

fn shots(args: &ShotArgs) -> Result<()> {
    let session = args.evolve.evolve(|_, _| {});
    let rho = *session.rho();
    let mut rng = ShotRng::new(args.seed.as_bytes());

    info!(
        shots = args.shots,
        ticks = args.evolve.ticks,
        purity = session.snapshot().purity,
        "sampling"
    );
    for basis in Basis::ALL {
        let exact = outcome_probability(&rho, basis, 0);
        let (est, _) = estimate_probs(&rho, basis, &mut rng, args.shots);
        println!(
            "{:?}: P(+1) exact = {:.4}  shots = {:.4}  |diff| = {:.2e}",
            basis,
            exact,
            est,
            (exact - est).abs()
        );
    }
    Ok(())
}
