//! Headless collaborator for panawave compositions.
//!
//! Provides:
//! - Ring listing for saved `.pwv` documents
//! - Document construction from ring specs on the command line
//! - A terminal orbit animation driver (fixed-interval ticks)

mod animate;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use panawave_core::{parse_log_level, Composition, OrbitMethod};

#[derive(Parser)]
#[command(name = "panawave")]
#[command(about = "Radial sticker composition tool", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, or trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the rings of a saved composition
    Show {
        /// Path to a .pwv document
        file: PathBuf,
    },

    /// Build a composition from ring specs and save it
    New {
        /// Output .pwv path
        #[arg(short, long)]
        output: PathBuf,

        /// Ring specs, "radius:count[:offset[:scaler,scaler,...]]",
        /// e.g. "100:6:0:1,2"
        #[arg(required = true)]
        rings: Vec<String>,
    },

    /// Animate a saved composition for a number of ticks, printing ring
    /// offsets as they advance
    Orbit {
        /// Path to a .pwv document
        file: PathBuf,

        /// Orbit method: random, linear, or reverse-linear
        #[arg(short, long, default_value = "random")]
        method: OrbitMethod,

        /// Number of 100ms ticks to run
        #[arg(short, long, default_value = "50")]
        ticks: u32,

        /// Override the document's master orbit speed
        #[arg(short, long)]
        speed: Option<f64>,
    },
}

/// Parse "radius:count[:offset[:scalers]]" into add_ring arguments.
/// Plain numeric parsing only; no expression evaluation.
fn parse_ring_spec(spec: &str) -> Result<(f64, u32, f64, Vec<u32>)> {
    let mut parts = spec.split(':');
    let radius: f64 = parts
        .next()
        .context("empty ring spec")?
        .parse()
        .with_context(|| format!("bad radius in ring spec {spec:?}"))?;
    let count: u32 = parts
        .next()
        .with_context(|| format!("ring spec {spec:?} is missing a count"))?
        .parse()
        .with_context(|| format!("bad count in ring spec {spec:?}"))?;
    let offset: f64 = match parts.next() {
        Some(s) => s
            .parse()
            .with_context(|| format!("bad offset in ring spec {spec:?}"))?,
        None => 0.,
    };
    let scalers: Vec<u32> = match parts.next() {
        Some(s) => s
            .split(',')
            .map(|v| v.parse())
            .collect::<Result<_, _>>()
            .with_context(|| format!("bad scaler list in ring spec {spec:?}"))?,
        None => vec![1],
    };
    if parts.next().is_some() {
        bail!("too many fields in ring spec {spec:?}");
    }
    Ok((radius, count, offset, scalers))
}

fn show(composition: &Composition) {
    println!(
        "{:<8}{:<11}{:<11}{:<11}{:<8}{}",
        "id", "radius", "count", "offset", "locked", "scalers"
    );
    for ring in composition.rings() {
        let locked = composition
            .is_count_locked_for_ring(ring.id())
            .map(|l| if l { "yes" } else { "no" })
            .unwrap_or("?");
        println!("{:<8}{ring}  {locked}", ring.id().to_string());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(parse_log_level(cli.log_level.as_deref()))
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Show { file } => {
            let composition = Composition::from_file(&file)
                .with_context(|| format!("failed to open {}", file.display()))?;
            show(&composition);
        }
        Commands::New { output, rings } => {
            let mut composition = Composition::new();
            for spec in &rings {
                let (radius, count, offset, scalers) = parse_ring_spec(spec)?;
                composition
                    .add_ring(radius, count, offset, scalers, None)
                    .with_context(|| format!("rejected ring spec {spec:?}"))?;
            }
            composition
                .write_out(&output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("wrote {} rings to {}", composition.len(), output.display());
        }
        Commands::Orbit {
            file,
            method,
            ticks,
            speed,
        } => {
            let mut composition = Composition::from_file(&file)
                .with_context(|| format!("failed to open {}", file.display()))?;
            if let Some(speed) = speed {
                composition.set_master_orbit_speed(speed);
            }
            animate::run(&mut composition, method, ticks)?;
        }
    }
    Ok(())
}
