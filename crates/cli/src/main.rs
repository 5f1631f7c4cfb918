//! evalpix CLI - evaluate per-pixel evalscripts on JSON samples

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use evalpix_algorithms::imagery::{DateFilter, Orbit};
use evalpix_algorithms::scripts::{
    MedianNdvi, MedianNdviParams, Ndvi, NdviVisual, ScriptKind, TrueColor, TrueColorParams,
    VegetationIndices,
};
use evalpix_core::{Evalscript, Evaluation, Sample};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "evalpix")]
#[command(author, version, about = "Per-pixel evalscripts for satellite imagery", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available evalscripts
    List,
    /// Print the setup declaration of an evalscript as JSON
    Describe {
        /// Script name (see `list`)
        script: ScriptKind,
    },
    /// Evaluate an evalscript on one pixel
    Evaluate {
        /// Script name (see `list`)
        script: ScriptKind,
        /// JSON file: an object of band values, or for composite scripts an
        /// array of `{ "dateFrom", "bands" }` orbits
        #[arg(short, long)]
        input: PathBuf,
        /// Keep only orbits acquired on this date (repeatable, composites only)
        #[arg(long = "allowed-date", value_name = "YYYY-MM-DD")]
        allowed_dates: Vec<String>,
        /// Reflectance mapped to full brightness (true-color only)
        #[arg(short, long, default_value = "3000")]
        gain: f64,
        /// Apply each output's sample type encoding
        #[arg(short, long)]
        encode: bool,
    },
}

/// One orbit of a composite input file.
#[derive(Deserialize)]
struct OrbitInput {
    #[serde(flatten)]
    orbit: Orbit,
    bands: HashMap<String, f64>,
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_sample(kind: ScriptKind, path: &Path) -> Result<Sample> {
    let bands: HashMap<String, f64> = read_json(path)?;
    let sample = Sample::from_map(kind.describe().input, &bands)
        .with_context(|| format!("Invalid sample for {}", kind))?;
    Ok(sample)
}

fn evaluate_pixel(kind: ScriptKind, path: &Path, gain: f64) -> Result<Evaluation> {
    let sample = read_sample(kind, path)?;
    let evaluation = match kind {
        ScriptKind::TrueColor => TrueColor.evaluate_checked(&sample, &TrueColorParams { gain }),
        ScriptKind::Ndvi => Ndvi.evaluate_checked(&sample, &()),
        ScriptKind::NdviVisual => NdviVisual.evaluate_checked(&sample, &()),
        ScriptKind::VegetationIndices => VegetationIndices.evaluate_checked(&sample, &()),
        ScriptKind::MedianNdvi => bail!("{} needs an orbit array", kind),
    };
    evaluation.with_context(|| format!("Failed to evaluate {}", kind))
}

fn evaluate_orbits(path: &Path, allowed_dates: &[String]) -> Result<Evaluation> {
    let kind = ScriptKind::MedianNdvi;
    let inputs: Vec<OrbitInput> = read_json(path)?;
    info!("Input: {} orbits", inputs.len());

    let mut orbits = Vec::with_capacity(inputs.len());
    let mut samples = Vec::with_capacity(inputs.len());
    for (i, input) in inputs.into_iter().enumerate() {
        let sample = Sample::from_map(kind.describe().input, &input.bands)
            .with_context(|| format!("Invalid sample for orbit {}", i))?;
        orbits.push(input.orbit);
        samples.push(sample);
    }

    let params = if allowed_dates.is_empty() {
        MedianNdviParams::default()
    } else {
        let filter = DateFilter::new(allowed_dates).context("Invalid --allowed-date")?;
        debug!("Allowed dates: {:?}", filter.dates().collect::<Vec<_>>());
        MedianNdviParams {
            date_filter: Some(filter),
        }
    };

    let evaluation = MedianNdvi
        .evaluate_orbits(&orbits, &samples, &params)
        .and_then(|e| {
            e.conform(&MedianNdvi.describe())?;
            Ok(e)
        })
        .with_context(|| format!("Failed to evaluate {}", kind))?;
    Ok(evaluation)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::List => {
            for &kind in ScriptKind::ALL {
                println!("{:<20} {}", kind.name(), kind.description());
            }
        }

        Commands::Describe { script } => {
            print_json(&script.describe())?;
        }

        Commands::Evaluate {
            script,
            input,
            allowed_dates,
            gain,
            encode,
        } => {
            if !allowed_dates.is_empty() && !script.is_composite() {
                bail!("--allowed-date only applies to composite scripts");
            }
            let evaluation = if script.is_composite() {
                evaluate_orbits(&input, &allowed_dates)?
            } else {
                evaluate_pixel(script, &input, gain)?
            };
            debug!("{} produced {} outputs", script, evaluation.len());

            if encode {
                let encoded = evaluation
                    .encode(&script.describe())
                    .context("Failed to encode output")?;
                print_json(&encoded)?;
            } else {
                print_json(&evaluation)?;
            }
        }
    }

    Ok(())
}
