//! Command line driver of *rustinlet*
//!
//! Evaluates a boundary condition on a circular patch over a time span
//! and writes the flow diagnostics.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rustinlet::boundary::registered_types;
use rustinlet::{integrate, Dictionary, DiscPatch, Patch, PatchValue, PulsatileInlet};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Pulsatile flow, 3 l/min mean with a 2 l/min first harmonic at 1 Hz
const DEFAULT_CONDITION: &str = "
type        fourierParabolic;
Q           ((3 0) (0 2));
omega       6.283185307179586;
";

/// Time-periodic inlet velocity profiles
#[derive(Parser)]
#[command(name = "rustinlet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate time-periodic inlet profiles", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// March a condition on a disc in time
    Run(RunArgs),
    /// List registered boundary conditions
    Types,
}

#[derive(Args)]
struct RunArgs {
    /// Boundary dictionary, built-in pulsatile example if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sub-dictionary of the config file holding the condition
    #[arg(short, long)]
    patch: Option<String>,

    /// End time
    #[arg(short = 't', long, default_value = "1.0")]
    end_time: f64,

    /// Time step
    #[arg(long, default_value = "0.01")]
    dt: f64,

    /// Interval between diagnostics
    #[arg(long, default_value = "0.05")]
    save_intervall: f64,

    /// Disc radius
    #[arg(long, default_value = "0.5")]
    radius: f64,

    /// Number of rings of the disc
    #[arg(long, default_value = "16")]
    rings: usize,

    /// Number of sectors of the disc
    #[arg(long, default_value = "32")]
    sectors: usize,

    /// Diagnostics file
    #[arg(short, long, default_value = "diagnostics.txt")]
    output: PathBuf,

    /// Write the final boundary value to this dictionary
    #[arg(long)]
    field: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Types => {
            for name in registered_types() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

fn run(args: RunArgs) -> Result<()> {
    anyhow::ensure!(args.dt > 0., "time step must be positive, got {}", args.dt);
    anyhow::ensure!(
        args.radius >= 0. && args.rings > 0 && args.sectors > 0,
        "invalid disc: radius {}, {} rings, {} sectors",
        args.radius,
        args.rings,
        args.sectors
    );

    let dict = match &args.config {
        Some(path) => Dictionary::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => DEFAULT_CONDITION.parse()?,
    };
    let dict = match &args.patch {
        Some(name) => dict.sub_dict(name)?.clone(),
        None => dict,
    };

    let disc = DiscPatch::new(args.radius, args.rings, args.sectors, [0.; 3], [0., 0., -1.]);
    let n_faces = disc.n_faces();
    info!(
        "Disc of radius {} with {} faces ({} rings, {} sectors)",
        args.radius, n_faces, args.rings, args.sectors
    );
    let field = PatchValue::from_dict(&dict, n_faces)?;
    let mut inlet = PulsatileInlet::from_field(disc, field, args.dt);
    inlet.init()?;

    integrate(&mut inlet, args.end_time, Some(args.save_intervall))?;

    let output = args.output.to_string_lossy();
    inlet.write_diagnostics(&output)?;
    if let Some(path) = &args.field {
        let path = path.to_string_lossy();
        inlet.field.write(&path, args.patch.as_deref().unwrap_or("inlet"))?;
        info!(" ==> {:?}", path);
    }
    Ok(())
}
