use clap::{Parser, Subcommand};
use esp_app::{
    AppError, AppResult, CheckStatus, OverallStatus, compute_conditions, load_case,
    pump_curve_for, validate_design,
};
use esp_catalog::InMemoryCatalog;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "esp-cli")]
#[command(about = "ESP sizing CLI - inflow, pump, operating point and electrical load", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute inflow, demand, operating point, electrical load and scenarios
    Conditions {
        /// Path to the well case file (YAML or JSON)
        case_path: PathBuf,
        /// Path to the equipment catalog (YAML or JSON)
        #[arg(short, long)]
        catalog: PathBuf,
        /// Output JSON file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Synthesize the installed curve of a catalog pump
    PumpCurve {
        /// Path to the equipment catalog (YAML or JSON)
        #[arg(short, long)]
        catalog: PathBuf,
        /// Pump id
        pump_id: String,
        /// Operating frequency in Hz
        #[arg(long, default_value_t = 50.0)]
        frequency: f64,
        /// Stage count
        #[arg(long, default_value_t = 300)]
        stages: u32,
        /// Number of curve points
        #[arg(long, default_value_t = 300)]
        points: usize,
        /// Output JSON file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the engineering design checks for a case
    Validate {
        /// Path to the well case file (YAML or JSON)
        case_path: PathBuf,
        /// Path to the equipment catalog (YAML or JSON)
        #[arg(short, long)]
        catalog: PathBuf,
        /// Output JSON file (optional, prints a table when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the equipment in a catalog
    Catalog {
        /// Path to the equipment catalog (YAML or JSON)
        catalog_path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Conditions {
            case_path,
            catalog,
            output,
        } => cmd_conditions(&case_path, &catalog, output.as_deref()),
        Commands::PumpCurve {
            catalog,
            pump_id,
            frequency,
            stages,
            points,
            output,
        } => cmd_pump_curve(&catalog, &pump_id, frequency, stages, points, output.as_deref()),
        Commands::Validate {
            case_path,
            catalog,
            output,
        } => cmd_validate(&case_path, &catalog, output.as_deref()),
        Commands::Catalog { catalog_path } => cmd_catalog(&catalog_path),
    }
}

fn load_catalog(path: &Path) -> AppResult<InMemoryCatalog> {
    Ok(esp_catalog::load_path(path)?)
}

fn cmd_conditions(case_path: &Path, catalog_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let case = load_case(case_path)?;
    let catalog = load_catalog(catalog_path)?;
    let conditions = compute_conditions(&case, &catalog)?;

    for warning in &conditions.electrical.warnings {
        eprintln!("warning: {}", warning);
    }
    if let Some(op) = conditions.electrical.operating_point {
        eprintln!(
            "Operating point: {:.1} m3/d at {:.1} m, {:.1} hp",
            op.flow_m3d, op.head_m, op.shaft_power_hp
        );
    }

    emit(&conditions, output)
}

fn cmd_pump_curve(
    catalog_path: &Path,
    pump_id: &str,
    frequency: f64,
    stages: u32,
    points: usize,
    output: Option<&Path>,
) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let curve = pump_curve_for(&catalog, pump_id, frequency, stages, points)?;
    emit(&curve, output)
}

fn cmd_validate(case_path: &Path, catalog_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let case = load_case(case_path)?;
    let catalog = load_catalog(catalog_path)?;
    let report = validate_design(&case, &catalog);

    if output.is_some() {
        return emit(&report, output);
    }

    for (name, check) in report.checks() {
        let mark = match check.status {
            CheckStatus::Ok => "✓",
            CheckStatus::Warning => "!",
            CheckStatus::Error => "✗",
        };
        println!("{} {:<18} {}", mark, name, check.message);
    }
    match report.overall_status {
        OverallStatus::Ok => println!("✓ Design is valid"),
        OverallStatus::ReviewRequired => println!("✗ Design requires review"),
    }
    Ok(())
}

fn cmd_catalog(catalog_path: &Path) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;

    println!("Pumps ({}):", catalog.pump_count());
    for p in catalog.pumps() {
        println!(
            "  {} ({:.0}-{:.0} m3/d)",
            p.id, p.min_flow_m3d, p.max_flow_m3d
        );
    }
    println!("Motors ({}):", catalog.motor_count());
    for m in catalog.motors() {
        let hp = m
            .hp_nominal
            .map(|hp| format!("{:.0} hp", hp))
            .unwrap_or_else(|| "? hp".to_string());
        println!("  {} ({}, {:?})", m.id, hp, m.motor_type);
    }
    println!("Cables ({}):", catalog.cable_count());
    for c in catalog.cables() {
        println!("  {} ({} ohm/km)", c.id, c.resistance_ohm_per_km_20c);
    }
    Ok(())
}

/// Pretty JSON to a file or stdout.
fn emit<T: Serialize>(value: &T, output: Option<&Path>) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| AppError::OutputWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
            println!("✓ Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
