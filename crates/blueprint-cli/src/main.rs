//! Blueprint CLI - compile floor plans into box scenes

use anyhow::{Context, Result};
use blueprint_core::export::{ExportFormat, export_manifest};
use blueprint_core::geom::SolidKind;
use blueprint_core::layout::build_layout;
use blueprint_core::plan::PlanSpec;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(about = "Compile declarative floor plans into box geometry", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a plan and write the manifest or a mesh
    Build {
        /// Plan file (JSON); the built-in villa if omitted
        #[arg(short, long)]
        plan: Option<PathBuf>,

        /// Output file (format auto-detected from extension)
        #[arg(short, long, default_value = "scene.json")]
        output: PathBuf,

        /// Output format, overriding the extension
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Write the built-in villa plan as an editable JSON file
    Init {
        /// Output file
        #[arg(short, long, default_value = "plan.json")]
        output: PathBuf,
    },

    /// Print a summary of a compiled plan
    Inspect {
        /// Plan file (JSON); the built-in villa if omitted
        #[arg(short, long)]
        plan: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Obj,
    Stl,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Obj => Self::Obj,
            FormatArg::Stl => Self::Stl,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so manifests can be piped from stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            plan,
            output,
            format,
        } => {
            run_build(plan.as_deref(), &output, format.map(ExportFormat::from))?;
        }
        Commands::Init { output } => {
            run_init(&output)?;
        }
        Commands::Inspect { plan } => {
            run_inspect(plan.as_deref())?;
        }
    }

    Ok(())
}

fn load_plan(path: Option<&Path>) -> Result<PlanSpec> {
    match path {
        Some(path) => {
            tracing::info!("Loading plan: {}", path.display());
            PlanSpec::load(path).with_context(|| format!("Failed to load plan {}", path.display()))
        }
        None => Ok(PlanSpec::villa()),
    }
}

fn run_build(plan: Option<&Path>, output: &Path, format: Option<ExportFormat>) -> Result<()> {
    let plan = load_plan(plan)?;
    let manifest = build_layout(&plan).context("Failed to compile plan")?;

    let format = match format.or_else(|| ExportFormat::from_extension(output)) {
        Some(format) => format,
        None => anyhow::bail!(
            "Cannot infer export format from {}; use --format",
            output.display()
        ),
    };

    export_manifest(&manifest, output, format)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Saved {} to: {}", format.name(), output.display());
    Ok(())
}

fn run_init(output: &Path) -> Result<()> {
    if output.exists() {
        anyhow::bail!("Refusing to overwrite existing file: {}", output.display());
    }

    PlanSpec::villa()
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Wrote villa plan to: {}", output.display());
    Ok(())
}

fn run_inspect(plan: Option<&Path>) -> Result<()> {
    let plan = load_plan(plan)?;
    let manifest = build_layout(&plan).context("Failed to compile plan")?;

    println!("Collection: {}", manifest.collection);
    println!();
    println!("{:<12} {:>6}", "Kind", "Count");
    println!("{:-<12} {:->6}", "", "");

    let kinds = [
        SolidKind::Floor,
        SolidKind::Wall,
        SolidKind::Window,
        SolidKind::Door,
        SolidKind::Furniture,
        SolidKind::Light,
        SolidKind::Camera,
    ];
    for kind in kinds {
        println!("{:<12} {:>6}", kind.label(), manifest.count(kind));
    }

    if let Some((min, max)) = manifest.bounds() {
        println!();
        println!("Bounds: {:.3} .. {:.3}", min, max);
    }

    let volume: f64 = manifest.solids_of(SolidKind::Wall).map(|s| s.volume()).sum();
    println!("Wall volume: {:.2} m3", volume);

    Ok(())
}
