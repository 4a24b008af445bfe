//! U-Pallet load planner CLI

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use u_pallet_cli::{
    build_manifest, parse_load_arg, parse_load_list, render_report, CatalogParser, Scene,
    DEFAULT_SCALE,
};
use u_pallet_core::{Catalog, Config, PalletLimits, PlacementPlan, Solver};
use u_pallet_packer::{summarize, PalletPacker, PlanSummary};

#[derive(Parser)]
#[command(name = "u-pallet")]
#[command(about = "Greedy pallet load planner")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a load onto pallets and print the report
    Pack {
        /// Article catalog (semicolon separated)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Load line as ID:QTY, may be repeated
        #[arg(short, long = "load", value_name = "ID:QTY")]
        loads: Vec<String>,

        /// Load list file with one ID;QTY per line
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Catalog id of the pallet base
        #[arg(short, long)]
        base: Option<String>,

        /// Maximum loaded unit length (cm)
        #[arg(long)]
        max_length: Option<f64>,

        /// Maximum loaded unit width (cm)
        #[arg(long)]
        max_width: Option<f64>,

        /// Maximum loaded unit height (cm)
        #[arg(long)]
        max_height: Option<f64>,

        /// Output file for the plan and summary (JSON)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Output file for the 3D scene (JSON)
        #[arg(long)]
        scene: Option<PathBuf>,

        /// Divisor from centimetres to scene units
        #[arg(long, default_value_t = DEFAULT_SCALE)]
        scale: f64,
    },

    /// List the loadable articles of a catalog
    Catalog {
        /// Article catalog (semicolon separated)
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    summary: PlanSummary,
    plan: &'a PlacementPlan,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            catalog,
            loads,
            manifest,
            base,
            max_length,
            max_width,
            max_height,
            json,
            scene,
            scale,
        } => {
            let catalog = CatalogParser::new()
                .parse_file(&catalog)
                .with_context(|| format!("reading catalog {}", catalog.display()))?;

            let mut lines = Vec::new();
            if let Some(path) = &manifest {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading load list {}", path.display()))?;
                lines.extend(parse_load_list(&text)?);
            }
            for arg in &loads {
                lines.push(parse_load_arg(arg)?);
            }
            let manifest = build_manifest(&catalog, &lines)?;

            let defaults = PalletLimits::default();
            let limits = PalletLimits::new(
                max_length.unwrap_or(defaults.max_length),
                max_width.unwrap_or(defaults.max_width),
                max_height.unwrap_or(defaults.max_height),
            );
            let mut config = Config::default().with_limits(limits);
            if let Some(id) = base {
                config = config.with_base_id(id);
            }

            let base = catalog.pallet_base(&config.base_id)?;
            let packer = PalletPacker::new(config);
            let plan = packer.pack(&manifest, &base)?;

            print!("{}", render_report(&plan, &base));

            if let Some(path) = json {
                let output = PlanOutput {
                    summary: summarize(&plan, &base),
                    plan: &plan,
                };
                write_json(&path, &output)?;
                println!("Plan saved to: {}", path.display());
            }

            if let Some(path) = scene {
                write_json(&path, &Scene::from_plan(&plan, &base, scale))?;
                println!("Scene saved to: {}", path.display());
            }
        }

        Commands::Catalog { catalog } => {
            let catalog = CatalogParser::new()
                .parse_file(&catalog)
                .with_context(|| format!("reading catalog {}", catalog.display()))?;

            println!("Articles:");
            println!("{:-<60}", "");
            for item in catalog.loadable() {
                println!(
                    "  {:<12} {:<24} {}x{}x{} cm {:.1} kg",
                    item.id(),
                    item.name(),
                    item.length(),
                    item.width(),
                    item.height(),
                    item.weight()
                );
            }
        }
    }

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
