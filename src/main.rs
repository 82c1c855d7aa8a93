//! GemCAD command line entry point.

mod cli;

use anyhow::{bail, Context};
use clap::Parser;

use gemcad::designer::{service_from_settings, CheckStatus};
use gemcad::{init_logging_with_level, Config, DesignerState, Point, QuickFillOutcome, Region};

use cli::{Args, Command, FillArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging_with_level(&args.log_level)?;
    tracing::debug!("Parsed arguments: {:?}", args);

    let config = load_config(&args)?;

    match args.command {
        Command::Export { inputs, output } => {
            let mut state = DesignerState::with_config(config);
            for input in &inputs {
                let summary = state
                    .import_svg_file(input)
                    .with_context(|| format!("Failed to import {}", input.display()))?;
                println!(
                    "{}: {} elements imported, {} skipped",
                    input.display(),
                    summary.imported,
                    summary.skipped
                );
            }
            state.export_svg_file(&output)?;
            println!("Wrote {}", output.display());
        }
        Command::Fill(fill) => run_fill(config, fill).await?,
    }

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match Config::default_config_path() {
            Ok(path) => Ok(Config::load_or_default(&path)?),
            Err(e) => {
                tracing::debug!("No config directory ({}), using defaults", e);
                Ok(Config::default())
            }
        },
    }
}

async fn run_fill(mut config: Config, args: FillArgs) -> anyhow::Result<()> {
    let packing = &mut config.packing;
    if let Some(grid) = args.grid {
        packing.grid_type = grid;
    }
    if let Some(size) = args.stone_size {
        packing.stone_size = size;
    }
    if let Some(spacing) = args.spacing {
        packing.spacing = spacing;
    }
    if let Some(padding) = args.padding {
        packing.padding = padding;
    }
    packing.use_remote |= args.remote;

    let radius = args.radius.unwrap_or(config.canvas.quick_select_radius);
    let service = service_from_settings(&config.packing)?;

    let mut state = DesignerState::with_config(config);
    state
        .import_svg_file(&args.input)
        .with_context(|| format!("Failed to import {}", args.input.display()))?;

    let region = Region::new(Point::new(args.cx, args.cy), radius);
    match state.quick_fill(region, service.as_ref()).await {
        QuickFillOutcome::Applied {
            range,
            result,
            verification,
            ..
        } => {
            println!(
                "Placed {} stones ({} grid, coverage {:.1}%)",
                range.len(),
                result.report.grid_type,
                result.report.coverage_ratio * 100.0
            );
            if let Some(min) = result.report.min_center_distance {
                println!("Minimum center distance: {:.3}", min);
            }
            println!("Spacing: {}", verification.spacing);
            println!("Wall thickness: {}", verification.wall_thickness);
            if verification.clearance != CheckStatus::Ok {
                println!("Clearance: {}", verification.clearance);
            }
        }
        QuickFillOutcome::Discarded => bail!("Fill was cancelled"),
        QuickFillOutcome::Failed(error) => {
            return Err(anyhow::Error::new(error).context("Quick fill failed"));
        }
    }

    state.export_svg_file(&args.output)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
