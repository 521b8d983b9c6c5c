// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! myotrace — muscle activation trajectory viewer
//!
//! Loads a muscle activation dataset and:
//! 1. Lists the muscle catalog
//! 2. Prints dataset statistics for a selection
//! 3. Renders the selected muscles as a stacked 3D plot (HTML or JSON)

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use myotrace_core::{
    load_dataset, AxisDirection, Dataset, DatasetSummary, PlotConfig, PlotError, Selection,
    TrajectoryPlotBuilder, DEFAULT_SELECTION_SIZE,
};
use myotrace_viz::{JsonRenderer, SceneRenderer, Theme, ThreeJsRenderer};

const DEFAULT_DATA_PATH: &str = "data/muscle_activation_data.json";

#[derive(Parser, Debug)]
#[command(author, version, about = "Render muscle activation trajectories as stacked 3D curves")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the muscle catalog with indices
    List(DataArgs),
    /// Print dataset statistics for a selection
    Stats(SelectArgs),
    /// Build the plot and write it as HTML or JSON
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Dataset JSON with `muscle_names` and `trajectories`
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,
}

#[derive(Args, Debug)]
struct SelectArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Muscles to display, in order (comma separated or repeated).
    /// Defaults to the first five muscles of the catalog.
    #[arg(short, long, value_delimiter = ',', num_args = 0..)]
    muscles: Option<Vec<String>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum XDirection {
    Ascending,
    Descending,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    select: SelectArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Output file; `-` or omitted writes to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Plot configuration JSON; missing fields take defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the step axis direction from the config
    #[arg(long, value_enum)]
    x_direction: Option<XDirection>,

    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    theme: ThemeArg,

    /// Slowly orbit the camera (HTML only)
    #[arg(long)]
    auto_rotate: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Command::List(args) => handle_list(args),
        Command::Stats(args) => handle_stats(args),
        Command::Render(args) => handle_render(args),
    }
}

fn handle_list(args: DataArgs) -> Result<()> {
    let dataset = load(&args.data)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, name) in dataset.catalog.names().iter().enumerate() {
        writeln!(out, "{:>4}  {}", i, name)?;
    }
    Ok(())
}

fn handle_stats(args: SelectArgs) -> Result<()> {
    let dataset = load(&args.data.data)?;
    let selection = select(&dataset, args.muscles)?;
    println!("{}", DatasetSummary::new(&dataset, &selection)?);
    Ok(())
}

fn handle_render(args: RenderArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PlotConfig::default(),
    };
    if let Some(dir) = args.x_direction {
        config.x_direction = match dir {
            XDirection::Ascending => AxisDirection::Ascending,
            XDirection::Descending => AxisDirection::Descending,
        };
    }
    let builder = TrajectoryPlotBuilder::new(config).context("invalid plot configuration")?;

    let dataset = load(&args.select.data.data)?;
    let selection = select(&dataset, args.select.muscles)?;
    let scene = builder
        .build(&dataset, &selection)
        .context("cannot render the current selection")?;

    let renderer: Box<dyn SceneRenderer> = match args.format {
        OutputFormat::Json => Box::new(JsonRenderer::new(true)),
        OutputFormat::Html => {
            let theme = match args.theme {
                ThemeArg::Dark => Theme::Dark,
                ThemeArg::Light => Theme::Light,
            };
            let mut r = ThreeJsRenderer::new(theme)
                .with_summary(DatasetSummary::new(&dataset, &selection)?);
            r.auto_rotate = args.auto_rotate;
            Box::new(r)
        }
    };
    let rendered = renderer
        .render(&scene)
        .with_context(|| format!("{} renderer failed", renderer.name()))?;

    match args.output.as_deref() {
        Some(path) if path != Path::new("-") => {
            let path = with_default_extension(path, renderer.extension());
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), series = scene.series.len(), "wrote plot");
        }
        _ => {
            io::stdout().lock().write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}

fn load(path: &Path) -> Result<Dataset> {
    load_dataset(path).with_context(|| format!("unable to load data file {}", path.display()))
}

fn load_config(path: &Path) -> Result<PlotConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("malformed config {}", path.display()))
}

/// Resolve the user's muscle choice against the catalog, stopping early on
/// an empty selection or a name the dataset does not have.
fn select(dataset: &Dataset, muscles: Option<Vec<String>>) -> Result<Selection> {
    let selection = match muscles {
        None => Selection::default_for(&dataset.catalog, DEFAULT_SELECTION_SIZE),
        Some(names) => Selection::new(
            names.into_iter().map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
        ),
    };
    let selection = match selection {
        Ok(sel) => sel,
        Err(PlotError::EmptySelection) => {
            warn!("no muscles selected");
            bail!("please select at least one muscle to display");
        }
        Err(e) => return Err(e.into()),
    };
    selection.resolve(&dataset.catalog)?;
    Ok(selection)
}

fn with_default_extension(path: &Path, ext: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(ext)
    }
}
