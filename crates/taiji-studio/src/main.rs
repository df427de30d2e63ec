mod app;
mod headless;
mod snapshot;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use winit::dpi::LogicalSize;

use taiji_engine::canvas::Pixmap;
use taiji_engine::coords::Viewport;
use taiji_engine::device::GpuInit;
use taiji_engine::logging::{LoggingConfig, init_logging};
use taiji_engine::time::FixedStep;
use taiji_engine::window::{Runtime, RuntimeConfig};

use app::StudioApp;
use headless::Pace;
use view::View;

/// Taiji diagrams, particle field and concept plates.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Surface width in pixels
    #[arg(long, global = true, default_value = "800")]
    width: u32,

    /// Surface height in pixels
    #[arg(long, global = true, default_value = "600")]
    height: u32,

    /// Seed for the particle field; random when omitted
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. `debug` or `taiji_sketch=trace`
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a window animating a view
    Show {
        #[arg(value_enum)]
        view: View,
    },

    /// Render frames offline and save the last one as PNG
    Snapshot {
        #[arg(value_enum)]
        view: View,

        #[arg(short, long)]
        output: PathBuf,

        /// Frames to run before saving
        #[arg(long, default_value = "1")]
        frames: u64,

        /// Keep the alpha channel instead of flattening onto the backdrop
        #[arg(long)]
        transparent: bool,
    },

    /// Drive a view without a window and report the frame rate
    Headless {
        #[arg(value_enum)]
        view: View,

        #[arg(long, default_value = "300")]
        frames: u64,

        #[arg(long, default_value = "60")]
        fps: u32,

        #[arg(long, value_enum, default_value_t = Pace::Interval)]
        pace: Pace,

        /// Save the final frame as PNG
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let viewport = Viewport::new(cli.width as f32, cli.height as f32);

    match cli.command {
        Command::Show { view } => {
            let config = RuntimeConfig {
                title: format!("taiji · {view}"),
                initial_size: LogicalSize::new(cli.width as f64, cli.height as f64),
            };
            Runtime::run(config, GpuInit::default(), StudioApp::new(view, cli.seed))
        }

        Command::Snapshot { view, output, frames, transparent } => {
            let mut sketch = view.build(viewport, cli.seed)?;
            let mut pixmap = Pixmap::new(cli.width, cli.height)?;
            headless::drive(sketch.as_mut(), &mut pixmap, FixedStep::new(60), frames.max(1));

            let backdrop = (!transparent).then(|| view.backdrop());
            snapshot::write_png(&pixmap, backdrop, &output)
        }

        Command::Headless { view, frames, fps, pace, output } => {
            let mut sketch = view.build(viewport, cli.seed)?;
            let mut pixmap = Pixmap::new(cli.width, cli.height)?;
            let source = pace.source(fps).context("failed to start the frame source")?;

            info!("driving {view} for {frames} frames at {fps} fps ({pace:?})");
            headless::drive(sketch.as_mut(), &mut pixmap, source, frames);

            match output {
                Some(path) => snapshot::write_png(&pixmap, Some(view.backdrop()), &path),
                None => Ok(()),
            }
        }
    }
}
