mod config;
mod replay;
mod script;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use magnifier::state::ZoomMode;
use magnifier::units::Unit;

use crate::config::{ConfigOverrides, MagnifierConfig};
use crate::replay::{ReplayError, ReplayOptions};

#[derive(Parser, Debug)]
#[command(name = "magnizoom", about = "Replay magnifier input events and print draw plans")]
struct Cli {
    #[arg(long, env = "MAGNIZOOM_INPUT", default_value = "-", help = "Event script path, or - for stdin")]
    input: String,

    #[arg(long, env = "MAGNIZOOM_CONFIG", help = "JSON file with initial parameters")]
    config: Option<PathBuf>,

    #[arg(long, env = "MAGNIZOOM_ZOOM_MODE", help = "LENS or COVER")]
    zoom_mode: Option<ZoomMode>,

    #[arg(long, env = "MAGNIZOOM_ZOOM_FACTOR")]
    zoom_factor: Option<f64>,

    #[arg(long, env = "MAGNIZOOM_MIN_ZOOM")]
    min_zoom: Option<f64>,

    #[arg(long, env = "MAGNIZOOM_MAX_ZOOM")]
    max_zoom: Option<f64>,

    #[arg(long)]
    lens_width: Option<f64>,

    #[arg(long)]
    lens_height: Option<f64>,

    #[arg(long, help = "NORMALIZED or PIXEL")]
    lens_unit: Option<Unit>,

    #[arg(long, help = "NORMALIZED or PIXEL")]
    center_unit: Option<Unit>,

    #[arg(long, default_value_t = false, help = "Ignore pointer and wheel events")]
    ignore_mouse: bool,

    #[arg(long, default_value_t = false, help = "Do not feed reported values back into the bindings")]
    no_echo: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            zoom_mode: self.zoom_mode,
            zoom_factor: self.zoom_factor,
            min_zoom_factor: self.min_zoom,
            max_zoom_factor: self.max_zoom,
            lens_width: self.lens_width,
            lens_height: self.lens_height,
            lens_size_unit: self.lens_unit,
            zoom_center_unit: self.center_unit,
            ignore_mouse: self.ignore_mouse,
        }
    }
}

fn main() -> Result<(), ReplayError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => MagnifierConfig::from_file(path)?,
        None => MagnifierConfig::default(),
    };
    config.apply_overrides(&cli.overrides());
    config.validate()?;
    tracing::info!(mode = %config.zoom_mode, factor = config.zoom_factor, input = %cli.input, "magnizoom replay starting");

    let mut core = config.into_core();
    let options = ReplayOptions { echo: !cli.no_echo };
    let stdout = io::stdout().lock();
    let summary = if cli.input == "-" {
        replay::run(&mut core, io::stdin().lock(), stdout, options)?
    } else {
        let file = File::open(&cli.input)?;
        replay::run(&mut core, BufReader::new(file), stdout, options)?
    };

    tracing::info!(events = summary.events, renders = summary.renders, "replay finished");
    Ok(())
}
