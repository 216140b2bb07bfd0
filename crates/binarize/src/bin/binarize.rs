use std::{path::PathBuf, process::ExitCode, time::Instant};

use binarize::{io, BinarizeConfig, Parameters, TrSinghParams};
use clap::{ArgAction, Parser};
use log::info;

#[derive(Parser, Debug)]
#[command(
    name = "binarize",
    version,
    about = "Binarize a grayscale image with T.R. Singh local adaptive thresholding"
)]
struct Cli {
    /// Input image. Overrides `input_path` from `--config`.
    input: Option<PathBuf>,

    /// Output image; the format follows the extension.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Window side length in pixels (default 75).
    #[arg(short, long)]
    window: Option<usize>,

    /// Contrast constant (default 0.2).
    #[arg(short, long, allow_negative_numbers = true)]
    k: Option<f64>,

    /// Extra `name=value` parameter, may be repeated.
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,

    /// JSON run config.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Emit JSON-formatted tracing events.
    #[cfg(feature = "tracing")]
    #[arg(long)]
    json_logs: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(cli: &Cli) {
    let level = binarize::core::level_from_verbosity(cli.verbose);
    if let Err(err) = binarize::core::init_with_level(level) {
        eprintln!("failed to install logger: {err}");
    }
}

#[cfg(feature = "tracing")]
fn init_logging(cli: &Cli) {
    let _ = tracing_log::LogTracer::init();
    binarize::core::init_tracing(cli.json_logs);
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let t_total = Instant::now();

    let cfg = match cli.config.as_ref() {
        Some(path) => BinarizeConfig::load_json(path)?,
        None => BinarizeConfig::default(),
    };

    let input = cli
        .input
        .clone()
        .or_else(|| cfg.input_path.as_ref().map(PathBuf::from))
        .ok_or("no input image: pass INPUT or set input_path in --config")?;
    let output = cli.output.clone().unwrap_or_else(|| cfg.output_path());

    let params = resolve_params(&cli, &cfg)?;
    let effective = TrSinghParams::from_parameters(&params);
    info!("window={} k={}", effective.window, effective.k);

    io::binarize_file(&input, &output, &params)?;
    info!("done in {} ms", t_total.elapsed().as_millis());
    Ok(())
}

/// Defaults < config file < `--param` < `--window` / `-k`.
fn resolve_params(cli: &Cli, cfg: &BinarizeConfig) -> Result<Parameters, binarize::BinarizeError> {
    let mut params = cfg.params.clone();
    for raw in &cli.params {
        params.parse_assignment(raw)?;
    }
    if let Some(window) = cli.window {
        params.set("window", window);
    }
    if let Some(k) = cli.k {
        params.set("k", k);
    }
    Ok(params)
}
