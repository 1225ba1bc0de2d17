//! Command-line entry point.
//!
//! ```text
//! qjulia [CONFIG.json] [-o OUTPUT_DIR]
//! ```
//!
//! Without a config file the built-in parameters are used; the output
//! directory defaults to the current directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "qjulia")]
#[command(about = "Sample a quaternion Julia set into a stack of grayscale PNG slices")]
struct Cli {
    /// JSON parameter file; built-in defaults are used when omitted
    config: Option<PathBuf>,

    /// Directory receiving the manifest and the density slices
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let params = match qjulia::load_params_or_default(cli.config.as_deref()) {
        Ok(params) => params,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match qjulia::generate(params, &cli.output) {
        Ok(report) if report.is_complete() => ExitCode::SUCCESS,
        Ok(report) => {
            for failure in &report.failures {
                log::error!("slice {} not written: {}", failure.index, failure.error);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
