use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spdlog::{error, info, warn};

use moltsync::generator::generate;
use moltsync::logger::configure_logger;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "moltsync.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Cached post data (JSON). Overrides paths.data_file
    #[arg(short, long)]
    data_file: Option<String>,

    /// Directory the pages are written to. Overrides paths.output_dir
    #[arg(short, long)]
    out_dir: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match open_config(args.config_path.map(PathBuf::from)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("Please run moltsync --help");
            return ExitCode::FAILURE;
        }
    };

    if let Some(data_file) = args.data_file {
        config.paths.data_file = PathBuf::from(data_file);
    }
    if let Some(out_dir) = args.out_dir {
        config.paths.output_dir = PathBuf::from(out_dir);
    }

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match generate(&config) {
        Ok(summary) => {
            info!("Wrote {} files to {}", summary.written.len(), config.paths.output_dir.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Error: {:#}", err);
            spdlog::default_logger().flush();
            ExitCode::FAILURE
        }
    }
}
