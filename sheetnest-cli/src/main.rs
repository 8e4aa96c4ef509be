use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use thousands::Separable;

use sheetnest_cli::config::NestConfig;
use sheetnest_cli::io::cli::Cli;
use sheetnest_cli::io::output::NestOutput;
use sheetnest_cli::{EPOCH, io, job};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            NestConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed NestConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file name is not valid unicode")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_job = io::read_job(&args.input_file)?;
    let outcome = job::nest_job(&ext_job, &config)?;

    info!(
        "[MAIN] {} copies placed, {:.3}% utilization, {:?} elapsed",
        outcome.result.n_placed().separate_with_commas(),
        outcome.result.utilization_percent,
        EPOCH.elapsed()
    );
    info!("[MAIN] {}", outcome.message);

    let output = NestOutput::new(config, &outcome);
    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));

    io::write_json(&output, &solution_path)
}
