use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Nests the parts of a JSON job on a stock sheet and writes the resulting layout
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Job file listing the part sketches to nest
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder the solution is written to, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Nesting configuration, defaults are used if omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
