use std::path::PathBuf;

use clap::Parser;
use rolo::storage::DEFAULT_STORAGE_FILE;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "Persistent personal contact directory", long_about = None)]
pub struct Cli {
    /// Address book file to load on start and save on every change
    #[arg(short, long, default_value = DEFAULT_STORAGE_FILE)]
    pub file: PathBuf,
}
