// CLI definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pixelgrid")]
#[command(author, version, about = "Streams images and GIFs to a wall of tiled WS281x LED panels")]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML config file (panel geometry + strip signal parameters)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stream every image in a directory to the panel wall in an endless loop
    Run(RunArgs),

    /// Decode one animation into named-color listings, PNG rasters, and CSV dumps
    #[command(visible_alias = "dump")]
    Export {
        /// Animation or image file to decode
        file: PathBuf,
        /// Output directory (default: frames_<file stem>)
        #[arg(value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Directory of images to rotate through
    #[arg(long, default_value = "./images", value_name = "DIR")]
    pub images: PathBuf,

    /// Clear the display on exit
    #[arg(short, long)]
    pub clear: bool,

    /// Override the configured brightness (0-255)
    #[arg(long, value_name = "N")]
    pub brightness: Option<u8>,

    /// Treat an unreadable file as fatal instead of skipping it
    #[arg(long)]
    pub halt_on_decode_error: bool,

    /// Never probe hardware; render into the no-op strip
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            images: PathBuf::from("./images"),
            clear: false,
            brightness: None,
            halt_on_decode_error: false,
            dry_run: false,
        }
    }
}
