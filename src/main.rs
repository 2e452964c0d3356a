//! Blind Vision - terminal companion for the smart glasses and smart stick
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use blind_vision::core::prelude::*;
use blind_vision::engine::config;
use blind_vision::Options;
use clap::Parser;

/// Blind Vision - accessible settings for the smart glasses and smart stick
#[derive(Parser, Debug)]
#[command(name = "bvision")]
#[command(about = "Accessible settings screen for the Blind Vision devices", long_about = None)]
struct Args {
    /// Directory holding config.toml and layout.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Email of the signed-in user
    #[arg(long, value_name = "EMAIL")]
    user: Option<String>,

    /// Simulate device connections, flipping one every MS milliseconds
    #[arg(
        long,
        value_name = "MS",
        num_args = 0..=1,
        default_missing_value = "2000",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    simulate_devices: Option<u64>,

    /// Write default config.toml and layout.toml, then exit
    #[arg(long)]
    init: bool,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            config_dir: args.config_dir,
            dark: args.dark,
            user: args.user,
            simulate_devices: args.simulate_devices,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init {
        let dir = args
            .config_dir
            .clone()
            .unwrap_or_else(config::default_config_dir);
        config::init_config_dir(&dir)?;
        eprintln!("Wrote default configuration to {}", dir.display());
        return Ok(());
    }

    blind_vision::run(args.into()).await
}
