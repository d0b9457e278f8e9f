//! cinefind - find movies from the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use cinefind_core::prelude::*;

/// cinefind - search the TMDB catalog and see what others search for
#[derive(Parser, Debug)]
#[command(name = "cinefind", version)]
#[command(about = "Find movies you'll enjoy without the hassle", long_about = None)]
struct Args {
    /// Path to a config.toml (defaults to <config_dir>/cinefind/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    cinefind_core::logging::init()?;

    info!("cinefind {} starting", env!("CARGO_PKG_VERSION"));

    let result = cinefind_tui::run(args.config.as_deref()).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("cinefind exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = Args::try_parse_from(["cinefind"]).unwrap();
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_config_path() {
        let args = Args::try_parse_from(["cinefind", "--config", "/tmp/cinefind.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/cinefind.toml")));
    }
}
