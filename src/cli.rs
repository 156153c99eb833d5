//! Command-line arguments and logging setup.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::EngineConfig;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, INITIAL_DROP_INTERVAL_MS};

#[derive(Parser, Debug, Clone)]
#[command(name = "falling-blocks", version, about = "Falling-block puzzle game for the terminal")]
pub struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = BOARD_WIDTH)]
    pub width: u8,

    /// Board height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    pub height: u8,

    /// Piece sequence seed (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Gravity interval at the start of a game, in milliseconds
    #[arg(long = "initial-interval", default_value_t = INITIAL_DROP_INTERVAL_MS)]
    pub initial_interval_ms: u32,

    /// Write logs to this file (the terminal is used by the game). Level comes from RUST_LOG.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Engine configuration; `fallback_seed` is used when `--seed` is absent.
    pub fn engine_config(&self, fallback_seed: u32) -> EngineConfig {
        EngineConfig {
            width: self.width,
            height: self.height,
            initial_drop_interval_ms: self.initial_interval_ms,
            seed: self.seed.unwrap_or(fallback_seed),
            ..EngineConfig::default()
        }
    }
}

/// Install `env_logger` writing to `path`. Without a path logging stays off.
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_board() {
        let args = Args::try_parse_from(["falling-blocks"]).unwrap();
        let cfg = args.engine_config(99);
        assert_eq!(cfg.width, 10);
        assert_eq!(cfg.height, 20);
        assert_eq!(cfg.initial_drop_interval_ms, 1000);
        assert_eq!(cfg.seed, 99);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let args = Args::try_parse_from([
            "falling-blocks",
            "--width",
            "12",
            "--height",
            "24",
            "--seed",
            "7",
            "--initial-interval",
            "800",
        ])
        .unwrap();
        let cfg = args.engine_config(99);
        assert_eq!((cfg.width, cfg.height), (12, 24));
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.initial_drop_interval_ms, 800);
        assert_eq!(cfg.min_drop_interval_ms, 50);
    }

    #[test]
    fn rejects_non_numeric_width() {
        assert!(Args::try_parse_from(["falling-blocks", "--width", "wide"]).is_err());
    }

    #[test]
    fn no_log_file_means_no_logger() {
        assert!(init_logging(None).is_ok());
    }

    #[test]
    fn log_file_is_created_and_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("falling-blocks.log");

        init_logging(Some(&path)).unwrap();
        assert!(path.exists());

        log::error!("log file smoke line");
        log::logger().flush();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("log file smoke line"));

        // The global logger can only be installed once.
        assert!(init_logging(Some(&dir.path().join("second.log"))).is_err());
    }

    #[test]
    fn unwritable_log_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("game.log");

        let err = init_logging(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("create log file"));
    }
}
