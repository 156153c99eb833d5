//! Engine configuration
//!
//! Board size, the speed curve and the scoring unit. Defaults reproduce the
//! classic 10x20 game that starts at one row per second.

use thiserror::Error;

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, DROP_ACCELERATION_MS, INITIAL_DROP_INTERVAL_MS, LINE_CLEAR_POINTS,
    MIN_DROP_INTERVAL_MS,
};

/// Smallest accepted board side; the I piece needs 4 cells either way.
pub const MIN_BOARD_SIDE: u8 = 4;

/// Largest accepted board side
pub const MAX_BOARD_SIDE: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {0} is outside {}..={}", MIN_BOARD_SIDE, MAX_BOARD_SIDE)]
    Width(u8),
    #[error("board height {0} is outside {}..={}", MIN_BOARD_SIDE, MAX_BOARD_SIDE)]
    Height(u8),
    #[error("minimum drop interval must be in 1..={initial}ms, got {min}ms")]
    MinInterval { min: u32, initial: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u8,
    pub height: u8,
    pub initial_drop_interval_ms: u32,
    pub min_drop_interval_ms: u32,
    /// Interval reduction per cleared line
    pub drop_acceleration_ms: u32,
    pub line_clear_points: u32,
    /// Piece factory seed
    pub seed: u32,
}

impl EngineConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let side = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        if !side.contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !side.contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        if self.min_drop_interval_ms == 0
            || self.min_drop_interval_ms > self.initial_drop_interval_ms
        {
            return Err(ConfigError::MinInterval {
                min: self.min_drop_interval_ms,
                initial: self.initial_drop_interval_ms,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            initial_drop_interval_ms: INITIAL_DROP_INTERVAL_MS,
            min_drop_interval_ms: MIN_DROP_INTERVAL_MS,
            drop_acceleration_ms: DROP_ACCELERATION_MS,
            line_clear_points: LINE_CLEAR_POINTS,
            seed: 1,
        }
    }
}
