use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    #[error("frame rate must be at least one frame per second")]
    ZeroFps,
}

/// Settings for one generation run. Built once and never changed afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// pixels per cell edge
    pub cell_size: u32,
    pub columns: usize,
    pub rows: usize,
    /// frame pacing target, one generator step per frame
    pub fps: u32,
}

impl Config {
    pub const DEFAULT: Config = Config {
        cell_size: 24,
        columns: 20,
        rows: 20,
        fps: 80,
    };

    pub fn new(cell_size: u32, columns: usize, rows: usize, fps: u32) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if fps == 0 {
            return Err(ConfigError::ZeroFps);
        }

        Ok(Self {
            cell_size,
            columns,
            rows,
            fps,
        })
    }

    pub fn with_fps(self, fps: u32) -> Result<Self, ConfigError> {
        Self::new(self.cell_size, self.columns, self.rows, fps)
    }

    /// surface width in pixels
    pub fn width(&self) -> u32 {
        self.columns as u32 * self.cell_size
    }

    /// surface height in pixels
    pub fn height(&self) -> u32 {
        self.rows as u32 * self.cell_size
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
