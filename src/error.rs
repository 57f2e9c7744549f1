//! Error taxonomy
//!
//! Startup failures are fatal and map to distinct process exit codes.
//! Audio and config failures are recoverable and only degrade the game.

use thiserror::Error;

/// Fatal errors raised while bringing up the platform and assets
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to initialize platform: {0}")]
    Platform(String),
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create renderer: {0}")]
    Renderer(String),
    #[error("failed to load image {path}: {reason}")]
    ImageLoad { path: String, reason: String },
    #[error("failed to create texture from {path}: {reason}")]
    Texture { path: String, reason: String },
    #[error("failed to populate level: {0}")]
    Level(#[from] PlacementError),
}

impl StartupError {
    /// Process exit code for this failure category
    pub fn exit_code(&self) -> i32 {
        match self {
            StartupError::Platform(_) => 4,
            StartupError::Window(_) => 5,
            StartupError::Renderer(_) => 6,
            StartupError::ImageLoad { .. } => 7,
            StartupError::Texture { .. } => 8,
            StartupError::Level(_) => 1,
        }
    }
}

/// Non-fatal audio failures (the game continues without the sound)
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio device unavailable: {0}")]
    Device(String),
    #[error("failed to load sound {path}: {reason}")]
    Load { path: String, reason: String },
}

/// Settings/level file failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid level: {0}")]
    InvalidLevel(String),
}

/// Placement search failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("arena saturated: no free position after {attempts} attempts")]
    ArenaSaturated { attempts: u32 },
}
