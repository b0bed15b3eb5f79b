use thiserror::Error;

use crate::group::GroupId;

/// Errors raised by a drawing surface
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The backend cannot allocate a surface of this size
    #[error("cannot create a {width}x{height} drawing surface")]
    InvalidSize { width: u32, height: u32 },
    /// A snapshot taken from a surface of another size was restored
    #[error("snapshot is {actual:?} but the surface is {expected:?}")]
    SnapshotSizeMismatch {
        expected: [u32; 2],
        actual: [u32; 2],
    },
}

/// Errors raised while loading a [`crate::BoardConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors returned by board operations
#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no group with id {0}")]
    UnknownGroup(GroupId),
    /// `Drawing` is only entered by pressing the pointer in draw mode
    #[error("the drawing mode cannot be set directly")]
    InvalidModeChange,
}
