#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod group;
pub mod history;
pub mod input;
mod panels;
pub mod renderer;
pub mod smoother;
pub mod state;
pub mod stroke;
pub mod surface;

pub use app::SketchApp;
pub use board::Board;
pub use config::BoardConfig;
pub use error::{BoardError, CanvasError, ConfigError};
pub use group::{GroupId, PathGroup};
pub use history::SnapshotHistory;
pub use input::{InputEvent, InputHandler, Shortcut};
pub use renderer::{Renderer, StrokeStyle, StyleKind};
pub use smoother::StrokeSmoother;
pub use state::InputMode;
pub use stroke::{ActiveStroke, PathCommand, QuadSegment, StrokeGeometry, StrokePath};
pub use surface::{PixelCanvas, RasterSurface, Snapshot};
