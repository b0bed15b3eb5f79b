//! The drawing board: owns the surface, the committed paths, the groups and the
//! snapshot history, and routes [`InputEvent`]s according to the current
//! [`InputMode`].
//!
//! ```text
//! Draw --pointer down--> Drawing --pointer move--> Drawing --pointer up--> Draw
//! Select --click / hover--> Select
//! any --Ctrl+Z / Ctrl+Y--> undo / redo
//! ```

use egui::Pos2;
use log::{debug, error, info};

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::group::{GroupId, GroupRegistry, PathGroup};
use crate::history::SnapshotHistory;
use crate::input::{InputEvent, Shortcut};
use crate::renderer::Renderer;
use crate::smoother::StrokeSmoother;
use crate::state::InputMode;
use crate::stroke::{ActiveStroke, StrokePath};
use crate::surface::{PixelCanvas, RasterSurface, Snapshot};

#[derive(Debug)]
pub struct Board<S: RasterSurface = PixelCanvas> {
    surface: S,
    config: BoardConfig,
    renderer: Renderer,
    mode: InputMode,
    smoother: StrokeSmoother,
    active_stroke: Option<ActiveStroke>,
    paths: Vec<StrokePath>,
    groups: GroupRegistry,
    history: SnapshotHistory,
}

impl Board<PixelCanvas> {
    /// Creates a board with a `width × height` device-pixel canvas
    pub fn new(width: u32, height: u32, config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let surface = PixelCanvas::new(width, height)?;
        Self::with_surface(surface, config)
    }

    /// Creates a board for a container of the given client size, oversampled
    /// by the configured magnification
    pub fn from_client_size(width: f32, height: f32, config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let magnification = config.magnification;
        let scale = |v: f32| (v * magnification).round().max(0.0) as u32;
        Self::new(scale(width), scale(height), config)
    }
}

impl<S: RasterSurface> Board<S> {
    /// Creates a board drawing onto `surface`.
    ///
    /// The board starts in draw mode with one group (`group1`) active and a
    /// history holding the current surface as its only entry.
    pub fn with_surface(surface: S, config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let mut groups = GroupRegistry::new();
        groups.create(None);

        let history = SnapshotHistory::new(surface.snapshot());
        let [width, height] = surface.size();
        info!("Board created: {width}x{height} device pixels");

        Ok(Self {
            renderer: Renderer::new(&config),
            surface,
            config,
            mode: InputMode::default(),
            smoother: StrokeSmoother::new(),
            active_stroke: None,
            paths: Vec::new(),
            groups,
            history,
        })
    }

    /// Convert a raw client position to device pixels
    pub fn to_device(&self, raw: Pos2) -> Pos2 {
        Pos2::new(raw.x * self.config.magnification, raw.y * self.config.magnification)
    }

    /// Dispatch one input event. Events must be fed in arrival order.
    pub fn handle_event(&mut self, event: InputEvent) {
        if let Some(shortcut) = event.shortcut() {
            match shortcut {
                Shortcut::Undo => self.undo(),
                Shortcut::Redo => self.redo(),
            }
            return;
        }

        match (self.mode, event) {
            (InputMode::Draw, InputEvent::PointerDown { position }) => self.begin_stroke(position),
            (InputMode::Drawing, InputEvent::PointerMove { position }) => self.extend_stroke(position),
            (InputMode::Drawing, InputEvent::PointerUp) => self.finish_stroke(),
            (InputMode::Select, InputEvent::PointerMove { position }) => self.hover(position),
            (InputMode::Select, InputEvent::Click { position }) => self.click(position),
            (mode, event) => debug!("Ignoring {event:?} in {mode} mode"),
        }
    }

    pub fn pointer_down(&mut self, position: Pos2) {
        self.handle_event(InputEvent::PointerDown { position });
    }

    pub fn pointer_move(&mut self, position: Pos2) {
        self.handle_event(InputEvent::PointerMove { position });
    }

    pub fn pointer_up(&mut self) {
        self.handle_event(InputEvent::PointerUp);
    }

    pub fn click(&mut self, position: Pos2) {
        if self.mode != InputMode::Select {
            debug!("Ignoring click in {} mode", self.mode);
            return;
        }

        let point = self.to_device(position);
        let hits: Vec<usize> = (0..self.paths.len())
            .rev()
            .filter(|&i| self.renderer.hit_test(&self.surface, &self.paths[i], point))
            .collect();

        let toggled = self.renderer.redraw(&mut self.surface, &mut self.paths, |i, _| hits.contains(&i));
        info!("Toggled {toggled} path(s) at {point:?}");
        self.commit();
    }

    /// Step back one snapshot; a no-op at the initial blank entry
    pub fn undo(&mut self) {
        let Some(snapshot) = self.history.undo_target() else {
            debug!("Nothing to undo");
            return;
        };
        if restore(&mut self.surface, snapshot) {
            self.history.undo();
            info!("Undo to history entry {}", self.history.index());
        }
    }

    /// Step forward one snapshot; a no-op at the newest entry
    pub fn redo(&mut self) {
        let Some(snapshot) = self.history.redo_target() else {
            debug!("Nothing to redo");
            return;
        };
        if restore(&mut self.surface, snapshot) {
            self.history.redo();
            info!("Redo to history entry {}", self.history.index());
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switch tools. A stroke in progress is finished first.
    pub fn set_mode(&mut self, mode: InputMode) -> Result<(), BoardError> {
        if mode == InputMode::Drawing {
            return Err(BoardError::InvalidModeChange);
        }
        if self.mode == InputMode::Drawing {
            self.finish_stroke();
        }
        if self.mode != mode {
            info!("Mode: {} -> {}", self.mode, mode);
            self.mode = mode;
        }
        Ok(())
    }

    /// Create a group, which becomes the group new strokes are assigned to
    pub fn create_group(&mut self, label: Option<&str>) -> GroupId {
        let id = self.groups.create(label);
        info!("Created group {id}");
        id
    }

    /// Make `id` the active group and toggle the selection of all its paths
    pub fn select_group(&mut self, id: GroupId) -> Result<(), BoardError> {
        if !self.groups.set_active(id) {
            return Err(BoardError::UnknownGroup(id));
        }
        let toggled = self
            .renderer
            .redraw(&mut self.surface, &mut self.paths, |_, path| path.group() == Some(id));
        info!("Selected group {id}, toggled {toggled} path(s)");
        Ok(())
    }

    pub fn rename_group(&mut self, id: GroupId, label: &str) -> Result<(), BoardError> {
        if self.groups.rename(id, label) {
            Ok(())
        } else {
            Err(BoardError::UnknownGroup(id))
        }
    }

    pub fn groups(&self) -> impl Iterator<Item = &PathGroup> {
        self.groups.iter()
    }

    pub fn group(&self, id: GroupId) -> Option<&PathGroup> {
        self.groups.get(id)
    }

    pub fn active_group(&self) -> Option<GroupId> {
        self.groups.active()
    }

    /// Redraw every path, toggling those `toggle` picks
    pub fn redraw<F>(&mut self, toggle: F) -> usize
    where
        F: FnMut(usize, &StrokePath) -> bool,
    {
        self.renderer.redraw(&mut self.surface, &mut self.paths, toggle)
    }

    /// Committed paths in drawing order
    pub fn paths(&self) -> &[StrokePath] {
        &self.paths
    }

    pub fn active_stroke(&self) -> Option<&ActiveStroke> {
        self.active_stroke.as_ref()
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn snapshot(&self) -> Snapshot {
        self.surface.snapshot()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    fn begin_stroke(&mut self, position: Pos2) {
        let point = self.to_device(position);
        self.smoother.begin(point);
        self.active_stroke = Some(ActiveStroke::begin(point));
        self.mode = InputMode::Drawing;
    }

    fn extend_stroke(&mut self, position: Pos2) {
        let point = self.to_device(position);
        let Some(segment) = self.smoother.push(point) else {
            return;
        };
        if let Some(stroke) = &mut self.active_stroke {
            stroke.extend(segment);
            self.renderer.stroke_segment(&mut self.surface, &segment);
        }
    }

    fn finish_stroke(&mut self) {
        self.mode = InputMode::Draw;
        self.smoother.clear();
        let Some(stroke) = self.active_stroke.take() else {
            return;
        };

        let path = stroke.finish(self.groups.active());
        info!(
            "Stroke {} finished with {} segment(s)",
            path.id(),
            path.geometry().segments().len()
        );
        self.paths.push(path);
        self.commit();
    }

    fn hover(&mut self, position: Pos2) {
        if !self.config.toggle_on_hover {
            return;
        }
        let point = self.to_device(position);
        let hits: Vec<bool> = self
            .paths
            .iter()
            .map(|path| self.renderer.hit_test(&self.surface, path, point))
            .collect();
        if hits.contains(&true) {
            self.renderer.redraw(&mut self.surface, &mut self.paths, |i, _| hits[i]);
        }
    }

    fn commit(&mut self) {
        self.history.commit(self.surface.snapshot());
        debug!("History at {} of {}", self.history.index(), self.history.len());
    }
}

// The history only moves once the surface shows the target entry
fn restore<S: RasterSurface>(surface: &mut S, snapshot: &Snapshot) -> bool {
    match surface.restore(snapshot) {
        Ok(()) => true,
        Err(err) => {
            error!("Failed to restore snapshot: {err}");
            false
        }
    }
}
