use egui::{ColorImage, Rect, TextureHandle, TextureOptions};

use crate::board::Board;
use crate::config::BoardConfig;
use crate::group::GroupId;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::state::InputMode;

/// Group label being edited in the tools panel
#[derive(Debug, Clone)]
pub(crate) struct GroupRename {
    pub id: GroupId,
    pub text: String,
    pub focused: bool,
}

pub struct SketchApp {
    config: BoardConfig,
    // Created on the first frame, once the canvas size is known
    board: Option<Board>,
    input: InputHandler,
    texture: Option<TextureHandle>,
    texture_dirty: bool,
    pub(crate) renaming: Option<GroupRename>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: BoardConfig) -> Self {
        Self {
            config,
            board: None,
            input: InputHandler::new(),
            texture: None,
            texture_dirty: true,
            renaming: None,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Create the board for a canvas of `rect`'s size if there is none yet
    pub(crate) fn ensure_board(&mut self, rect: Rect) {
        if self.board.is_some() {
            return;
        }
        match Board::from_client_size(rect.width(), rect.height(), self.config.clone()) {
            Ok(board) => {
                self.board = Some(board);
                self.texture_dirty = true;
            }
            Err(err) => log::error!("Failed to create board for {:?}: {err}", rect.size()),
        }
    }

    pub(crate) fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        let events = self.input.process_input(ctx, canvas_rect);
        if events.is_empty() {
            return;
        }
        if let Some(board) = &mut self.board {
            for event in events {
                board.handle_event(event);
            }
            self.texture_dirty = true;
        }
    }

    pub(crate) fn set_mode(&mut self, mode: InputMode) {
        if let Some(board) = &mut self.board {
            if let Err(err) = board.set_mode(mode) {
                log::warn!("Cannot switch to {mode}: {err}");
            }
            self.texture_dirty = true;
        }
    }

    pub(crate) fn undo(&mut self) {
        if let Some(board) = &mut self.board {
            board.undo();
            self.texture_dirty = true;
        }
    }

    pub(crate) fn redo(&mut self) {
        if let Some(board) = &mut self.board {
            board.redo();
            self.texture_dirty = true;
        }
    }

    pub(crate) fn create_group(&mut self) {
        if let Some(board) = &mut self.board {
            board.create_group(None);
        }
    }

    pub(crate) fn select_group(&mut self, id: GroupId) {
        if let Some(board) = &mut self.board {
            if let Err(err) = board.select_group(id) {
                log::warn!("{err}");
            }
            self.texture_dirty = true;
        }
    }

    pub(crate) fn finish_rename(&mut self) {
        let (Some(rename), Some(board)) = (self.renaming.take(), &mut self.board) else {
            return;
        };
        if let Err(err) = board.rename_group(rename.id, &rename.text) {
            log::warn!("{err}");
        }
    }

    /// The canvas texture, re-uploaded when the board changed
    pub(crate) fn canvas_texture(&mut self, ctx: &egui::Context) -> Option<&TextureHandle> {
        let board = self.board.as_ref()?;
        if self.texture_dirty || self.texture.is_none() {
            let image = board.snapshot().to_image();
            let size = [image.width() as usize, image.height() as usize];
            let color_image = ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            if let Some(texture) = &mut self.texture {
                texture.set(color_image, TextureOptions::LINEAR);
            } else {
                self.texture = Some(ctx.load_texture("sketch_board", color_image, TextureOptions::LINEAR));
            }
            self.texture_dirty = false;
        }
        self.texture.as_ref()
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
