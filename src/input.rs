use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

// Key codes the board historically used for its accelerators
const KEY_CODE_Z: u32 = 90;
const KEY_CODE_Y: u32 = 89;

/// Input the board reacts to.
///
/// Positions are raw client coordinates relative to the canvas origin; the
/// board scales them into device pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed
    PointerDown { position: Pos2 },
    /// Pointer moved, with or without the button held
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp,
    /// Press and release without dragging
    Click { position: Pos2 },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Global accelerators, active in every mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

impl InputEvent {
    /// Build a key event from a legacy key code (90 = Z, 89 = Y)
    pub fn from_key_code(ctrl: bool, key_code: u32) -> Option<Self> {
        let key = match key_code {
            KEY_CODE_Z => Key::Z,
            KEY_CODE_Y => Key::Y,
            _ => return None,
        };
        let modifiers = if ctrl { Modifiers::CTRL } else { Modifiers::NONE };
        Some(Self::KeyDown { key, modifiers })
    }

    /// The accelerator this event triggers, if any
    pub fn shortcut(&self) -> Option<Shortcut> {
        match self {
            Self::KeyDown { key, modifiers } if modifiers.ctrl || modifiers.command => match key {
                Key::Z => Some(Shortcut::Undo),
                Key::Y => Some(Shortcut::Redo),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Handles converting raw egui input into board [`InputEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    // A press started on the canvas and has not been released yet
    pressed_in_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's egui input against the canvas rectangle
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();
        // A focused text field (group rename) owns the keyboard
        let keyboard_taken = ctx.wants_keyboard_input();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos && (canvas_rect.contains(pos) || self.pressed_in_canvas) {
                    events.push(InputEvent::PointerMove { position: to_local(pos) });
                }
            }
            self.last_pointer_pos = hover;

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = input.pointer.interact_pos().filter(|p| canvas_rect.contains(*p)) {
                    self.pressed_in_canvas = true;
                    events.push(InputEvent::PointerDown { position: to_local(pos) });
                }
            }

            if input.pointer.button_released(PointerButton::Primary) && self.pressed_in_canvas {
                self.pressed_in_canvas = false;
                events.push(InputEvent::PointerUp);

                if input.pointer.primary_clicked() {
                    if let Some(pos) = input.pointer.interact_pos().filter(|p| canvas_rect.contains(*p)) {
                        events.push(InputEvent::Click { position: to_local(pos) });
                    }
                }
            }

            events.extend(key_events(&input.raw.events, keyboard_taken));
        });

        events
    }
}

/// Key presses in `raw`, or none while another widget has keyboard focus
fn key_events(raw: &[egui::Event], keyboard_taken: bool) -> Vec<InputEvent> {
    if keyboard_taken {
        return Vec::new();
    }
    raw.iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => Some(InputEvent::KeyDown {
                key: *key,
                modifiers: *modifiers,
            }),
            _ => None,
        })
        .collect()
}
