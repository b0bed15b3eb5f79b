/// What pointer input currently does on the board
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Idle, the next pointer press starts a stroke
    #[default]
    Draw,
    /// Pointer held down, samples are smoothed into the active stroke
    Drawing,
    /// Clicks (and optionally hovering) toggle path selection
    Select,
    /// Reserved; pointer input is ignored
    Eraser,
}

impl InputMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Drawing => "drawing",
            Self::Select => "select",
            Self::Eraser => "eraser",
        }
    }

    /// Modes a user can pick from the toolbar
    pub fn selectable() -> [InputMode; 3] {
        [Self::Draw, Self::Select, Self::Eraser]
    }

    /// Draw and Drawing show as the same tool
    pub fn is_drawing_tool(&self) -> bool {
        matches!(self, Self::Draw | Self::Drawing)
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
