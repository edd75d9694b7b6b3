#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Char,
    Word,
    Line,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub direction: Direction,
    pub granularity: Granularity,
    pub extend_selection: bool,
}

impl Movement {
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            granularity: Granularity::Char,
            extend_selection: false,
        }
    }

    pub const fn by(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub const fn extending(mut self) -> Self {
        self.extend_selection = true;
        self
    }
}

/// Discrete intents produced by the input layer.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    Move(Movement),
    InsertText(String),
    Newline,
    Backspace { word: bool },
    Delete { word: bool },
    Indent,
    Unindent,
    Undo,
    Redo,
    SelectAll,
    MouseDown { x: f32, y: f32, extend: bool },
    MouseDrag { x: f32, y: f32 },
    Wheel { delta_y: f32 },
    Zoom { font_size: f32 },
    Resize { width: f32, height: f32 },
    Load { text: String },
}
