/// Caret blink phase. The host toggles it on a fixed interval; cursor moves
/// force it visible and swallow the next toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretBlink {
    visible: bool,
    skip_next_toggle: bool,
}

impl CaretBlink {
    pub fn new() -> Self {
        Self {
            visible: true,
            skip_next_toggle: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn force_visible(&mut self) {
        self.visible = true;
        self.skip_next_toggle = true;
    }

    /// Returns the visibility after the tick.
    pub fn toggle(&mut self) -> bool {
        if self.skip_next_toggle {
            self.skip_next_toggle = false;
        } else {
            self.visible = !self.visible;
        }
        self.visible
    }
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new()
    }
}
