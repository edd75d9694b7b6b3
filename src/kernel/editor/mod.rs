//! Editor domain: headless state + actions.

mod action;
mod caret;
mod edit;
mod frame;
mod metadata;
mod mouse;
mod movement;
mod reducer;
mod state;
mod syntax;
mod viewport;

pub use action::{Direction, EditorAction, Granularity, Movement};
pub use caret::CaretBlink;
pub use frame::RenderFrame;
pub use metadata::DocumentMetadata;
pub use state::{EditorMouseState, EditorState};
pub use syntax::{tokenize, LanguageId, Token, TokenKind};
pub use viewport::{ScrollDelta, Viewport, MAX_FONT_SIZE, MIN_FONT_SIZE};
