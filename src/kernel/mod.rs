//! Headless editor core (state/action) plus its services.

pub mod editor;
pub mod services;
pub mod theme;

pub use editor::{EditorAction, EditorState, RenderFrame};
pub use theme::{Rgb, Theme, ThemeId};
