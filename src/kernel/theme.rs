//! Token category → color table consumed by renderers.

use crate::kernel::editor::TokenKind;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    Default,
}

impl ThemeId {
    /// Unknown hints fall back to the default theme.
    pub fn from_hint(_hint: &str) -> Self {
        Self::Default
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    colors: FxHashMap<TokenKind, Rgb>,
    fallback: Rgb,
}

impl Theme {
    pub fn new(id: ThemeId) -> Self {
        match id {
            ThemeId::Default => Self::default_dark(),
        }
    }

    fn default_dark() -> Self {
        let fallback = Rgb::new(255, 255, 255);
        let mut colors = FxHashMap::default();
        colors.insert(TokenKind::Keyword, Rgb::new(161, 90, 207));
        colors.insert(TokenKind::Default, fallback);
        colors.insert(TokenKind::String, Rgb::new(44, 151, 76));
        colors.insert(TokenKind::Comment, Rgb::new(78, 78, 78));
        colors.insert(TokenKind::Literal, Rgb::new(43, 100, 175));
        colors.insert(TokenKind::Identifier, Rgb::new(134, 37, 134));
        colors.insert(TokenKind::Special, Rgb::new(255, 255, 255));
        Self { colors, fallback }
    }

    pub fn color(&self, kind: TokenKind) -> Rgb {
        self.colors.get(&kind).copied().unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> Rgb {
        self.fallback
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeId::Default)
    }
}
