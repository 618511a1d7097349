/// A named partition of glyph sets, e.g. "Gamepad" or "Keyboard".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteCategory {
    pub name: Box<str>,
}

impl SpriteCategory {
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self { name: name.into() }
    }
}

/// Associates a normalized control path with a glyph in a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMapping {
    pub control_path: Box<str>,
    pub glyph: Box<str>,
    pub category: Box<str>,
}

impl GlyphMapping {
    pub fn new(
        control_path: impl Into<Box<str>>,
        glyph: impl Into<Box<str>>,
        category: impl Into<Box<str>>,
    ) -> Self {
        Self {
            control_path: control_path.into(),
            glyph: glyph.into(),
            category: category.into(),
        }
    }
}
