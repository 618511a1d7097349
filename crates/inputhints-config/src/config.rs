use crate::action::ActionSet;
use crate::control_type::ControlType;
use crate::glyph::{GlyphMapping, SpriteCategory};
use crate::missing::MissingPaths;
use crate::validate::{validate, ConfigWarning};

/// Default glyph tag template. `{0}` is the asset name, `{1}` the glyph name.
pub const DEFAULT_SPRITE_FORMAT: &str = "<sprite=\"{0}\" name=\"{1}\" tint=1>";

/// Everything the glyph resolver reads: control types in precedence order,
/// the control path to glyph table, the tag template and the actions.
#[derive(Debug, Clone, PartialEq)]
pub struct HintsConfig {
    pub sprite_format: Box<str>,
    pub categories: Vec<SpriteCategory>,
    pub control_types: Vec<ControlType>,
    pub glyphs: Vec<GlyphMapping>,
    pub actions: ActionSet,
    pub missing: MissingPaths,
}

impl Default for HintsConfig {
    fn default() -> Self {
        Self {
            sprite_format: DEFAULT_SPRITE_FORMAT.into(),
            categories: Vec::new(),
            control_types: Vec::new(),
            glyphs: Vec::new(),
            actions: ActionSet::default(),
            missing: MissingPaths::new(),
        }
    }
}

impl HintsConfig {
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| &*c.name)
    }

    /// Index of the first control type whose pattern string is exactly `devices`.
    pub fn control_type_by_devices(&self, devices: &str) -> Option<usize> {
        self.control_types
            .iter()
            .position(|ct| ct.devices() == devices)
    }

    /// Sets the glyph of an existing control path mapping, or appends a new
    /// mapping when the path is not in the table yet.
    pub fn upsert_glyph(&mut self, control_path: &str, glyph: &str, category: &str) {
        if let Some(mapping) = self
            .glyphs
            .iter_mut()
            .find(|m| &*m.control_path == control_path)
        {
            mapping.glyph = glyph.into();
            return;
        }
        self.glyphs
            .push(GlyphMapping::new(control_path, glyph, category));
    }

    pub fn clear_missing(&mut self, control_path: &str, scheme: &str) -> bool {
        self.missing.clear(control_path, scheme)
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control_type::CategoryAsset;

    #[test]
    fn upsert_replaces_glyph_of_existing_path() {
        let mut config = HintsConfig::default();
        config.upsert_glyph("Button South", "A", "Gamepad");
        config.upsert_glyph("Button South", "Cross", "PlayStation");
        config.upsert_glyph("E", "E", "Keyboard");

        assert_eq!(config.glyphs.len(), 2);
        assert_eq!(&*config.glyphs[0].glyph, "Cross");
        // Category of the existing mapping is left as is.
        assert_eq!(&*config.glyphs[0].category, "Gamepad");
    }

    #[test]
    fn finds_control_type_by_pattern_string() {
        let config = HintsConfig {
            control_types: vec![
                ControlType::new("Gamepad", "Gamepad", [CategoryAsset::new("Gamepad", "Xbox")]),
                ControlType::new("", "Keyboard&Mouse", []),
            ],
            ..HintsConfig::default()
        };
        assert_eq!(config.control_type_by_devices("Gamepad"), Some(0));
        assert_eq!(config.control_type_by_devices(""), Some(1));
        assert_eq!(config.control_type_by_devices("Mouse"), None);
    }
}
