use inputhints_config::{ControlType, GlyphMapping};

/// A glyph together with the asset that backs its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMatch<'a> {
    pub asset: &'a str,
    pub glyph: &'a GlyphMapping,
}

/// Scans the glyph table in order for the control path and returns the
/// first entry whose category the control type maps to an asset.
///
/// Control types can map several categories (e.g. "Keyboard" and "Mouse"),
/// so a path may be served by any of them.
pub fn find_glyph<'a>(
    glyphs: &'a [GlyphMapping],
    control_type: &'a ControlType,
    control_path: &str,
) -> Option<GlyphMatch<'a>> {
    glyphs
        .iter()
        .filter(|g| &*g.control_path == control_path)
        .find_map(|glyph| {
            control_type
                .asset_for(&glyph.category)
                .map(|asset| GlyphMatch { asset, glyph })
        })
}

#[cfg(test)]
mod tests {
    use inputhints_config::CategoryAsset;

    use super::*;

    fn glyphs() -> Vec<GlyphMapping> {
        vec![
            GlyphMapping::new("Button South", "Cross", "PlayStation"),
            GlyphMapping::new("Button South", "A", "Gamepad"),
            GlyphMapping::new("E", "key_e", "Keyboard"),
        ]
    }

    #[test]
    fn skips_candidates_without_asset() {
        let ct = ControlType::new("XInput", "Gamepad", [CategoryAsset::new("Gamepad", "Xbox")]);
        let glyphs = glyphs();
        let found = find_glyph(&glyphs, &ct, "Button South").expect("glyph");
        assert_eq!(found.asset, "Xbox");
        assert_eq!(&*found.glyph.glyph, "A");
    }

    #[test]
    fn table_order_breaks_ties() {
        let ct = ControlType::new(
            "Gamepad",
            "Gamepad",
            [
                CategoryAsset::new("Gamepad", "Xbox"),
                CategoryAsset::new("PlayStation", "DualSense"),
            ],
        );
        let glyphs = glyphs();
        let found = find_glyph(&glyphs, &ct, "Button South").expect("glyph");
        assert_eq!(found.asset, "DualSense");
        assert_eq!(&*found.glyph.glyph, "Cross");
    }

    #[test]
    fn no_category_or_path_is_a_miss() {
        let ct = ControlType::new("Keyboard", "Keyboard&Mouse", [CategoryAsset::new("Keyboard", "Keys")]);
        let glyphs = glyphs();
        assert!(find_glyph(&glyphs, &ct, "Button South").is_none());
        assert!(find_glyph(&glyphs, &ct, "Space").is_none());
        assert!(find_glyph(&glyphs, &ct, "E").is_some());
    }
}
