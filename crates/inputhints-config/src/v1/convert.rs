use crate::action::{ActionSet, Binding, InputAction};
use crate::config::{HintsConfig, DEFAULT_SPRITE_FORMAT};
use crate::control_type::{CategoryAsset, ControlType};
use crate::glyph::{GlyphMapping, SpriteCategory};
use crate::missing::MissingPathRecord;

use super::document::{
    HintsV1Action, HintsV1Asset, HintsV1Binding, HintsV1ControlType, HintsV1Glyph,
    HintsV1Missing,
};
use super::{Error, HintsV1};

impl HintsV1 {
    pub(crate) fn to_config(&self) -> Result<HintsConfig, Error> {
        debug_assert_eq!(self.version, 1, "version is checked before conversion");

        let categories = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if name.is_empty() {
                    return Err(Error::EmptyCategoryName(i));
                }
                Ok(SpriteCategory::new(name.as_str()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let control_types = self.control_types.iter().map(parse_control_type).collect();

        let glyphs = self
            .glyphs
            .iter()
            .enumerate()
            .map(|(i, glyph)| parse_glyph(i, glyph))
            .collect::<Result<Vec<_>, _>>()?;

        let actions = self
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| parse_action(i, action))
            .collect::<Result<Vec<_>, _>>()?;

        let missing = self
            .missing
            .iter()
            .map(|m| MissingPathRecord::new(m.path.as_str(), m.scheme.as_str()))
            .collect();

        Ok(HintsConfig {
            sprite_format: self
                .sprite_format
                .as_deref()
                .unwrap_or(DEFAULT_SPRITE_FORMAT)
                .into(),
            categories,
            control_types,
            glyphs,
            actions: ActionSet::new(actions),
            missing,
        })
    }

    pub(crate) fn from_config(config: &HintsConfig) -> Self {
        let sprite_format = (&*config.sprite_format != DEFAULT_SPRITE_FORMAT)
            .then(|| config.sprite_format.to_string());

        Self {
            version: 1,
            sprite_format,
            categories: config.category_names().map(str::to_string).collect(),
            control_types: config
                .control_types
                .iter()
                .map(|ct| HintsV1ControlType {
                    devices: ct.devices().to_string(),
                    scheme: ct.scheme().to_string(),
                    assets: ct
                        .assets()
                        .iter()
                        .map(|m| HintsV1Asset {
                            category: m.category.to_string(),
                            asset: m.asset.to_string(),
                        })
                        .collect(),
                })
                .collect(),
            glyphs: config
                .glyphs
                .iter()
                .map(|g| HintsV1Glyph {
                    path: g.control_path.to_string(),
                    glyph: g.glyph.to_string(),
                    category: g.category.to_string(),
                })
                .collect(),
            actions: config
                .actions
                .iter()
                .map(|a| HintsV1Action {
                    name: a.name.to_string(),
                    map: a.map.as_deref().map(str::to_string),
                    bindings: a
                        .bindings
                        .iter()
                        .map(|b| HintsV1Binding {
                            path: b.path.to_string(),
                            schemes: b.schemes.iter().map(|s| s.to_string()).collect(),
                        })
                        .collect(),
                })
                .collect(),
            missing: config
                .missing
                .iter()
                .map(|m| HintsV1Missing {
                    path: m.control_path.to_string(),
                    scheme: m.scheme.to_string(),
                })
                .collect(),
        }
    }
}

fn parse_control_type(raw: &HintsV1ControlType) -> ControlType {
    ControlType::new(
        raw.devices.as_str(),
        raw.scheme.as_str(),
        raw.assets
            .iter()
            .map(|m| CategoryAsset::new(m.category.as_str(), m.asset.as_str())),
    )
}

fn parse_glyph(index: usize, raw: &HintsV1Glyph) -> Result<GlyphMapping, Error> {
    if raw.path.is_empty() {
        return Err(Error::EmptyControlPath(index));
    }
    if raw.glyph.is_empty() {
        return Err(Error::EmptyGlyphName(raw.path.clone()));
    }
    Ok(GlyphMapping::new(
        raw.path.as_str(),
        raw.glyph.as_str(),
        raw.category.as_str(),
    ))
}

fn parse_action(index: usize, raw: &HintsV1Action) -> Result<InputAction, Error> {
    if raw.name.is_empty() {
        return Err(Error::EmptyActionName(index));
    }
    let bindings = raw
        .bindings
        .iter()
        .map(|b| {
            if b.path.is_empty() {
                return Err(Error::EmptyBindingPath(raw.name.clone()));
            }
            Ok(Binding::new(b.path.as_str(), b.schemes.iter().map(String::as_str)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let action = InputAction::new(raw.name.as_str(), bindings);
    Ok(match &raw.map {
        Some(map) => action.with_map(map.as_str()),
        None => action,
    })
}
