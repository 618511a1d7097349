use ahash::AHashSet;
use thiserror::Error;

use crate::config::HintsConfig;
use crate::pattern::{compile_pattern, PatternError};

/// Authoring problems. None of them stop resolution, which degrades to
/// placeholders instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    #[error("control type {0} has an invalid device pattern: {1}")]
    InvalidPattern(usize, String),
    #[error("control type {0} has an empty device pattern but is not last; it is only reachable as fallback if moved to the end")]
    EmptyPatternNotLast(usize),
    #[error("{0} control types have an empty device pattern, at most one is allowed")]
    MultipleEmptyPatterns(usize),
    #[error("control type {0} has no control scheme")]
    EmptyScheme(usize),
    #[error("duplicate sprite category \"{0}\"")]
    DuplicateCategory(String),
    #[error("control type {0} maps category \"{1}\" more than once")]
    DuplicateCategoryAsset(usize, String),
    #[error("control type {0} maps undeclared category \"{1}\"")]
    UndeclaredAssetCategory(usize, String),
    #[error("glyph \"{1}\" for \"{0}\" uses undeclared category \"{2}\"")]
    UndeclaredGlyphCategory(String, String, String),
    #[error("control path \"{0}\" is mapped more than once; the first mapping with an available category wins")]
    DuplicateControlPath(String),
}

pub(crate) fn validate(config: &HintsConfig) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    let mut categories: AHashSet<&str> = AHashSet::with_capacity(config.categories.len());
    for category in &config.categories {
        if !categories.insert(&category.name) {
            warnings.push(ConfigWarning::DuplicateCategory(category.name.to_string()));
        }
    }

    let last = config.control_types.len().saturating_sub(1);
    let mut empty_patterns = 0usize;
    for (i, ct) in config.control_types.iter().enumerate() {
        match compile_pattern(ct.devices()) {
            Ok(_) => {}
            Err(PatternError::Empty) => {
                empty_patterns += 1;
                if i != last {
                    warnings.push(ConfigWarning::EmptyPatternNotLast(i));
                }
            }
            Err(e) => warnings.push(ConfigWarning::InvalidPattern(i, e.to_string())),
        }

        if ct.is_empty() {
            warnings.push(ConfigWarning::EmptyScheme(i));
        }

        let mut seen: AHashSet<&str> = AHashSet::with_capacity(ct.assets().len());
        for mapping in ct.assets() {
            if !seen.insert(&mapping.category) {
                warnings.push(ConfigWarning::DuplicateCategoryAsset(
                    i,
                    mapping.category.to_string(),
                ));
            }
            if !categories.contains(&*mapping.category) {
                warnings.push(ConfigWarning::UndeclaredAssetCategory(
                    i,
                    mapping.category.to_string(),
                ));
            }
        }
    }
    if empty_patterns > 1 {
        warnings.push(ConfigWarning::MultipleEmptyPatterns(empty_patterns));
    }

    let mut paths: AHashSet<&str> = AHashSet::with_capacity(config.glyphs.len());
    let mut reported: AHashSet<&str> = AHashSet::new();
    for glyph in &config.glyphs {
        if !categories.contains(&*glyph.category) {
            warnings.push(ConfigWarning::UndeclaredGlyphCategory(
                glyph.control_path.to_string(),
                glyph.glyph.to_string(),
                glyph.category.to_string(),
            ));
        }
        if !paths.insert(&glyph.control_path) && reported.insert(&glyph.control_path) {
            warnings.push(ConfigWarning::DuplicateControlPath(
                glyph.control_path.to_string(),
            ));
        }
    }

    warnings
}
