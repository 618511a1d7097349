mod action;
mod config;
mod control_path;
mod control_type;
mod glyph;
mod location;
mod missing;
mod parse;
mod pattern;
mod v1;
mod validate;
mod watcher;

use thiserror::Error;

pub use action::{ActionBindings, ActionSet, Binding, InputAction};
pub use config::{HintsConfig, DEFAULT_SPRITE_FORMAT};
pub use control_path::human_readable_path;
pub use control_type::{CategoryAsset, ControlType};
pub use glyph::{GlyphMapping, SpriteCategory};
pub use location::ConfigLocation;
pub use missing::{MissingPathRecord, MissingPaths};
pub use parse::{parse_config, serialize_config};
pub use pattern::{compile_pattern, DeviceMatcher, PatternError};
pub use validate::ConfigWarning;
pub use watcher::{ConfigEvent, ConfigEventReceiver, ConfigWatcher, WatcherError};

pub use v1::Error as V1Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("yaml deserialize error: {0}")]
    YamlDeserializeError(#[from] serde_yaml::Error),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
    #[error("v1 config error: {0}")]
    V1ConfigError(#[from] v1::Error),

    #[error("environment variable not set: {0}")]
    EnvVarNotSet(String),
    #[error("path is not a file: {0}")]
    PathIsNotFile(String),
    #[error("path error: {0}")]
    PathError(#[from] std::io::Error),
}
