use serde::Deserialize;

use crate::{v1::HintsV1, ConfigError, HintsConfig};

/// Parse yaml hints config.
pub fn parse_config(input: &str) -> Result<HintsConfig, ConfigError> {
    let version = parse_version(input)?;
    match version {
        1 => {
            let document: HintsV1 = serde_yaml::from_str(input)?;
            let config = document.to_config()?;
            Ok(config)
        }
        _ => Err(ConfigError::UnsupportedVersion(version)),
    }
}

/// Serialize the config as the latest yaml version.
pub fn serialize_config(config: &HintsConfig) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(&HintsV1::from_config(config))?)
}

/// Logs authoring warnings of a freshly loaded config.
pub(crate) fn report_warnings(config: &HintsConfig) {
    for warning in config.validate() {
        log::warn!("{warning}");
    }
}

/// A config with a version.
#[derive(Debug, Clone, Deserialize)]
struct VersionedConfig {
    version: u8,
}

/// Parse the version of yaml config.
fn parse_version(input: &str) -> Result<u8, ConfigError> {
    let raw: VersionedConfig = serde_yaml::from_str(input)?;
    Ok(raw.version)
}
