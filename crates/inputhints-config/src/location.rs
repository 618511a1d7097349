use std::fs;
use std::path::{Path, PathBuf};

use crate::parse::report_warnings;
use crate::{
    parse_config, serialize_config, ConfigError, ConfigEventReceiver, ConfigWatcher,
    HintsConfig, WatcherError,
};

const DEFAULT_CONFIG_DIR: &str = ".config/inputhints";
const CONFIG_FILE_NAME: &str = "hints.yaml";

/// Where the hints file lives on disk.
pub struct ConfigLocation {
    path: PathBuf,
}

impl ConfigLocation {
    /// Uses the given file, or `$HOME/.config/inputhints/hints.yaml`.
    pub fn new(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = {
            if let Some(path) = path {
                path.to_owned()
            } else {
                Self::default_path()?
            }
        };

        if path.exists() && !path.is_file() {
            return Err(ConfigError::PathIsNotFile(path.display().to_string()));
        }

        Ok(Self { path })
    }

    pub fn load(&self) -> Result<HintsConfig, ConfigError> {
        let input = fs::read_to_string(&self.path)?;
        let config = parse_config(&input)?;
        report_warnings(&config);
        Ok(config)
    }

    /// Writes the config back, creating the parent directory if needed.
    pub fn save(&self, config: &HintsConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serialize_config(config)?)?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    pub fn start_watcher(
        &self,
    ) -> Result<(ConfigWatcher<notify::FsEventWatcher>, ConfigEventReceiver), WatcherError>
    {
        ConfigWatcher::<notify::FsEventWatcher>::new_with_starting_event(&self.path)
    }

    #[cfg(not(target_os = "macos"))]
    pub fn start_watcher(
        &self,
    ) -> Result<(ConfigWatcher<notify::PollWatcher>, ConfigEventReceiver), WatcherError>
    {
        ConfigWatcher::<notify::PollWatcher>::new_with_starting_event(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let path = std::env::var("HOME")
            .map(PathBuf::from)
            .map(|p| p.join(DEFAULT_CONFIG_DIR).join(CONFIG_FILE_NAME))
            .map_err(|_| ConfigError::EnvVarNotSet("HOME".to_string()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("inputhints-{}-{name}", std::process::id()))
            .join(CONFIG_FILE_NAME)
    }

    #[test]
    fn directory_is_rejected() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            ConfigLocation::new(Some(&dir)),
            Err(ConfigError::PathIsNotFile(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let path = temp_file("save");
        let location = ConfigLocation::new(Some(&path)).expect("location");

        let mut config = HintsConfig::default();
        config.upsert_glyph("Button South", "A", "Gamepad");
        config.missing.record("Button North", "Gamepad");
        location.save(&config).expect("save");

        let loaded = location.load().expect("load");
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(path.parent().expect("parent"));
    }
}
