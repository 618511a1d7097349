use std::fmt;
use std::sync::OnceLock;

use smallvec::SmallVec;

use crate::pattern::DeviceMatcher;

/// Maps a sprite category to the sprite asset that backs it for one control
/// type. For example, the control type matching "DualSense" could map the
/// category "Gamepad" to the asset "DualSense-Filled".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAsset {
    pub category: Box<str>,
    pub asset: Box<str>,
}

impl CategoryAsset {
    pub fn new(category: impl Into<Box<str>>, asset: impl Into<Box<str>>) -> Self {
        Self {
            category: category.into(),
            asset: asset.into(),
        }
    }
}

/// A family of physical input devices, e.g. "Keyboard&Mouse" or "Gamepad".
#[derive(Debug, Clone)]
pub struct ControlType {
    devices: Box<str>,
    scheme: Box<str>,
    assets: SmallVec<[CategoryAsset; 2]>,
    matcher: OnceLock<DeviceMatcher>,
}

impl ControlType {
    pub fn new(
        devices: impl Into<Box<str>>,
        scheme: impl Into<Box<str>>,
        assets: impl IntoIterator<Item = CategoryAsset>,
    ) -> Self {
        Self {
            devices: devices.into(),
            scheme: scheme.into(),
            assets: assets.into_iter().collect(),
            matcher: OnceLock::new(),
        }
    }

    /// The device pattern, a regular expression matched against device ids.
    pub fn devices(&self) -> &str {
        &self.devices
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn set_scheme(&mut self, scheme: impl Into<Box<str>>) {
        self.scheme = scheme.into();
    }

    pub fn assets(&self) -> &[CategoryAsset] {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut SmallVec<[CategoryAsset; 2]> {
        &mut self.assets
    }

    /// Returns the asset for the category, if this control type maps it.
    pub fn asset_for(&self, category: &str) -> Option<&str> {
        self.assets
            .iter()
            .find(|m| &*m.category == category)
            .map(|m| &*m.asset)
    }

    /// Lazily compiled device matcher.
    pub fn matcher(&self) -> &DeviceMatcher {
        self.matcher.get_or_init(|| DeviceMatcher::new(&self.devices))
    }

    pub fn matches(&self, device: &str) -> bool {
        self.matcher().is_match(device)
    }

    /// A control type without a scheme cannot resolve any binding.
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty()
    }
}

impl PartialEq for ControlType {
    fn eq(&self, other: &Self) -> bool {
        self.devices == other.devices
            && self.scheme == other.scheme
            && self.assets == other.assets
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "control type for \"{}\" and scheme \"{}\"",
            self.devices, self.scheme
        )
    }
}
