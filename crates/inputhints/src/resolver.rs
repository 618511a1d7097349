use ahash::AHashMap;
use crossbeam_channel::{unbounded, Receiver, Sender};

use inputhints_config::{
    ActionBindings, ControlType, GlyphMapping, HintsConfig, MissingPathRecord,
    MissingPaths,
};

use crate::device::{DeviceEvent, DeviceEventReceiver, DeviceId, DeviceState};
use crate::format::format_glyph_tag;
use crate::lookup::find_glyph;
use crate::matcher::select_control_type;

/// Events emitted by the resolver to the text layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintsEvent {
    /// Previously resolved glyphs are stale and text should be re-rendered.
    Changed,
    /// A control path had no glyph and was added to the missing list.
    MissingPath(MissingPathRecord),
}

/// Receiving end for resolver event subscription.
pub type HintsEventReceiver = Receiver<HintsEvent>;

/// Resolves input actions into glyph tags for the active control type.
///
/// The resolver follows the device state it was created with. Device changes
/// are applied synchronously by [`HintResolver::sync`], which every resolve
/// call runs first.
pub struct HintResolver {
    config: HintsConfig,
    device_rx: DeviceEventReceiver,
    used_device: Option<DeviceId>,
    active: Option<usize>,
    cache: AHashMap<Box<str>, Box<str>>,
    subscribers: Vec<Sender<HintsEvent>>,
}

impl HintResolver {
    pub fn new(config: HintsConfig, devices: &mut DeviceState) -> Self {
        let device_rx = devices.subscribe();
        let mut resolver = Self {
            config,
            device_rx,
            used_device: devices.used_device().map(Into::into),
            active: None,
            cache: AHashMap::new(),
            subscribers: Vec::new(),
        };
        resolver.select_control_type();
        resolver
    }

    /// Subscribes to resolver events. Dropped subscribers are cleaned on the
    /// next event.
    pub fn subscribe(&mut self) -> HintsEventReceiver {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn config(&self) -> &HintsConfig {
        &self.config
    }

    /// Replaces the config, e.g. after the hints file was reloaded.
    pub fn set_config(&mut self, config: HintsConfig) {
        self.config = config;
        self.select_control_type();
        self.invalidate();
    }

    /// Edits the config in place. Cached glyphs are dropped afterwards so the
    /// edit is visible to the next resolve.
    pub fn edit_config<R>(&mut self, edit: impl FnOnce(&mut HintsConfig) -> R) -> R {
        let result = edit(&mut self.config);
        self.select_control_type();
        self.invalidate();
        result
    }

    pub fn missing(&self) -> &MissingPaths {
        &self.config.missing
    }

    pub fn clear_missing(&mut self, control_path: &str, scheme: &str) -> bool {
        self.config.missing.clear(control_path, scheme)
    }

    pub fn used_device(&self) -> Option<&str> {
        self.used_device.as_deref()
    }

    pub fn active_control_type(&self) -> Option<&ControlType> {
        self.active.and_then(|i| self.config.control_types.get(i))
    }

    /// Applies pending device changes. Returns `true` if any were applied.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        while let Ok(DeviceEvent::UsedDeviceChanged(device)) = self.device_rx.try_recv() {
            self.used_device = device;
            changed = true;
        }
        if changed {
            self.select_control_type();
            self.invalidate();
        }
        changed
    }

    /// Forces the control type whose device pattern is exactly `devices`,
    /// until the next device change. Does nothing if there is none.
    pub fn set_control_type_from_devices(&mut self, devices: &str) -> bool {
        match self.config.control_type_by_devices(devices) {
            Some(index) => self.set_control_type(index),
            None => false,
        }
    }

    /// Forces the control type at `index`, until the next device change.
    pub fn set_control_type(&mut self, index: usize) -> bool {
        let Some(control_type) = self.config.control_types.get(index) else {
            return false;
        };
        log::debug!("control type forced - {control_type}");
        self.active = Some(index);
        self.invalidate();
        true
    }

    /// Resolves the glyph tag for an action. Never fails: an action without
    /// a binding for the active scheme yields `[action name]`, and a control
    /// path without a glyph yields `[control path]`.
    pub fn resolve_glyph<A: ActionBindings + ?Sized>(&mut self, action: &A) -> String {
        self.prepare();

        let HintsConfig {
            control_types,
            glyphs,
            sprite_format,
            missing,
            ..
        } = &mut self.config;
        let control_type = self.active.and_then(|i| control_types.get(i));
        resolve(
            Tables {
                control_type,
                glyphs,
                sprite_format,
                missing,
            },
            &mut self.cache,
            &mut self.subscribers,
            action,
        )
    }

    /// Resolves an action from the config's action set by `Action` or
    /// `Map/Action` key. Returns `None` if there is no such action.
    pub fn resolve_action(&mut self, key: &str) -> Option<String> {
        self.prepare();

        let HintsConfig {
            control_types,
            glyphs,
            sprite_format,
            actions,
            missing,
            ..
        } = &mut self.config;
        let action = actions.find(key)?;
        let control_type = self.active.and_then(|i| control_types.get(i));
        Some(resolve(
            Tables {
                control_type,
                glyphs,
                sprite_format,
                missing,
            },
            &mut self.cache,
            &mut self.subscribers,
            action,
        ))
    }

    fn prepare(&mut self) {
        self.sync();
        let stale = self
            .active_control_type()
            .map_or(true, ControlType::is_empty);
        if stale {
            self.select_control_type();
        }
    }

    fn select_control_type(&mut self) {
        let index =
            select_control_type(&self.config.control_types, self.used_device.as_deref());
        if index != self.active {
            match index.map(|i| &self.config.control_types[i]) {
                Some(ct) => log::debug!("control type change - {ct}"),
                None => log::debug!("no control types configured"),
            }
        }
        self.active = index;
    }

    fn invalidate(&mut self) {
        self.cache.clear();
        broadcast(&mut self.subscribers, &HintsEvent::Changed);
    }
}

fn broadcast(subscribers: &mut Vec<Sender<HintsEvent>>, event: &HintsEvent) {
    subscribers.retain(|tx| tx.send(event.clone()).is_ok());
}

fn placeholder(name: &str) -> String {
    format!("[{name}]")
}

/// Config parts a single resolution reads, borrowed apart from the action set.
struct Tables<'a> {
    control_type: Option<&'a ControlType>,
    glyphs: &'a [GlyphMapping],
    sprite_format: &'a str,
    missing: &'a mut MissingPaths,
}

/// Cached tags are keyed by control path, so rebinding an action or two
/// actions sharing a name never see each other's glyph.
fn resolve<A: ActionBindings + ?Sized>(
    tables: Tables<'_>,
    cache: &mut AHashMap<Box<str>, Box<str>>,
    subscribers: &mut Vec<Sender<HintsEvent>>,
    action: &A,
) -> String {
    let name = action.name();
    let Some(control_type) = tables.control_type.filter(|ct| !ct.is_empty()) else {
        log::debug!("no control scheme to resolve \"{name}\"");
        return placeholder(name);
    };

    let scheme = control_type.scheme();
    let Some(control_path) = action
        .binding_index(scheme)
        .and_then(|index| action.control_path(index))
    else {
        log::debug!("no binding found for \"{name}\" with control scheme \"{scheme}\"");
        return placeholder(name);
    };

    if let Some(cached) = cache.get(control_path.as_str()) {
        return cached.to_string();
    }

    let glyph = match find_glyph(tables.glyphs, control_type, &control_path) {
        Some(found) => format_glyph_tag(tables.sprite_format, found.asset, &found.glyph.glyph),
        None => {
            log::debug!(
                "no sprite found for \"{control_path}\" with control scheme \"{scheme}\""
            );
            if tables.missing.record(&control_path, scheme) {
                let record = MissingPathRecord::new(control_path.as_str(), scheme);
                broadcast(subscribers, &HintsEvent::MissingPath(record));
            }
            placeholder(&control_path)
        }
    };

    cache.insert(control_path.into_boxed_str(), glyph.as_str().into());
    glyph
}
