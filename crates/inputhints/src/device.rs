use crossbeam_channel::{unbounded, Receiver, Sender};

/// An opaque device identifier, e.g. a device path like `/XInputControllerWindows`.
pub type DeviceId = Box<str>;

/// Events emitted when the last used device changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// The main used device changed. The secondary device never emits.
    UsedDeviceChanged(Option<DeviceId>),
}

/// Receiving end for device event subscription.
pub type DeviceEventReceiver = Receiver<DeviceEvent>;

/// The last used input device, owned by the embedding application and fed
/// by its device event source.
#[derive(Debug, Default)]
pub struct DeviceState {
    used: Option<DeviceId>,
    secondary: Option<DeviceId>,
    subscribers: Vec<Sender<DeviceEvent>>,
}

impl DeviceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to device changes. Dropped subscribers are cleaned on the
    /// next change.
    pub fn subscribe(&mut self) -> DeviceEventReceiver {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn used_device(&self) -> Option<&str> {
        self.used.as_deref()
    }

    pub fn secondary_device(&self) -> Option<&str> {
        self.secondary.as_deref()
    }

    /// Single player: sets the used device and forgets the secondary one.
    /// Returns `true` if the used device changed.
    pub fn set_used_device(&mut self, device: Option<&str>) -> bool {
        let changed = self.update_used(device);
        self.secondary = None;
        changed
    }

    /// Co-op: sets both devices. Only the main device drives change events.
    pub fn set_coop_used_devices(
        &mut self,
        main: Option<&str>,
        secondary: Option<&str>,
    ) -> bool {
        let changed = self.update_used(main);
        self.secondary = secondary.map(Into::into);
        changed
    }

    fn update_used(&mut self, device: Option<&str>) -> bool {
        if self.used.as_deref() == device {
            return false;
        }
        self.used = device.map(Into::into);
        let event = DeviceEvent::UsedDeviceChanged(self.used.clone());
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        true
    }
}
