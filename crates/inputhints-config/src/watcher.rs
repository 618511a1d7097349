use std::time::Duration;
use std::{fs, path::Path};

use crossbeam_channel::{unbounded, Receiver, Sender};
use notify::{Config, Error as NotifyError, RecursiveMode, Watcher};
use notify_debouncer_mini::{
    new_debouncer_opt, DebounceEventResult, DebouncedEventKind, Debouncer,
};
use thiserror::Error;

use crate::parse::report_warnings;
use crate::{parse_config, ConfigError, HintsConfig};

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ConfigError),
}

/// Watches the hints file and emits a freshly parsed config on every change.
pub struct ConfigWatcher<W: Watcher> {
    #[allow(dead_code)]
    watcher: Debouncer<W>,
}

pub enum ConfigEvent {
    Changed(Box<HintsConfig>),
    Removed,
    Error(WatcherError),
}

type ConfigEventSender = Sender<ConfigEvent>;
pub type ConfigEventReceiver = Receiver<ConfigEvent>;

fn send_config_event(path: &Path, tx: &ConfigEventSender) {
    match fs::read_to_string(path) {
        Ok(content) => match parse_config(&content) {
            Ok(config) => {
                report_warnings(&config);
                let _ = tx.send(ConfigEvent::Changed(Box::new(config)));
            }
            Err(e) => {
                let error = WatcherError::Parse(e);
                let _ = tx.send(ConfigEvent::Error(error));
            }
        },
        Err(e) => {
            let error = WatcherError::Io(e);
            let _ = tx.send(ConfigEvent::Error(error));
        }
    };
}

impl<W: Watcher> ConfigWatcher<W> {
    pub fn new_with_sender(
        path: &Path,
        tx: ConfigEventSender,
    ) -> Result<Self, WatcherError> {
        let path_c = path.to_owned();
        let tx_c = tx.clone();

        let debouncer_config = notify_debouncer_mini::Config::default()
            .with_timeout(Duration::from_millis(500))
            .with_notify_config(
                Config::default().with_poll_interval(Duration::from_millis(500)),
            );
        let mut debouncer = new_debouncer_opt::<_, W>(
            debouncer_config,
            move |events: DebounceEventResult| match events {
                Ok(events) => {
                    // One reload per debounced batch is enough.
                    let changed = events.iter().any(|event| {
                        matches!(
                            event.kind,
                            DebouncedEventKind::Any | DebouncedEventKind::AnyContinuous
                        )
                    });
                    if !changed {
                        return;
                    }
                    if path_c.exists() {
                        send_config_event(&path_c, &tx_c);
                    } else {
                        let _ = tx_c.send(ConfigEvent::Removed);
                    }
                }
                Err(event) => {
                    let error = WatcherError::Notify(event);
                    let _ = tx_c.send(ConfigEvent::Error(error));
                }
            },
        )?;

        debouncer
            .watcher()
            .watch(path, RecursiveMode::NonRecursive)?;

        Ok(Self { watcher: debouncer })
    }

    pub fn new(path: &Path) -> Result<(Self, ConfigEventReceiver), WatcherError> {
        let (tx, rx) = unbounded();

        Ok((Self::new_with_sender(path, tx)?, rx))
    }

    pub fn new_with_starting_event(
        path: &Path,
    ) -> Result<(Self, ConfigEventReceiver), WatcherError> {
        let (tx, rx) = unbounded();

        // Send initial config event
        send_config_event(path, &tx);
        Ok((Self::new_with_sender(path, tx)?, rx))
    }
}
