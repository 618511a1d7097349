use std::io::BufRead;

use crossbeam_channel::{bounded, select, unbounded};

use inputhints::{DeviceState, HintResolver, HintVariables, HintsEvent};
use inputhints_config::{ConfigEvent, ConfigLocation, HintsConfig};

use crate::render::render_text;
use crate::Error;

/// Acts as the device event source (stdin) and the text layer (stdout) for
/// a resolver that follows the hints file.
pub(crate) fn watch(location: &ConfigLocation, text: &str) -> Result<(), Error> {
    // Handle Ctrl+C to exit cleanly
    let (stop_tx, stop_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        let _ = stop_tx.try_send(());
    })?;

    // Each stdin line is a device id; an empty line means no device.
    let (device_tx, device_rx) = unbounded::<Option<String>>();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            let device = line.trim();
            let device = (!device.is_empty()).then(|| device.to_string());
            if device_tx.send(device).is_err() {
                break;
            }
        }
    });

    // The watcher sends the initial config right away.
    let (_watcher, config_rx) = location.start_watcher()?;

    let mut devices = DeviceState::new();
    let mut resolver = HintResolver::new(HintsConfig::default(), &mut devices);
    let hints_rx = resolver.subscribe();
    let mut variables = HintVariables::new(&mut resolver);

    log::info!(
        "watching {}. Reading device ids from stdin.",
        location.path().display()
    );
    loop {
        select! {
            recv(stop_rx) -> _ => {
                break;
            }
            recv(device_rx) -> msg => {
                let Ok(device) = msg else {
                    // stdin closed
                    break;
                };
                if devices.set_used_device(device.as_deref()) {
                    log::debug!("used device - {}", device.as_deref().unwrap_or("none"));
                }
            }
            recv(config_rx) -> msg => {
                match msg {
                    Ok(ConfigEvent::Changed(config)) => {
                        log::info!("config loaded");
                        resolver.set_config(*config);
                    }
                    Ok(ConfigEvent::Removed) => {
                        log::warn!("config removed, keeping the last loaded one");
                    }
                    Ok(ConfigEvent::Error(e)) => {
                        log::error!("failed to load config: {e}");
                    }
                    Err(_) => {
                        break;
                    }
                }
            }
            recv(hints_rx) -> msg => {
                if let Ok(HintsEvent::MissingPath(record)) = msg {
                    log::warn!(
                        "no glyph for \"{}\" with control scheme \"{}\"",
                        record.control_path,
                        record.scheme
                    );
                }
            }
        }

        if variables.poll_changed(&mut resolver) {
            let rendered = render_text(text, |key| variables.glyph(&mut resolver, key));
            println!("{rendered}");
        }
    }

    Ok(())
}
