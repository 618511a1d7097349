mod cli;
mod logging;
mod render;
mod watch;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use inputhints::{DeviceState, HintResolver, HintVariables};
use inputhints_config::{parse_config, ConfigError, ConfigLocation, WatcherError};

use crate::cli::{Cli, Command};
use crate::render::render_text;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("watcher error: {0}")]
    Watcher(#[from] WatcherError),
    #[error("failed to set Ctrl+C handler: {0}")]
    Ctrlc(#[from] ctrlc::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::setup(cli.verbose, cli.no_color) {
        eprintln!("unable to set up logger: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Error> {
    let location = ConfigLocation::new(cli.config.as_deref())?;

    match cli.command {
        Command::Resolve {
            device,
            secondary,
            control_type,
            actions,
        } => {
            let mut session = Session::start(&location, device, secondary, control_type)?;
            let mut code = ExitCode::SUCCESS;
            for key in &actions {
                match session.glyph(key) {
                    Some(tag) => println!("{key}\t{tag}"),
                    None => {
                        log::warn!("unknown action \"{key}\"");
                        code = ExitCode::FAILURE;
                    }
                }
            }
            Ok(code)
        }
        Command::Render {
            device,
            control_type,
            text,
        } => {
            let mut session = Session::start(&location, device, None, control_type)?;
            println!("{}", render_text(&text, |key| session.glyph(key)));
            Ok(ExitCode::SUCCESS)
        }
        Command::Watch { text } => {
            watch::watch(&location, &text)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => check(&location),
        Command::Missing { write } => missing(&location, write),
    }
}

/// A resolver fed with a fixed device, for one-shot commands.
struct Session {
    _devices: DeviceState,
    resolver: HintResolver,
    variables: HintVariables,
}

impl Session {
    fn start(
        location: &ConfigLocation,
        device: Option<String>,
        secondary: Option<String>,
        control_type: Option<String>,
    ) -> Result<Self, Error> {
        let config = location.load()?;
        let mut devices = DeviceState::new();
        devices.set_coop_used_devices(device.as_deref(), secondary.as_deref());

        let mut resolver = HintResolver::new(config, &mut devices);
        if let Some(pattern) = control_type {
            if !resolver.set_control_type_from_devices(&pattern) {
                log::warn!("no control type with device pattern \"{pattern}\"");
            }
        }
        match resolver.active_control_type() {
            Some(ct) => {
                log::debug!("using {ct}");
            }
            None => {
                log::warn!("no control types configured");
            }
        }

        let variables = HintVariables::new(&mut resolver);
        Ok(Self {
            _devices: devices,
            resolver,
            variables,
        })
    }

    fn glyph(&mut self, key: &str) -> Option<String> {
        self.variables.glyph(&mut self.resolver, key)
    }
}

fn check(location: &ConfigLocation) -> Result<ExitCode, Error> {
    let input = fs::read_to_string(location.path()).map_err(ConfigError::from)?;
    let config = parse_config(&input)?;

    let warnings = config.validate();
    if warnings.is_empty() {
        log::info!("{} has no problems", location.path().display());
        return Ok(ExitCode::SUCCESS);
    }
    for warning in &warnings {
        println!("{warning}");
    }
    Ok(ExitCode::FAILURE)
}

fn missing(location: &ConfigLocation, write: bool) -> Result<ExitCode, Error> {
    let config = location.load()?;
    let known = config.missing.len();
    let keys: Vec<String> = config
        .actions
        .iter()
        .map(|a| match &a.map {
            Some(map) => format!("{map}/{}", a.name),
            None => a.name.to_string(),
        })
        .collect();

    let mut devices = DeviceState::new();
    let mut resolver = HintResolver::new(config, &mut devices);
    for index in 0..resolver.config().control_types.len() {
        if !resolver.set_control_type(index) {
            continue;
        }
        for key in &keys {
            resolver.resolve_action(key);
        }
    }

    for record in resolver.missing() {
        println!("{}\t{}", record.control_path, record.scheme);
    }

    let found = resolver.missing().len() - known;
    if write && found > 0 {
        location.save(resolver.config())?;
        log::info!(
            "stored {found} new missing paths in {}",
            location.path().display()
        );
    }
    Ok(ExitCode::SUCCESS)
}
