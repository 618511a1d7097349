use colored::{ColoredString, Colorize};
use fern::Dispatch;
use log::{Level, LevelFilter};

/// Targets that follow `--verbose`. Anything else is held to warnings.
const OWN_TARGETS: [&str; 3] = ["inputhints", "inputhints_config", "inputhints_cli"];

fn paint(level: Level, line: &str) -> ColoredString {
    match level {
        Level::Error => line.bright_red(),
        Level::Warn => line.bright_yellow(),
        Level::Info => line.normal(),
        Level::Debug | Level::Trace => line.dimmed(),
    }
}

/// Sends timestamped, colored records to stderr. Stdout is kept for
/// command output.
pub(crate) fn setup(verbose: bool, no_color: bool) -> Result<(), log::SetLoggerError> {
    let own_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut dispatch = Dispatch::new()
        .format(|out, message, record| {
            let now = chrono::Local::now().format("%Y.%m.%d %H:%M:%S");
            let line = format!("[{now}] {message}");
            out.finish(format_args!("{}", paint(record.level(), &line)));
        })
        .level(LevelFilter::Warn);
    for target in OWN_TARGETS {
        dispatch = dispatch.level_for(target, own_level);
    }
    dispatch.chain(std::io::stderr()).apply()?;

    if no_color {
        colored::control::set_override(false);
    }
    Ok(())
}
