//! Process-wide logging via fern.
//!
//! Lines look like `[<rfc3339> - LEVEL] message [target]`. Colour is only
//! applied on the console; file output is always plain.

use crate::error::{Result as ServerErrorResult, ServerError};

use fed_config::LogLevel;

use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Crates whose debug output drowns out ours
const QUIET_TARGETS: [&str; 4] = ["hyper", "hyper_util", "reqwest", "sqlx"];

/// Install the global logger. Must run before anything else logs.
pub fn initialize(
    level: LogLevel,
    log_file: Option<&Path>,
    colored: bool,
) -> ServerErrorResult<()> {
    let sink = match log_file {
        Some(path) => {
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("cannot open {}: {e}", path.display()),
            })?;
            line_format(None).chain(file)
        }
        None => line_format(colored.then(level_colors)).chain(std::io::stdout()),
    };

    let mut dispatch = Dispatch::new().level(*level);
    for target in QUIET_TARGETS {
        dispatch = dispatch.level_for(target, LevelFilter::Warn);
    }

    dispatch
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("logger already installed: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logging at {} to {}", *level, path.display()),
        None => info!("Logging at {} to stdout", *level),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn line_format(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new().format(move |out, message, record| {
        let timestamp = humantime::format_rfc3339_seconds(SystemTime::now());
        match &colors {
            Some(colors) => out.finish(format_args!(
                "[{timestamp} - {}] {message} [{}]",
                colors.color(record.level()),
                record.target()
            )),
            None => out.finish(format_args!(
                "[{timestamp} - {}] {message} [{}]",
                record.level(),
                record.target()
            )),
        }
    })
}
