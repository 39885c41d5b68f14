use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Initialize logger with fern.
///
/// Output goes to stderr so stdout stays machine-readable JSON.
pub fn initialize(level: LevelFilter, colored: bool) -> Result<(), log::SetLoggerError> {
    let dispatch = if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new().format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = colors.color(record.level()),
                message = message,
            ))
        })
    } else {
        Dispatch::new().format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
            ))
        })
    };

    Dispatch::new()
        .level(level)
        .chain(dispatch.chain(std::io::stderr()))
        .apply()
}
