//! Browser Console Logging
//!
//! Routes the `log` facade to the devtools console through a fern dispatch.

use fern::{Dispatch, Output};
use log::{Level, LevelFilter, SetLoggerError};
use wasm_bindgen::JsValue;
use web_sys::console;

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Install the console logger. Fails if a logger is already set.
pub fn initialize() -> Result<(), SetLoggerError> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.target(), message))
        })
        .level(LOG_LEVEL)
        .chain(Output::call(write_to_console))
        .apply()?;

    log::info!("Logger initialized with level: {}", LOG_LEVEL);
    Ok(())
}

fn write_to_console(record: &log::Record) {
    let line = JsValue::from_str(&record.args().to_string());
    match record.level() {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug | Level::Trace => console::log_1(&line),
    }
}
