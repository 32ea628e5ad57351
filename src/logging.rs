//! `log` backend for the browser console.
//!
//! | Level | wasm32 | native |
//! |-------|--------|--------|
//! | `trace`, `debug` | `console.debug` | `eprintln!` |
//! | `info` | `console.info` | `eprintln!` |
//! | `warn` | `console.warn` | `eprintln!` |
//! | `error` | `console.error` | `eprintln!` |

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(level: Level, line: &str) {
    eprintln!("[{}] {}", level, line);
}

/// Install the console logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    #[cfg(feature = "panic-hook")]
    console_error_panic_hook::set_once();

    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger already installed, keeping it");
    }
    log::set_max_level(level);
}
