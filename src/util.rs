// Browser helpers and the console log backend.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::model::Size;

pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Turn a rejected promise or thrown value into something loggable.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|err| err.message().into()))
        .unwrap_or_else(|| format!("{value:?}"))
}

pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

pub fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn viewport_size() -> Size {
    let Some(win) = window() else {
        return Size::new(0.0, 0.0);
    };
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(dim(win.inner_width()), dim(win.inner_height()))
}

pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64
}

pub fn reload_page() {
    if let Some(win) = window() {
        if let Err(e) = win.location().reload() {
            log::error!("reload failed: {}", js_error_message(&e));
        }
    }
}

/// Resolve after `duration_ms`. Never fails; a timer that cannot be scheduled
/// resolves immediately.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
pub async fn sleep_ms(duration_ms: i32) {
    use js_sys::Promise;
    use wasm_bindgen_futures::JsFuture;

    let Some(win) = window() else { return };
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Err(e) = win.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, duration_ms) {
            log::warn!("timer unavailable: {}", js_error_message(&e));
            let _ = resolve.call0(&JsValue::UNDEFINED);
        }
    });
    let _ = JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(_duration_ms: i32) {}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Route the `log` macros to the browser console. Safe to call more than once.
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
