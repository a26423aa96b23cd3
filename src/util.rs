// Console logging helpers
use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::JsValue;

static DEBUG_LOG: AtomicBool = AtomicBool::new(false);

pub fn set_debug_logging(on: bool) {
    DEBUG_LOG.store(on, Ordering::Relaxed);
}

pub fn clog(msg: &str) {
    // Off unless enabled in config; orientation events fire at ~60Hz
    if DEBUG_LOG.load(Ordering::Relaxed) {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Trailing-edge debounce bookkeeping. Each `schedule` supersedes the
/// previous one; a timer callback only acts if its generation is still current.
#[derive(Debug)]
pub struct Debounce<H> {
    generation: u64,
    pending: Option<H>,
}

impl<H> Default for Debounce<H> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<H> Debounce<H> {
    /// Replaces (and drops) the pending timer handle with one built by `make`.
    pub fn schedule(&mut self, make: impl FnOnce(u64) -> H) {
        self.generation += 1;
        self.pending = Some(make(self.generation));
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.pending.is_some() && generation == self.generation
    }
}

pub fn format_degrees(v: f64) -> String {
    format!("{:+.1}°", v)
}

pub fn format_accel(v: f64) -> String {
    format!("{:+.2} m/s²", v)
}
