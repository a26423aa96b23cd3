//! Browser event subscriptions and sensor permission probing.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, EventTarget};

use crate::error::{PlaygroundError, Result};
use crate::model::SensorKind;
use crate::util::clog;

/// An attached event listener. Dropping it detaches the callback.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attaches `f` to `kind` events on `target`. Events that are not an `E` are skipped.
    pub fn new<E, F>(target: &EventTarget, kind: &'static str, mut f: F) -> Result<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |e: Event| {
            if let Ok(ev) = e.dyn_into::<E>() {
                f(ev);
            }
        }) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(PlaygroundError::js)?;
        clog(&format!("listener attached: {kind}"));
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
        clog(&format!("listener detached: {}", self.kind));
    }
}

/// Asks the browser whether `kind` events can be received.
///
/// Browsers gating sensors behind `requestPermission()` get prompted; the
/// others report available as soon as the event type exists.
pub async fn request_permission(kind: SensorKind) -> Result<bool> {
    let win = web_sys::window().ok_or(PlaygroundError::NoWindow)?;
    let ctor = Reflect::get(&win, &JsValue::from_str(kind.constructor_name()))
        .map_err(PlaygroundError::js)?;
    if ctor.is_undefined() || ctor.is_null() {
        return Ok(false);
    }
    let request = Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .map_err(PlaygroundError::js)?;
    let Some(func) = request.dyn_ref::<Function>() else {
        return Ok(true);
    };
    let promise: Promise = func
        .call0(&ctor)
        .map_err(PlaygroundError::js)?
        .dyn_into()
        .map_err(PlaygroundError::js)?;
    let answer = JsFuture::from(promise).await.map_err(PlaygroundError::js)?;
    clog(&format!("{} permission: {:?}", kind.constructor_name(), answer.as_string()));
    Ok(answer.as_string().as_deref() == Some("granted"))
}
