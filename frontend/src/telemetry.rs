use js_sys::{Function, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;
use shared::telemetry::{Breadcrumb, TelemetryError, TelemetryReporter};

/// Forwards breadcrumbs to `window.sentry.addBreadcrumb` when the host page loaded it.
pub struct SentryBridge;

impl TelemetryReporter for SentryBridge {
    fn add_breadcrumb(&self, crumb: &Breadcrumb) -> Result<(), TelemetryError> {
        let window = window().ok_or(TelemetryError::Unavailable)?;
        let sentry = Reflect::get(&window, &JsValue::from_str("sentry"))
            .map_err(|_| TelemetryError::Unavailable)?;
        if sentry.is_undefined() || sentry.is_null() {
            return Err(TelemetryError::Unavailable);
        }

        let add_breadcrumb = Reflect::get(&sentry, &JsValue::from_str("addBreadcrumb"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(TelemetryError::Unavailable)?;

        let json = serde_json::to_string(crumb)
            .map_err(|e| TelemetryError::Rejected(e.to_string()))?;
        let payload = JSON::parse(&json)
            .map_err(|e| TelemetryError::Rejected(format!("{:?}", e)))?;

        add_breadcrumb
            .call1(&sentry, &payload)
            .map(|_| ())
            .map_err(|e| TelemetryError::Rejected(format!("{:?}", e)))
    }
}
