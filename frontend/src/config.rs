use js_sys::{Reflect, JSON};
use wasm_bindgen::JsValue;
use web_sys::window;
use shared::config::LotteryConfig;
use shared::LotteryError;

/// Reads `window.lotteryConfig` if the host page set one, else the built-in prize table.
pub fn load_lottery_config() -> LotteryConfig {
    match read_host_config() {
        Some(Ok(config)) => {
            log::info!("Using host lottery config with {} prizes", config.prizes.len());
            config
        }
        Some(Err(e)) => {
            log::warn!("Ignoring host lottery config: {}", e);
            LotteryConfig::default()
        }
        None => LotteryConfig::default(),
    }
}

fn read_host_config() -> Option<Result<LotteryConfig, LotteryError>> {
    let window = window()?;
    let value = Reflect::get(&window, &JsValue::from_str("lotteryConfig")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }

    let raw = match JSON::stringify(&value) {
        Ok(raw) => String::from(raw),
        Err(_) => return Some(Err(LotteryError::invalid("lotteryConfig is not serializable"))),
    };
    Some(LotteryConfig::from_json(&raw))
}
