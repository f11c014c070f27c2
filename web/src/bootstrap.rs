//! Credential bootstrap.
//!
//! Reads the page-global configuration slot (`window.VANSTRA_CONFIG`,
//! holding the backend URL and public anon key) once at module start and,
//! if a backend client wrapper is installed on the page, hands the
//! credentials to its `init` function. Pure conditional delegation plus
//! logging; nothing here throws and nothing blocks module start.

use js_sys::{Function, Reflect};
use vanstra_types::BackendConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::console;

/// Window property holding the backend credentials.
const CONFIG_SLOT: &str = "VANSTRA_CONFIG";

/// Window property holding the backend client wrapper, if the page ships one.
const CLIENT_SLOT: &str = "SupabaseDB";

/// Run the bootstrap once. Safe to call in any environment.
pub fn run() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let raw = match Reflect::get(&window, &JsValue::from_str(CONFIG_SLOT)) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => {
            console::info_1(&format!("{CONFIG_SLOT} not set, backend client not configured").into());
            return;
        }
    };

    let config: BackendConfig = match serde_wasm_bindgen::from_value(raw) {
        Ok(c) => c,
        Err(e) => {
            console::warn_1(&format!("malformed {CONFIG_SLOT}: {e}").into());
            return;
        }
    };
    if !config.is_configured() {
        console::info_1(&format!("{CONFIG_SLOT} incomplete, skipping backend client init").into());
        return;
    }

    let client = match Reflect::get(&window, &JsValue::from_str(CLIENT_SLOT)) {
        Ok(v) if v.is_object() => v,
        _ => {
            console::info_1(&format!("{CLIENT_SLOT} not available, keys loaded but unused").into());
            return;
        }
    };
    let init = match Reflect::get(&client, &JsValue::from_str("init"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    {
        Some(f) => f,
        None => {
            console::warn_1(&format!("{CLIENT_SLOT} present but has no init function").into());
            return;
        }
    };

    match init.call2(
        &client,
        &JsValue::from_str(&config.url),
        &JsValue::from_str(&config.anon_key),
    ) {
        Ok(_) => console::info_1(&"backend client configured".into()),
        Err(e) => console::warn_1(&format!("error initializing {CLIENT_SLOT}: {e:?}").into()),
    }
}
