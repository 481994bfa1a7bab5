// ============================================================================
// NAVIGATION SERVICE - History API del navegador
// ============================================================================
// El listener de popstate es global (window): registrar UNA sola vez al inicio.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::History;

fn history() -> Result<History, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()
}

/// `location.pathname` actual ("/" si no hay window)
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Nueva entrada en el historial
pub fn push_path(path: &str) -> Result<(), JsValue> {
    if current_path() == path {
        return Ok(());
    }
    history()?.push_state_with_url(&JsValue::NULL, "", Some(path))
}

/// Reemplaza la entrada actual (redirecciones)
pub fn replace_path(path: &str) -> Result<(), JsValue> {
    history()?.replace_state_with_url(&JsValue::NULL, "", Some(path))
}

/// Escuchar back/forward del navegador
pub fn listen_popstate<F>(on_change: F) -> Result<(), JsValue>
where
    F: Fn(String) + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
        on_change(current_path());
    }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    // Listener global registrado una sola vez en main(): forget() no acumula closures
    closure.forget();
    Ok(())
}
