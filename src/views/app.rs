// ============================================================================
// APP VIEW - Raíz: guard de rutas + vista de la ruta actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::models::route::Route;
use crate::router::{self, RouteDecision};
use crate::state::app_state::AppState;
use crate::views::{render_dashboard, render_login, render_not_found, render_register};

/// Renderizar la aplicación completa según la ruta actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let current = state.route.current();
    let route = match router::guard(&current, state.auth.is_authenticated()) {
        RouteDecision::Render(route) => route,
        RouteDecision::Redirect(target) => {
            log::info!("🔒 [APP] {} requiere sesión", current.path());
            router::redirect(state, target.clone());
            target
        }
    };

    log::debug!("🎬 [APP] render_app({})", route.path());
    match &route {
        Route::Home | Route::Dashboard => render_dashboard(state),
        Route::Login => render_login(state),
        Route::Register => render_register(state),
        Route::NotFound(path) => render_not_found(state, path),
    }
}
