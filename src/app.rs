// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use crate::dom::{append_child, document, get_element_by_id, set_inner_html};
use crate::models::route::Route;
use crate::services::api_client::ApiClient;
use crate::services::navigation_service::current_path;
use crate::state::app_state::AppState;
use crate::utils::storage::BrowserStorage;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación (sesión restaurada desde localStorage)
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let initial_route = Route::from_path(&current_path());
        let state = AppState::new(
            Rc::new(BrowserStorage::new()),
            Rc::new(ApiClient::new()),
            initial_route,
        );
        log::info!(
            "💾 [APP] Sesión {}",
            if state.auth.is_authenticated() { "restaurada" } else { "no encontrada" }
        );

        // Re-render automático; varios cambios seguidos = un solo render
        let render_scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if render_scheduled.replace(true) {
                return;
            }
            let render_scheduled = render_scheduled.clone();
            Timeout::new(0, move || {
                render_scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] App::render()");

        // PRESERVAR el foco ANTES de limpiar: el input se recrea con el mismo id
        let focused_id = document()
            .and_then(|doc| doc.active_element())
            .map(|element| element.id())
            .filter(|id| !id.is_empty());

        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;

        if let Some(id) = focused_id {
            if let Some(element) = get_element_by_id(&id)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            {
                if let Err(e) = element.focus() {
                    log::warn!("⚠️ [APP] No se pudo restaurar el foco en #{}: {:?}", id, e);
                }
            }
        }
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
