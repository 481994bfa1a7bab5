// ============================================================================
// PRODUCT DASHBOARD - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Validación + orquestación de casos de uso
// - Services: SOLO comunicación (HTTP, History API)
// - State: State Management con Rc<RefCell> + suscriptores
// - Models: Estructuras compartidas con la API
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::models::route::Route;
use crate::services::navigation_service;

// Instancia global de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Product Dashboard - Rust Puro + MVVM ({})", CONFIG.environment);
    if !CONFIG.is_production() {
        log::debug!("⚙️ [MAIN] Config: {:?}", *CONFIG);
    }

    let mut app = App::new()?;
    app.render()?;
    let state = app.state().clone();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Back/forward: la ruta sale de la URL, sin tocar el historial
    navigation_service::listen_popstate(move |path| {
        log::info!("🧭 [MAIN] popstate → {}", path);
        router::apply_route(&state, Route::from_path(&path));
    })?;

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
        }
    });
}
