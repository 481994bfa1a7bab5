// ============================================================================
// ROUTER - Guard de rutas + navegación
// ============================================================================

use crate::models::route::Route;
use crate::services::navigation_service;
use crate::state::app_state::AppState;

/// Resultado del guard para una ruta
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

/// Decisión pura: las rutas protegidas sin sesión redirigen a /login
pub fn guard(route: &Route, is_authenticated: bool) -> RouteDecision {
    if route.is_guarded() && !is_authenticated {
        RouteDecision::Redirect(Route::Login)
    } else {
        RouteDecision::Render(route.clone())
    }
}

/// Aplicar una ruta al estado. Entrar a una vista de productos equivale a
/// montarla: la query se marca como stale para que se vuelva a pedir.
pub fn apply_route(state: &AppState, route: Route) {
    if route.is_guarded() && route != state.route.current() {
        state.products.invalidate();
    }
    state.route.set_current(route);
}

/// Navegar (nueva entrada en el historial)
pub fn navigate(state: &AppState, route: Route) {
    log::info!("🧭 [ROUTER] Navegando a {}", route.path());
    if let Err(e) = navigation_service::push_path(route.path()) {
        log::warn!("⚠️ [ROUTER] history.pushState falló: {:?}", e);
    }
    apply_route(state, route);
}

/// Redirigir (reemplaza la entrada actual del historial)
pub fn redirect(state: &AppState, route: Route) {
    log::info!("↪️ [ROUTER] Redirigiendo a {}", route.path());
    if let Err(e) = navigation_service::replace_path(route.path()) {
        log::warn!("⚠️ [ROUTER] history.replaceState falló: {:?}", e);
    }
    apply_route(state, route);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::product_gateway::fake::FakeGateway;
    use crate::utils::storage::MemoryStorage;
    use std::rc::Rc;

    const ALL_ROUTES: [Route; 4] = [Route::Home, Route::Dashboard, Route::Login, Route::Register];

    #[test]
    fn guarded_routes_render_only_with_session() {
        for route in [Route::Home, Route::Dashboard] {
            assert_eq!(guard(&route, true), RouteDecision::Render(route.clone()));
            assert_eq!(guard(&route, false), RouteDecision::Redirect(Route::Login));
        }
    }

    #[test]
    fn unguarded_routes_always_render() {
        for route in ALL_ROUTES.into_iter().filter(|r| !r.is_guarded()) {
            for authenticated in [true, false] {
                assert_eq!(guard(&route, authenticated), RouteDecision::Render(route.clone()));
            }
        }
        let unknown = Route::from_path("/nope");
        assert_eq!(guard(&unknown, false), RouteDecision::Render(unknown.clone()));
    }

    #[test]
    fn entering_product_view_marks_query_stale() {
        let state = AppState::new(
            Rc::new(MemoryStorage::new()),
            Rc::new(FakeGateway::default()),
            Route::Login,
        );
        let generation = state.products.begin_fetch();
        state.products.finish_fetch(generation, Ok(vec![]));
        assert!(!state.products.snapshot().stale);

        apply_route(&state, Route::Home);
        assert_eq!(state.route.current(), Route::Home);
        assert!(state.products.snapshot().stale);

        // Re-aplicar la misma ruta no fuerza otro fetch
        let generation = state.products.begin_fetch();
        state.products.finish_fetch(generation, Ok(vec![]));
        apply_route(&state, Route::Home);
        assert!(!state.products.snapshot().stale);
    }
}
