// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::rc::Rc;

use crate::models::route::Route;
use crate::services::product_gateway::ProductGateway;
use crate::state::{AuthState, ProductsState, RouteState};
use crate::utils::storage::KeyValueStorage;
use crate::viewmodels::{LoginViewModel, ProductsViewModel, RegisterViewModel};

/// Estado global de la aplicación (se clona barato: todo es Rc)
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub route: RouteState,
    pub products: ProductsState,
    gateway: Rc<dyn ProductGateway>,
}

impl AppState {
    pub fn new(
        storage: Rc<dyn KeyValueStorage>,
        gateway: Rc<dyn ProductGateway>,
        initial_route: Route,
    ) -> Self {
        Self {
            auth: AuthState::from_storage(storage),
            route: RouteState::new(initial_route),
            products: ProductsState::new(),
            gateway,
        }
    }

    pub fn login_viewmodel(&self) -> LoginViewModel {
        LoginViewModel::new(self.auth.clone())
    }

    pub fn register_viewmodel(&self) -> RegisterViewModel {
        RegisterViewModel::new()
    }

    pub fn products_viewmodel(&self) -> ProductsViewModel {
        ProductsViewModel::new(self.gateway.clone(), self.products.clone())
    }

    /// Suscribirse a cualquier cambio que requiera re-render.
    /// Los cambios de productos solo cuentan si la vista de productos está
    /// en pantalla: un fetch rezagado no debe repintar login/registro.
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + Clone + 'static,
    {
        self.auth.subscribe(callback.clone());
        self.route.subscribe(callback.clone());

        let auth = self.auth.clone();
        let route = self.route.clone();
        self.products.subscribe(move || {
            if auth.is_authenticated() && route.current().is_guarded() {
                callback();
            }
        });
    }
}
