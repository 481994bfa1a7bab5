// Ruta actual de la aplicación

use crate::models::route::Route;
use crate::state::reactivity::ReactiveState;

#[derive(Clone)]
pub struct RouteState {
    current: ReactiveState<Route>,
}

impl RouteState {
    pub fn new(initial: Route) -> Self {
        Self {
            current: ReactiveState::new(initial),
        }
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn set_current(&self, route: Route) {
        self.current.set(route);
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.current.subscribe(callback);
    }
}
