// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod auth_state;
pub mod route_state;
pub mod products_state;
pub mod app_state;

pub use auth_state::AuthState;
pub use route_state::RouteState;
pub use products_state::ProductsState;
