// ============================================================================
// AUTH STATE - Flag de sesión persistido en storage
// ============================================================================

use std::rc::Rc;

use crate::state::reactivity::ReactiveState;
use crate::utils::constants::AUTH_STORAGE_KEY;
use crate::utils::storage::KeyValueStorage;

/// Interpreta el valor persistido: solo el literal "true" cuenta como sesión
pub fn parse_session_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Estado de autenticación (gate de UI, no es una credencial)
#[derive(Clone)]
pub struct AuthState {
    is_authenticated: ReactiveState<bool>,
    storage: Rc<dyn KeyValueStorage>,
}

impl AuthState {
    /// Rehidratar desde storage
    pub fn from_storage(storage: Rc<dyn KeyValueStorage>) -> Self {
        let persisted = storage.get_item(AUTH_STORAGE_KEY);
        let is_authenticated = parse_session_flag(persisted.as_deref());
        log::info!(
            "💾 [AUTH] Flag de sesión restaurado: {:?} -> {}",
            persisted,
            is_authenticated
        );
        Self {
            is_authenticated: ReactiveState::new(is_authenticated),
            storage,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated.get()
    }

    /// Establecer flag; se persiste antes de notificar a los subscribers
    pub fn set_authenticated(&self, authenticated: bool) {
        if let Err(e) = self
            .storage
            .set_item(AUTH_STORAGE_KEY, &authenticated.to_string())
        {
            log::warn!("⚠️ [AUTH] No se pudo persistir el flag de sesión: {}", e);
        }
        self.is_authenticated.set(authenticated);
    }

    /// Logout
    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.set_authenticated(false);
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.is_authenticated.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use std::cell::Cell;

    fn auth_with(storage: &MemoryStorage) -> AuthState {
        AuthState::from_storage(Rc::new(storage.clone()))
    }

    #[test]
    fn only_literal_true_restores_session() {
        for raw in ["false", "True", "TRUE", " true", "1", "yes", "\"true\"", ""] {
            let storage = MemoryStorage::with_item(AUTH_STORAGE_KEY, raw);
            assert!(!auth_with(&storage).is_authenticated(), "valor {:?}", raw);
        }
        assert!(!auth_with(&MemoryStorage::new()).is_authenticated());

        let storage = MemoryStorage::with_item(AUTH_STORAGE_KEY, "true");
        assert!(auth_with(&storage).is_authenticated());
    }

    #[test]
    fn every_write_is_persisted() {
        let storage = MemoryStorage::new();
        let auth = auth_with(&storage);

        auth.set_authenticated(true);
        assert_eq!(storage.get_item(AUTH_STORAGE_KEY).as_deref(), Some("true"));

        auth.logout();
        assert!(!auth.is_authenticated());
        assert_eq!(storage.get_item(AUTH_STORAGE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn subscribers_observe_persisted_value() {
        let storage = MemoryStorage::new();
        let auth = auth_with(&storage);
        let observed = Rc::new(Cell::new(None));
        {
            let storage = storage.clone();
            let observed = observed.clone();
            auth.subscribe(move || {
                observed.set(Some(parse_session_flag(storage.get_item(AUTH_STORAGE_KEY).as_deref())));
            });
        }
        auth.set_authenticated(true);
        assert_eq!(observed.get(), Some(true));
    }
}
