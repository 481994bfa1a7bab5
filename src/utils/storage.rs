// ============================================================================
// STORAGE - Acceso clave/valor (localStorage en el navegador, memoria en tests)
// ============================================================================

use web_sys::{window, Storage};

/// Backend clave/valor de strings planos (sin serialización JSON)
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// localStorage del navegador
#[derive(Clone, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(key, value)
            .map_err(|_| format!("Error guardando '{}' en localStorage", key))
    }
}

/// Storage en memoria para tests
#[cfg(test)]
pub mod memory {
    use super::KeyValueStorage;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Los clones comparten el mismo mapa.
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        items: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_item(key: &str, value: &str) -> Self {
            let storage = Self::new();
            storage.items.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }
    }

    impl KeyValueStorage for MemoryStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;
