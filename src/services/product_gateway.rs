// ============================================================================
// PRODUCT GATEWAY - Las cuatro operaciones contra el recurso remoto "products"
// ============================================================================

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::models::product::{Product, ProductDraft, ProductId};

/// Gateway sin estado: sin retry, sin cache, sin resolución de conflictos.
/// `?Send` porque en WASM todo corre en un único hilo.
#[async_trait(?Send)]
pub trait ProductGateway {
    /// GET /products
    async fn list(&self) -> Result<Vec<Product>, GatewayError>;

    /// POST /products - devuelve el producto con el ID asignado
    async fn create(&self, draft: &ProductDraft) -> Result<Product, GatewayError>;

    /// PUT /products/{id} - reemplazo completo
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, GatewayError>;

    /// DELETE /products/{id}
    async fn delete(&self, id: ProductId) -> Result<(), GatewayError>;
}

/// Gateway en memoria para tests
#[cfg(test)]
pub mod fake {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    pub struct FakeGateway {
        pub products: RefCell<Vec<Product>>,
        pub next_id: Cell<ProductId>,
        /// Si está presente, todas las operaciones fallan con este error
        pub failure: RefCell<Option<GatewayError>>,
        pub list_calls: Cell<usize>,
    }

    impl FakeGateway {
        pub fn with_products(products: Vec<Product>) -> Self {
            let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            Self {
                products: RefCell::new(products),
                next_id: Cell::new(next_id),
                ..Self::default()
            }
        }

        pub fn fail_with(&self, error: GatewayError) {
            *self.failure.borrow_mut() = Some(error);
        }

        pub fn recover(&self) {
            *self.failure.borrow_mut() = None;
        }

        fn check(&self) -> Result<(), GatewayError> {
            match self.failure.borrow().clone() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }

        fn not_found() -> GatewayError {
            GatewayError::Http {
                status: 404,
                status_text: "Not Found".to_string(),
            }
        }
    }

    #[async_trait(?Send)]
    impl ProductGateway for FakeGateway {
        async fn list(&self) -> Result<Vec<Product>, GatewayError> {
            self.list_calls.set(self.list_calls.get() + 1);
            self.check()?;
            Ok(self.products.borrow().clone())
        }

        async fn create(&self, draft: &ProductDraft) -> Result<Product, GatewayError> {
            self.check()?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let product = Product::from_draft(id, draft.clone());
            self.products.borrow_mut().push(product.clone());
            Ok(product)
        }

        async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, GatewayError> {
            self.check()?;
            let mut products = self.products.borrow_mut();
            let slot = products
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(Self::not_found)?;
            *slot = Product::from_draft(id, draft.clone());
            Ok(slot.clone())
        }

        async fn delete(&self, id: ProductId) -> Result<(), GatewayError> {
            self.check()?;
            let mut products = self.products.borrow_mut();
            let before = products.len();
            products.retain(|p| p.id != id);
            if products.len() == before {
                return Err(Self::not_found());
            }
            Ok(())
        }
    }
}
