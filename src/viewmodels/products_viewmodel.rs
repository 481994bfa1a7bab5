// ============================================================================
// PRODUCTS VIEWMODEL - Query de la lista + mutaciones CRUD
// ============================================================================
// Sin optimistic UI: la lista solo refleja lo que el servidor confirma tras
// invalidar y volver a pedir.
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use crate::error::GatewayError;
use crate::models::product::{Product, ProductDraft, ProductId};
use crate::services::product_gateway::ProductGateway;
use crate::state::products_state::{DialogKind, ProductsState};

#[derive(Clone)]
pub struct ProductsViewModel {
    gateway: Rc<dyn ProductGateway>,
    state: ProductsState,
}

impl ProductsViewModel {
    pub fn new(gateway: Rc<dyn ProductGateway>, state: ProductsState) -> Self {
        Self { gateway, state }
    }

    /// Pedir la lista completa. El fetch se registra en el estado al llamar
    /// (no al hacer poll), así un render posterior no lanza otro igual.
    pub fn fetch_products(&self) -> impl Future<Output = ()> + 'static {
        let generation = self.state.begin_fetch();
        let gateway = self.gateway.clone();
        let state = self.state.clone();

        async move {
            log::info!("📦 [PRODUCTS] Fetch #{} de productos", generation);
            let result = gateway.list().await.map_err(|e| {
                log::error!("❌ [PRODUCTS] Error obteniendo productos: {}", e);
                e.to_string()
            });
            state.finish_fetch(generation, result);
        }
    }

    /// Lanzar el fetch si la query está stale y no hay uno en curso
    pub fn fetch_if_needed(&self) -> Option<impl Future<Output = ()> + 'static> {
        if self.state.snapshot().needs_fetch() {
            Some(self.fetch_products())
        } else {
            None
        }
    }

    /// Tras una mutación correcta: cerrar su diálogo (si el usuario no abrió
    /// otro mientras tanto), invalidar y volver a pedir
    async fn on_mutation_success(&self, dialog: DialogKind) {
        self.state.close_dialog_if(dialog);
        self.state.invalidate();
        self.fetch_products().await;
    }

    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, GatewayError> {
        match self.gateway.create(&draft).await {
            Ok(product) => {
                log::info!("✅ [PRODUCTS] Producto creado: {} (id {})", product.title, product.id);
                self.on_mutation_success(DialogKind::Create).await;
                Ok(product)
            }
            Err(e) => {
                log::error!("❌ [PRODUCTS] Error creando producto: {}", e);
                Err(e)
            }
        }
    }

    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, GatewayError> {
        match self.gateway.update(id, &draft).await {
            Ok(product) => {
                log::info!("✅ [PRODUCTS] Producto {} actualizado", id);
                self.on_mutation_success(DialogKind::Edit(id)).await;
                Ok(product)
            }
            Err(e) => {
                log::error!("❌ [PRODUCTS] Error actualizando producto {}: {}", id, e);
                Err(e)
            }
        }
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<(), GatewayError> {
        match self.gateway.delete(id).await {
            Ok(()) => {
                log::info!("🗑️ [PRODUCTS] Producto {} eliminado", id);
                self.on_mutation_success(DialogKind::Delete(id)).await;
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [PRODUCTS] Error eliminando producto {}: {}", id, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::product_gateway::fake::FakeGateway;
    use crate::state::products_state::{ActiveDialog, ProductListDisplay};
    use crate::models::product::ProductForm;
    use futures::executor::block_on;

    fn product(id: ProductId, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: format!("{} description", title),
            category: "jewelery".to_string(),
            image: format!("https://fakestoreapi.com/img/{}.jpg", id),
        }
    }

    fn catalog() -> Vec<Product> {
        (1..=8).map(|id| product(id, &format!("Product {}", id), id as f64 * 10.0)).collect()
    }

    fn setup(products: Vec<Product>) -> (ProductsViewModel, Rc<FakeGateway>, ProductsState) {
        let gateway = Rc::new(FakeGateway::with_products(products));
        let state = ProductsState::new();
        let vm = ProductsViewModel::new(gateway.clone(), state.clone());
        (vm, gateway, state)
    }

    fn displayed(state: &ProductsState) -> Vec<Product> {
        match state.snapshot().display() {
            ProductListDisplay::Ready(products) => products,
            other => panic!("esperaba lista, obtuve {:?}", other),
        }
    }

    #[test]
    fn mount_fetches_once() {
        let (vm, gateway, state) = setup(catalog());

        let fetch = vm.fetch_if_needed().expect("primer render debe pedir la lista");
        assert!(vm.fetch_if_needed().is_none());
        block_on(fetch);

        assert_eq!(gateway.list_calls.get(), 1);
        assert_eq!(displayed(&state).len(), 8);
        assert!(vm.fetch_if_needed().is_none());
    }

    #[test]
    fn delete_refetches_and_removes_product() {
        let (vm, gateway, state) = setup(catalog());
        block_on(vm.fetch_products());
        state.open_delete(product(7, "Product 7", 70.0));

        block_on(vm.delete_product(7)).unwrap();

        assert_eq!(gateway.list_calls.get(), 2);
        let ids: Vec<ProductId> = displayed(&state).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 8]);
        assert_eq!(state.dialog(), ActiveDialog::Closed);
    }

    #[test]
    fn create_shows_server_assigned_product() {
        let (vm, _gateway, state) = setup(catalog());
        block_on(vm.fetch_products());
        state.open_create();

        let draft = ProductDraft {
            title: "Gold ring".to_string(),
            price: 12.5,
            description: "Shiny".to_string(),
            category: "jewelery".to_string(),
            image: "https://example.com/ring.png".to_string(),
        };
        let created = block_on(vm.create_product(draft.clone())).unwrap();

        assert_eq!(created.id, 9);
        assert_eq!(displayed(&state).last(), Some(&Product::from_draft(9, draft)));
        assert!(!state.dialog().is_open());
    }

    #[test]
    fn update_replaces_fields_and_clears_selection() {
        let (vm, _gateway, state) = setup(catalog());
        block_on(vm.fetch_products());
        let original = product(3, "Product 3", 30.0);
        state.open_edit(original.clone());

        let mut form = ProductForm::from_product(&original);
        form.price = "31.99".to_string();
        form.title = "Product 3 v2".to_string();
        block_on(vm.update_product(3, form.validate().unwrap())).unwrap();

        let updated = displayed(&state).into_iter().find(|p| p.id == 3).unwrap();
        assert_eq!(updated.title, "Product 3 v2");
        assert_eq!(updated.price, 31.99);
        assert_eq!(state.dialog(), ActiveDialog::Closed);
    }

    #[test]
    fn failed_mutation_keeps_dialog_open_and_list_untouched() {
        let (vm, gateway, state) = setup(catalog());
        block_on(vm.fetch_products());
        state.open_delete(product(2, "Product 2", 20.0));

        gateway.fail_with(GatewayError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        });
        let err = block_on(vm.delete_product(2)).unwrap_err();

        assert!(matches!(err, GatewayError::Http { status: 500, .. }));
        assert_eq!(state.dialog().kind(), DialogKind::Delete(2));
        assert_eq!(gateway.list_calls.get(), 1);
        assert_eq!(displayed(&state).len(), 8);
    }

    #[test]
    fn create_result_leaves_other_dialog_open() {
        let (vm, _gateway, state) = setup(catalog());
        block_on(vm.fetch_products());
        state.open_create();
        let create = vm.create_product(ProductDraft {
            title: "Scarf".to_string(),
            price: 9.0,
            description: "Wool".to_string(),
            category: "women's clothing".to_string(),
            image: "https://example.com/scarf.png".to_string(),
        });

        // Mientras el POST está en vuelo el usuario abre otro diálogo
        state.open_delete(product(5, "Product 5", 50.0));
        block_on(create).unwrap();

        assert_eq!(state.dialog().kind(), DialogKind::Delete(5));
        assert_eq!(displayed(&state).len(), 9);
    }

    #[test]
    fn failed_list_renders_reason_and_recovers_on_refetch() {
        let (vm, gateway, state) = setup(catalog());
        gateway.fail_with(GatewayError::Network("Failed to fetch".to_string()));
        block_on(vm.fetch_products());

        assert_eq!(
            state.snapshot().display(),
            ProductListDisplay::Error("Network Error: Failed to fetch".to_string())
        );

        gateway.recover();
        state.invalidate();
        block_on(vm.fetch_if_needed().expect("la query invalidada debe volver a pedirse"));
        assert_eq!(displayed(&state).len(), 8);
    }
}
