// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra /products
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::GatewayError;
use crate::models::product::{Product, ProductDraft, ProductId};
use crate::services::product_gateway::ProductGateway;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.products_api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn network_error(e: gloo_net::Error) -> GatewayError {
    GatewayError::Network(e.to_string())
}

/// Convierte respuestas no-2xx en error
fn ensure_ok(response: &Response) -> Result<(), GatewayError> {
    if response.ok() {
        Ok(())
    } else {
        Err(GatewayError::Http {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    ensure_ok(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Parse(e.to_string()))
}

#[async_trait(?Send)]
impl ProductGateway for ApiClient {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        let url = self.products_url();
        log::info!("📦 [API] GET {}", url);

        let response = Request::get(&url).send().await.map_err(network_error)?;
        let products = read_json::<Vec<Product>>(response).await?;

        log::info!("✅ [API] {} productos recibidos", products.len());
        Ok(products)
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, GatewayError> {
        let url = self.products_url();
        log::info!("➕ [API] POST {} ({})", url, draft.title);

        let response = Request::post(&url)
            .json(draft)
            .map_err(|e| GatewayError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        let product = read_json::<Product>(response).await?;

        log::info!("✅ [API] Producto creado con id {}", product.id);
        Ok(product)
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, GatewayError> {
        let url = self.product_url(id);
        log::info!("✏️ [API] PUT {}", url);

        let response = Request::put(&url)
            .json(draft)
            .map_err(|e| GatewayError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        read_json::<Product>(response).await
    }

    async fn delete(&self, id: ProductId) -> Result<(), GatewayError> {
        let url = self.product_url(id);
        log::info!("🗑️ [API] DELETE {}", url);

        let response = Request::delete(&url).send().await.map_err(network_error)?;
        // El cuerpo (si lo hay) se ignora
        ensure_ok(&response)
    }
}
