//! Errores del gateway de productos.

use thiserror::Error;

/// Fallo de una operación contra la API remota de productos.
///
/// El `Display` es lo que ve el usuario en la vista de productos
/// (`Error: <mensaje>`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// La request no llegó a completarse (red, CORS, DNS...)
    #[error("Network Error: {0}")]
    Network(String),

    /// Respuesta fuera del rango 2xx
    #[error("Request failed with status code {status}")]
    Http { status: u16, status_text: String },

    /// Cuerpo de respuesta no parseable
    #[error("Invalid response body: {0}")]
    Parse(String),

    /// No se pudo serializar el cuerpo de la request
    #[error("Invalid request body: {0}")]
    Serialization(String),
}
