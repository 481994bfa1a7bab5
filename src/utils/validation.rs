// Validaciones de campos de formulario (longitudes, obligatorios, precio)

use crate::utils::constants::{INVALID_PRICE_MESSAGE, REQUIRED_FIELD_MESSAGE};

/// Valida la longitud en caracteres de un campo de texto.
/// Devuelve el mensaje de error si está fuera de rango.
pub fn validate_length(value: &str, min: usize, max: usize) -> Option<String> {
    let len = value.chars().count();
    if len < min {
        Some(format!("String must contain at least {} character(s)", min))
    } else if len > max {
        Some(format!("String must contain at most {} character(s)", max))
    } else {
        None
    }
}

pub fn validate_required(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(REQUIRED_FIELD_MESSAGE.to_string())
    } else {
        None
    }
}

/// Parsea un precio introducido por el usuario (finito y >= 0)
pub fn parse_price(value: &str) -> Result<f64, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(REQUIRED_FIELD_MESSAGE.to_string());
    }
    match value.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(INVALID_PRICE_MESSAGE.to_string()),
    }
}
