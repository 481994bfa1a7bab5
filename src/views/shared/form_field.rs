// ============================================================================
// FORM FIELD - label + input + mensaje de error
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{get_element_by_id, on_input_value, set_text_content, toggle_class, ElementBuilder};

/// Opciones de un campo
pub struct FieldSpec<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub input_type: &'a str,
    pub placeholder: &'a str,
    pub value: &'a str,
    /// Error ya conocido (p.ej. tras un re-render)
    pub error: Option<&'a str>,
}

fn error_id(field_id: &str) -> String {
    format!("{}-error", field_id)
}

/// Crear form group. `on_change` recibe el valor en cada tecla.
pub fn render_form_field<F>(spec: FieldSpec, on_change: F) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let label = ElementBuilder::new("label")?
        .attr("for", spec.id)?
        .text(spec.label)
        .build();

    let input = ElementBuilder::new("input")?
        .id(spec.id)?
        .class("form-input")
        .attr("type", spec.input_type)?
        .attr("name", spec.id)?
        .attr("placeholder", spec.placeholder)?
        .attr("value", spec.value)?
        .build();
    on_input_value(&input, on_change)?;

    let error = ElementBuilder::new("p")?
        .id(&error_id(spec.id))?
        .class("form-error")
        .text(spec.error.unwrap_or(""))
        .build();

    let group_class = if spec.error.is_some() { "form-group has-error" } else { "form-group" };
    Ok(ElementBuilder::new("div")?
        .id(&format!("{}-group", spec.id))?
        .class(group_class)
        .children(&[label, input, error])?
        .build())
}

/// Mostrar (o limpiar con None) el error de un campo
pub fn show_field_error(field_id: &str, message: Option<&str>) {
    if let Some(error) = get_element_by_id(&error_id(field_id)) {
        set_text_content(&error, message.unwrap_or(""));
    }
    if let Some(group) = get_element_by_id(&format!("{}-group", field_id)) {
        if let Err(e) = toggle_class(&group, "has-error", message.is_some()) {
            log::warn!("⚠️ [FORM] No se pudo marcar el campo {}: {:?}", field_id, e);
        }
    }
}
