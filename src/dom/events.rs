// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Listeners en elementos del DOM: al destruir el elemento (set_inner_html("")
// en cada re-render) el navegador limpia sus listeners, por eso forget() es
// seguro aquí. Los listeners globales viven en services/navigation_service.rs.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Handler de input que recibe directamente el valor del <input>
pub fn on_input_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            handler(input.value());
        }
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Handler de submit (hace prevent_default antes de llamar)
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

