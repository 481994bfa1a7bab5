// Contenedor modal compartido: overlay + caja con título

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;

/// Click en el overlay cierra el diálogo (y limpia la selección)
pub fn render_dialog_shell(state: &AppState, title: &str, body: &[Element]) -> Result<Element, JsValue> {
    let dialog = ElementBuilder::new("div")?
        .class("dialog")
        .attr("role", "dialog")?
        .attr("aria-modal", "true")?
        .child(&ElementBuilder::new("h2")?.class("dialog-title").text(title).build())?
        .children(body)?
        .build();

    // Prevenir cierre al click dentro
    {
        let closure = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.stop_propagation();
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        dialog.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let products_state = state.products.clone();
    Ok(ElementBuilder::new("div")?
        .class("dialog-overlay")
        .child(&dialog)?
        .on_click(move |_| products_state.close_dialog())?
        .build())
}
