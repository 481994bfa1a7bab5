use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::route::Route;
use crate::router;
use crate::state::app_state::AppState;

/// <a> que navega sin recargar la página
pub fn render_link(state: &AppState, text: &str, route: Route) -> Result<Element, JsValue> {
    let state = state.clone();
    let href = route.path().to_string();
    Ok(ElementBuilder::new("a")?
        .attr("href", &href)?
        .text(text)
        .on_click(move |e| {
            e.prevent_default();
            router::navigate(&state, route.clone());
        })?
        .build())
}
