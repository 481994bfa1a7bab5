use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::route::Route;
use crate::state::app_state::AppState;
use crate::views::shared::render_link;

pub fn render_not_found(state: &AppState, path: &str) -> Result<Element, JsValue> {
    let message = ElementBuilder::new("p")?
        .text(&format!("No page at {}. ", path))
        .child(&render_link(state, "Go home", Route::Home)?)?
        .build();
    Ok(ElementBuilder::new("div")?
        .class("status-message")
        .child(&message)?
        .build())
}
