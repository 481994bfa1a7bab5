use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{button, ElementBuilder};
use crate::state::app_state::AppState;

/// Barra superior del dashboard con el botón de logout
pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h1")?.text("Dashboard").build();

    let auth = state.auth.clone();
    let logout = button("btn", "Logout")?
        .on_click(move |_| auth.logout())?
        .build();

    Ok(ElementBuilder::new("nav")?
        .class("navbar")
        .children(&[title, logout])?
        .build())
}
