use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{button, ElementBuilder};
use crate::models::product::Product;
use crate::state::app_state::AppState;
use crate::views::dialog::render_dialog_shell;

/// Confirmación de borrado del producto seleccionado
pub fn render_delete_dialog(
    state: &AppState,
    product: &Product,
    on_confirm: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let message = ElementBuilder::new("p")?
        .text(&format!("Are you sure you want to delete \"{}\"?", product.title))
        .build();

    let confirm_btn = button("btn btn-destructive", "Delete")?
        .on_click(move |_| on_confirm())?
        .build();
    let cancel_btn = {
        let products_state = state.products.clone();
        button("btn btn-ghost", "Cancel")?
            .on_click(move |_| products_state.close_dialog())?
            .build()
    };
    let footer = ElementBuilder::new("div")?
        .class("dialog-footer")
        .children(&[confirm_btn, cancel_btn])?
        .build();

    render_dialog_shell(state, "Delete Product", &[message, footer])
}
