// ============================================================================
// DASHBOARD VIEW - Lista de productos + diálogos CRUD
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{button, ElementBuilder};
use crate::models::product::{Product, ProductDraft};
use crate::state::app_state::AppState;
use crate::state::products_state::{ActiveDialog, ProductListDisplay};
use crate::views::delete_dialog::render_delete_dialog;
use crate::views::product_form::render_product_form_dialog;
use crate::views::shared::render_navbar;

/// Renderizar la gestión de productos (rutas "/" y "/dashboard")
pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let vm = state.products_viewmodel();
    if let Some(fetch) = vm.fetch_if_needed() {
        spawn_local(fetch);
    }

    let products = match state.products.snapshot().display() {
        ProductListDisplay::Loading => return render_status("Loading...", "status-message"),
        ProductListDisplay::Error(message) => {
            return render_status(&format!("Error: {}", message), "status-message status-error")
        }
        ProductListDisplay::Ready(products) => products,
    };

    let page = ElementBuilder::new("div")?
        .class("dashboard")
        .child(&render_navbar(state)?)?
        .build();

    let title = ElementBuilder::new("h2")?.text("Products").build();
    let create_btn = {
        let products_state = state.products.clone();
        button("btn", "Create Product")?
            .on_click(move |_| products_state.open_create())?
            .build()
    };
    let header = ElementBuilder::new("div")?
        .class("products-header")
        .children(&[title, create_btn])?
        .build();

    let list = ElementBuilder::new("ul")?
        .class("product-list")
        .build();
    for product in &products {
        let item = render_product_item(state, product)?;
        list.append_child(&item)?;
    }

    let section = ElementBuilder::new("div")?
        .class("products")
        .children(&[header, list])?
        .build();
    page.append_child(&section)?;

    if let Some(dialog) = render_active_dialog(state)? {
        page.append_child(&dialog)?;
    }

    Ok(page)
}

fn render_status(text: &str, class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class(class).text(text).build())
}

fn render_product_item(state: &AppState, product: &Product) -> Result<Element, JsValue> {
    let item = ElementBuilder::new("li")?
        .class("product-item")
        .attr("data-product-id", &product.id.to_string())?
        .build();

    if !product.image.is_empty() {
        let image = ElementBuilder::new("img")?
            .class("product-image")
            .attr("src", &product.image)?
            .attr("alt", &product.title)?
            .build();
        item.append_child(&image)?;
    }

    let info = ElementBuilder::new("div")?
        .class("product-info")
        .child(&ElementBuilder::new("p")?.class("product-title").text(&product.title).build())?
        .child(&ElementBuilder::new("p")?.class("product-price").text(&product.formatted_price()).build())?
        .build();

    let edit_btn = {
        let products_state = state.products.clone();
        let product = product.clone();
        button("btn btn-outline btn-sm", "Edit")?
            .on_click(move |_| products_state.open_edit(product.clone()))?
            .build()
    };
    let delete_btn = {
        let products_state = state.products.clone();
        let product = product.clone();
        button("btn btn-destructive btn-sm", "Delete")?
            .on_click(move |_| products_state.open_delete(product.clone()))?
            .build()
    };
    let actions = ElementBuilder::new("div")?
        .class("product-actions")
        .children(&[edit_btn, delete_btn])?
        .build();

    item.append_child(&info)?;
    item.append_child(&actions)?;
    Ok(item)
}

/// Diálogo abierto (si hay) con las mutaciones conectadas
fn render_active_dialog(state: &AppState) -> Result<Option<Element>, JsValue> {
    let vm = state.products_viewmodel();
    let dialog = match state.products.dialog() {
        ActiveDialog::Closed => return Ok(None),
        ActiveDialog::Create(editor) => render_product_form_dialog(
            state,
            "Create Product",
            &editor,
            Rc::new(move |draft: ProductDraft| {
                let vm = vm.clone();
                spawn_local(async move {
                    // El error ya queda en el log; el diálogo sigue abierto
                    let _ = vm.create_product(draft).await;
                });
            }),
        )?,
        ActiveDialog::Edit(product, editor) => render_product_form_dialog(
            state,
            "Update Product",
            &editor,
            Rc::new(move |draft: ProductDraft| {
                let vm = vm.clone();
                let id = product.id;
                spawn_local(async move {
                    let _ = vm.update_product(id, draft).await;
                });
            }),
        )?,
        ActiveDialog::Delete(product) => {
            let id = product.id;
            render_delete_dialog(
                state,
                &product,
                Rc::new(move || {
                    let vm = vm.clone();
                    spawn_local(async move {
                        let _ = vm.delete_product(id).await;
                    });
                }),
            )?
        }
    };
    Ok(Some(dialog))
}
