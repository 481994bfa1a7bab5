// ============================================================================
// PRODUCT FORM - Diálogo de crear / editar producto
// ============================================================================
// Los valores y errores se guardan en ProductsState (sin notificar): un
// re-render completo a mitad de edición vuelve a pintar lo mismo.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{button, on_submit, set_attribute, ElementBuilder};
use crate::models::product::{ProductDraft, ProductField};
use crate::state::app_state::AppState;
use crate::state::products_state::ProductEditor;
use crate::views::dialog::render_dialog_shell;
use crate::views::shared::{render_form_field, show_field_error, FieldSpec};

fn field_dom_id(field: ProductField) -> String {
    format!("product-{}", field.id())
}

pub fn render_product_form_dialog(
    state: &AppState,
    title: &str,
    editor: &ProductEditor,
    on_submit_draft: Rc<dyn Fn(ProductDraft)>,
) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .class("product-form")
        .attr("novalidate", "")?
        .build();

    for field in ProductField::ALL {
        let dom_id = field_dom_id(field);
        let products_state = state.products.clone();
        let group = render_form_field(
            FieldSpec {
                id: &dom_id,
                label: field.label(),
                input_type: field.input_type(),
                placeholder: "",
                value: editor.form.value(field),
                error: editor.errors.get(&field).map(String::as_str),
            },
            move |value| products_state.edit_form_field(field, value),
        )?;
        if field == ProductField::Price {
            if let Some(input) = group.query_selector("input")? {
                set_attribute(&input, "step", "0.01")?;
                set_attribute(&input, "min", "0")?;
            }
        }
        form.append_child(&group)?;
    }

    let save_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn")
        .text("Save")
        .build();
    let cancel_btn = {
        let products_state = state.products.clone();
        button("btn btn-ghost", "Cancel")?
            .on_click(move |_| products_state.close_dialog())?
            .build()
    };
    let footer = ElementBuilder::new("div")?
        .class("dialog-footer")
        .children(&[save_btn, cancel_btn])?
        .build();
    form.append_child(&footer)?;

    let products_state = state.products.clone();
    on_submit(&form, move || {
        let Some(editor) = products_state.editor() else { return };
        let (draft, errors) = match editor.form.validate() {
            Ok(draft) => (Some(draft), Default::default()),
            Err(errors) => (None, errors),
        };
        for field in ProductField::ALL {
            show_field_error(&field_dom_id(field), errors.get(&field).map(String::as_str));
        }
        products_state.set_form_errors(errors);
        if let Some(draft) = draft {
            on_submit_draft(draft);
        }
    })?;

    render_dialog_shell(state, title, &[form])
}
