// ============================================================================
// REGISTER VIEW - Registro simulado (Rust puro)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_submit, ElementBuilder};
use crate::models::auth::{AuthField, RegisterForm};
use crate::models::route::Route;
use crate::router;
use crate::state::app_state::AppState;
use crate::viewmodels::register_viewmodel::validate_register;
use crate::views::shared::{render_form_field, render_link, show_field_error, FieldSpec};

const REGISTER_FIELDS: [(AuthField, &str, &str, &str); 3] = [
    (AuthField::Username, "Username", "text", "Choose a username"),
    (AuthField::Password, "Password", "password", "Choose a password"),
    (AuthField::ConfirmPassword, "Confirm password", "password", "Repeat your password"),
];

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let form_values = Rc::new(RefCell::new(RegisterForm::default()));
    let submitted = Rc::new(Cell::new(false));

    let header = ElementBuilder::new("div")?
        .class("auth-header")
        .text("Create an account")
        .build();

    let mut children = vec![header];
    for (field, label, input_type, placeholder) in REGISTER_FIELDS {
        let form_values = form_values.clone();
        let submitted = submitted.clone();
        let group = render_form_field(
            FieldSpec {
                id: field.id(),
                label,
                input_type,
                placeholder,
                value: "",
                error: None,
            },
            move |value| {
                {
                    let mut form = form_values.borrow_mut();
                    match field {
                        AuthField::Username => form.username = value,
                        AuthField::Password => form.password = value,
                        AuthField::ConfirmPassword => form.confirm_password = value,
                    }
                }
                if submitted.get() {
                    let errors = validate_register(&form_values.borrow());
                    // confirmar depende de la contraseña: se refrescan todos
                    for (field, ..) in REGISTER_FIELDS {
                        show_field_error(field.id(), errors.get(field));
                    }
                }
            },
        )?;
        children.push(group);
    }

    children.push(
        ElementBuilder::new("button")?
            .attr("type", "submit")?
            .class("btn btn-block")
            .text("Register")
            .build(),
    );
    children.push(
        ElementBuilder::new("p")?
            .class("auth-footer")
            .text("Already have an account? ")
            .child(&render_link(state, "Login", Route::Login)?)?
            .build(),
    );

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .attr("novalidate", "")?
        .children(&children)?
        .build();

    {
        let state = state.clone();
        on_submit(&form, move || {
            submitted.set(true);
            let values = form_values.borrow().clone();
            match state.register_viewmodel().submit(&values) {
                Ok(route) => router::navigate(&state, route),
                Err(errors) => {
                    for (field, ..) in REGISTER_FIELDS {
                        show_field_error(field.id(), errors.get(field));
                    }
                }
            }
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("auth-screen")
        .child(&form)?
        .build())
}
