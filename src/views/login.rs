// ============================================================================
// LOGIN VIEW - Formulario de acceso (Rust puro)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use crate::dom::{button, on_submit, set_attribute, set_text_content, ElementBuilder};
use crate::models::auth::{AuthField, FieldErrors, LoginForm};
use crate::models::route::Route;
use crate::router;
use crate::state::app_state::AppState;
use crate::viewmodels::login_viewmodel::{validate_login, LoginOutcome};
use crate::views::shared::{render_form_field, render_link, show_field_error, FieldSpec};

const LOGIN_FIELDS: [AuthField; 2] = [AuthField::Username, AuthField::Password];

fn show_errors(errors: &FieldErrors) {
    for field in LOGIN_FIELDS {
        show_field_error(field.id(), errors.get(field));
    }
}

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");

    // Estado local del formulario (en closures)
    let form_values = Rc::new(RefCell::new(LoginForm::default()));
    // Tras el primer submit se re-valida en cada tecla
    let submitted = Rc::new(Cell::new(false));

    let on_field_change = |field: AuthField| {
        let form_values = form_values.clone();
        let submitted = submitted.clone();
        move |value: String| {
            {
                let mut form = form_values.borrow_mut();
                match field {
                    AuthField::Username => form.username = value,
                    _ => form.password = value,
                }
            }
            if submitted.get() {
                let errors = validate_login(&form_values.borrow());
                show_field_error(field.id(), errors.get(field));
            }
        }
    };

    let username_group = render_form_field(
        FieldSpec {
            id: AuthField::Username.id(),
            label: "Username",
            input_type: "text",
            placeholder: "Type your username",
            value: "",
            error: None,
        },
        on_field_change(AuthField::Username),
    )?;

    let password_group = render_form_field(
        FieldSpec {
            id: AuthField::Password.id(),
            label: "Password",
            input_type: "password",
            placeholder: "Enter your password",
            value: "",
            error: None,
        },
        on_field_change(AuthField::Password),
    )?;
    append_password_toggle(&password_group)?;

    let hint = ElementBuilder::new("p")?
        .class("form-hint")
        .text("* username: admin , password: admin")
        .build();
    password_group.append_child(&hint)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-block")
        .text("Login")
        .build();

    let header = ElementBuilder::new("div")?
        .class("auth-header")
        .text("Welcome !!")
        .build();
    let subtitle = ElementBuilder::new("div")?
        .class("auth-subtitle")
        .text("Please login to continue")
        .build();
    header.append_child(&subtitle)?;

    let footer = ElementBuilder::new("p")?
        .class("auth-footer")
        .text("No account yet? ")
        .child(&render_link(state, "Register", Route::Register)?)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .attr("novalidate", "")?
        .children(&[header, username_group, password_group, submit_btn, footer])?
        .build();

    // Submit
    {
        let state = state.clone();
        on_submit(&form, move || {
            submitted.set(true);
            let values = form_values.borrow().clone();

            match state.login_viewmodel().submit(&values) {
                LoginOutcome::Authenticated { redirect } => {
                    router::navigate(&state, redirect);
                }
                LoginOutcome::Invalid(errors) | LoginOutcome::WrongCredentials(errors) => {
                    show_errors(&errors);
                }
            }
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("auth-screen")
        .child(&form)?
        .build())
}

/// Botón mostrar/ocultar contraseña
fn append_password_toggle(password_group: &Element) -> Result<(), JsValue> {
    let input_id = AuthField::Password.id();
    // El grupo todavía no está en el documento: buscar dentro de él
    let input = password_group
        .query_selector(&format!("#{}", input_id))?
        .ok_or_else(|| JsValue::from_str("Password input not found"))?;

    let visible = Rc::new(Cell::new(false));
    let toggle = {
        let input = input.clone();
        button("btn-toggle-password", "👁️")?
            .attr("aria-label", "Show password")?
            .on_click(move |e| {
                let Some(target) = e.current_target() else { return };
                let Ok(toggle) = target.dyn_into::<Element>() else { return };
                let show = !visible.get();
                visible.set(show);
                let result = set_attribute(&input, "type", if show { "text" } else { "password" })
                    .and_then(|_| {
                        set_attribute(&toggle, "aria-label", if show { "Hide password" } else { "Show password" })
                    });
                if let Err(e) = result {
                    log::warn!("⚠️ [LOGIN] Error cambiando visibilidad: {:?}", e);
                }
                set_text_content(&toggle, if show { "🙈" } else { "👁️" });
            })?
            .build()
    };

    // input + botón dentro de un wrapper relativo
    let wrapper = ElementBuilder::new("div")?
        .class("password-wrapper")
        .build();
    password_group.insert_before(&wrapper, Some(input.as_ref()))?;
    wrapper.append_child(&input)?;
    wrapper.append_child(&toggle)?;
    Ok(())
}
