// ============================================================================
// LOGIN VIEWMODEL - Validación + comprobación de credenciales
// ============================================================================
// Las credenciales son un par fijo comparado en claro: no hay backend.
// ============================================================================

use crate::models::auth::{FieldErrors, LoginForm};
use crate::models::route::Route;
use crate::state::auth_state::AuthState;
use crate::utils::constants::*;
use crate::utils::validation::validate_length;

/// Resultado de enviar el formulario
#[derive(Clone, PartialEq, Debug)]
pub enum LoginOutcome {
    /// Sesión iniciada; la vista navega a `redirect`
    Authenticated { redirect: Route },
    /// Errores de formato: no se llegó a comprobar credenciales
    Invalid(FieldErrors),
    /// Formato válido pero credenciales incorrectas
    WrongCredentials(FieldErrors),
}

/// Validación de formato (longitudes)
pub fn validate_login(form: &LoginForm) -> FieldErrors {
    FieldErrors {
        username: validate_length(&form.username, USERNAME_MIN_LEN, USERNAME_MAX_LEN),
        password: validate_length(&form.password, PASSWORD_MIN_LEN, PASSWORD_MAX_LEN),
        confirm_password: None,
    }
}

fn credentials_match(form: &LoginForm) -> bool {
    form.username == ADMIN_USERNAME && form.password == ADMIN_PASSWORD
}

pub struct LoginViewModel {
    auth: AuthState,
}

impl LoginViewModel {
    pub fn new(auth: AuthState) -> Self {
        Self { auth }
    }

    pub fn submit(&self, form: &LoginForm) -> LoginOutcome {
        let errors = validate_login(form);
        if !errors.is_empty() {
            log::debug!("📝 [LOGIN] Formulario inválido: {:?}", errors);
            return LoginOutcome::Invalid(errors);
        }

        if credentials_match(form) {
            log::info!("✅ [LOGIN] Login correcto para {}", form.username);
            self.auth.set_authenticated(true);
            LoginOutcome::Authenticated { redirect: Route::Home }
        } else {
            log::warn!("🔐 [LOGIN] Credenciales incorrectas para {}", form.username);
            LoginOutcome::WrongCredentials(FieldErrors::both(WRONG_CREDENTIALS_MESSAGE))
        }
    }
}
