// ============================================================================
// REGISTER VIEWMODEL - Registro simulado (no persiste nada)
// ============================================================================

use crate::models::auth::{FieldErrors, RegisterForm};
use crate::models::route::Route;
use crate::utils::constants::*;
use crate::utils::validation::validate_length;

pub fn validate_register(form: &RegisterForm) -> FieldErrors {
    let confirm_password = if form.confirm_password != form.password {
        Some(PASSWORDS_MISMATCH_MESSAGE.to_string())
    } else {
        None
    };
    FieldErrors {
        username: validate_length(&form.username, USERNAME_MIN_LEN, USERNAME_MAX_LEN),
        password: validate_length(&form.password, PASSWORD_MIN_LEN, PASSWORD_MAX_LEN),
        confirm_password,
    }
}

#[derive(Default)]
pub struct RegisterViewModel;

impl RegisterViewModel {
    pub fn new() -> Self {
        Self
    }

    /// Ok(ruta a la que ir) o errores por campo
    pub fn submit(&self, form: &RegisterForm) -> Result<Route, FieldErrors> {
        let errors = validate_register(form);
        if !errors.is_empty() {
            return Err(errors);
        }
        // Demo: solo existe la cuenta admin/admin, el registro no se guarda
        log::info!("📝 [REGISTER] Registro simulado para {}", form.username);
        Ok(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn valid_registration_goes_to_login() {
        let vm = RegisterViewModel::new();
        assert_eq!(vm.submit(&form("newuser", "secret", "secret")), Ok(Route::Login));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let errors = RegisterViewModel::new()
            .submit(&form("newuser", "secret", "secreto"))
            .unwrap_err();
        assert_eq!(errors.confirm_password.as_deref(), Some("Passwords don't match"));
        assert_eq!(errors.username, None);
        assert_eq!(errors.password, None);
    }

    #[test]
    fn shares_login_length_rules() {
        let errors = RegisterViewModel::new().submit(&form("ab", "abc", "abc")).unwrap_err();
        assert!(errors.username.is_some());
        assert!(errors.password.is_some());
        assert_eq!(errors.confirm_password, None);
    }
}
