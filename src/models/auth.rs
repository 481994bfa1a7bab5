use serde::{Deserialize, Serialize};

/// Valores del formulario de login
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Campos de los formularios de autenticación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthField {
    Username,
    Password,
    ConfirmPassword,
}

impl AuthField {
    pub fn id(&self) -> &'static str {
        match self {
            AuthField::Username => "username",
            AuthField::Password => "password",
            AuthField::ConfirmPassword => "confirm-password",
        }
    }
}

/// Errores por campo (None = campo válido)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }

    pub fn get(&self, field: AuthField) -> Option<&str> {
        match field {
            AuthField::Username => self.username.as_deref(),
            AuthField::Password => self.password.as_deref(),
            AuthField::ConfirmPassword => self.confirm_password.as_deref(),
        }
    }

    /// Mismo mensaje en usuario y contraseña (credenciales incorrectas)
    pub fn both(message: &str) -> Self {
        Self {
            username: Some(message.to_string()),
            password: Some(message.to_string()),
            confirm_password: None,
        }
    }
}

/// Valores del formulario de registro
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}
