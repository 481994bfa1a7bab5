/// Clave de localStorage con el flag de sesión ("true" / "false")
pub const AUTH_STORAGE_KEY: &str = "isAuthenticated";

/// Credenciales fijas de la demo. No hay backend de autenticación.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 5;
pub const PASSWORD_MAX_LEN: usize = 50;

pub const WRONG_CREDENTIALS_MESSAGE: &str = "Wrong username or password";
pub const PASSWORDS_MISMATCH_MESSAGE: &str = "Passwords don't match";
pub const REQUIRED_FIELD_MESSAGE: &str = "Please fill out this field.";
pub const INVALID_PRICE_MESSAGE: &str = "Please enter a valid, non-negative price.";

/// Base por defecto de la API de productos
pub const DEFAULT_PRODUCTS_API_URL: &str = "https://fakestoreapi.com";
