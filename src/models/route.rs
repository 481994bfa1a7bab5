/// Rutas de la aplicación
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    Dashboard,
    Login,
    Register,
    NotFound(String),
}

impl Route {
    /// Parsear `location.pathname`. Ignora query, fragmento y "/" final.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/dashboard" => Route::Dashboard,
            "/login" => Route::Login,
            "/register" => Route::Register,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::NotFound(path) => path,
        }
    }

    /// Rutas que requieren sesión (muestran la gestión de productos)
    pub fn is_guarded(&self) -> bool {
        matches!(self, Route::Home | Route::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/login?next=/"), Route::Login);
        assert_eq!(Route::from_path("/register#top"), Route::Register);
    }

    #[test]
    fn unknown_paths_keep_their_path() {
        let route = Route::from_path("/products/7");
        assert_eq!(route, Route::NotFound("/products/7".to_string()));
        assert_eq!(route.path(), "/products/7");
        assert!(!route.is_guarded());
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::Home, Route::Dashboard, Route::Login, Route::Register] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
