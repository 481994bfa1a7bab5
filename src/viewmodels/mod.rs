pub mod login_viewmodel;
pub mod register_viewmodel;
pub mod products_viewmodel;

pub use login_viewmodel::LoginViewModel;
pub use register_viewmodel::RegisterViewModel;
pub use products_viewmodel::ProductsViewModel;
