pub mod app;
pub mod dashboard;
pub mod delete_dialog;
pub mod dialog;
pub mod login;
pub mod not_found;
pub mod product_form;
pub mod register;
pub mod shared;

pub use app::render_app;
pub use dashboard::render_dashboard;
pub use login::render_login;
pub use not_found::render_not_found;
pub use register::render_register;
