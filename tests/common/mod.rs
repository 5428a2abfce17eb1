pub mod app;
pub mod factory;

#[allow(unused_imports)]
pub use app::{TestApp, ADMIN_PASSWORD, ADMIN_USERNAME};
#[allow(unused_imports)]
pub use factory::Factory;
