pub use super::admin::Entity as Admin;
pub use super::rule::Entity as Rule;
pub use super::statement::Entity as Statement;
