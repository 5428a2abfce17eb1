pub mod admin;
pub mod rule;
pub mod statement;

pub use admin::*;
pub use rule::*;
pub use statement::*;
