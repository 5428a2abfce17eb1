pub mod admin;
pub mod rule;
pub mod statement;

pub mod prelude;

pub use prelude::*;
