pub mod auth;
pub mod chat;

pub use auth::{AuthService, Claims};
pub use chat::{ChatReply, ChatService, ReplySource};
