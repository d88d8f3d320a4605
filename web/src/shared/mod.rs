mod list_errors;
mod logout_button;
mod navigation;
mod require_user;
mod user_context_provider;
mod username;

pub use list_errors::*;
pub use logout_button::*;
pub use navigation::*;
pub use require_user::*;
pub use user_context_provider::*;
pub use username::*;
