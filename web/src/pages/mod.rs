mod about;
mod home;
mod login;
mod not_found;
mod picture;
mod picture_edit;
mod user_center;
mod user_edit;
mod user_manage;

pub use about::*;
pub use home::*;
pub use login::*;
pub use not_found::*;
pub use picture::*;
pub use picture_edit::*;
pub use user_center::*;
pub use user_edit::*;
pub use user_manage::*;
