mod app;
mod errors;
mod hooks;
mod pages;
mod routes;
mod services;
mod shared;
mod utils;

pub use app::App;
pub use routes::Route;
pub use services::{api_root, Services};
pub use utils::download_image;
