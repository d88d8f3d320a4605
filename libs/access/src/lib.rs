//! Session aware helpers shared by the web front end and the CLI.
//!
//! [`Permissions`] answers whether the session user may modify a picture and
//! [`UsernameCache`] turns user ids into display names, remembering every
//! answer for as long as the cache lives. Both sit on top of the
//! [`SessionProvider`], [`PictureService`] and [`UserService`] seams and
//! never fail, every error degrades to a safe default.

mod error;
mod permissions;
mod services;
mod session;
mod usernames;

#[cfg(test)]
mod fakes;

pub use error::*;
pub use permissions::*;
pub use services::*;
pub use session::*;
pub use usernames::*;

#[cfg(test)]
#[ctor::ctor]
fn initialize_tests() {
    log_test();
}

#[cfg(test)]
fn log_test() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "access=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
