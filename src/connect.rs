use anyhow::{anyhow, Result};
use clap::Args;
use tracing::info;

use client::{ApiClient, DEFAULT_API_ROOT};
use replies::Payload;

#[derive(Debug, Args)]
pub struct Connection {
    /// Root of the picture backend's REST API.
    #[arg(long, env = "GALLERY_API_ROOT", default_value = DEFAULT_API_ROOT)]
    pub api_root: String,

    #[arg(long, env = "GALLERY_ACCOUNT")]
    pub account: Option<String>,

    #[arg(long, env = "GALLERY_PASSWORD", requires = "account")]
    pub password: Option<String>,
}

impl Connection {
    /// Opens a client, logging in first when an account was given.
    pub async fn open(&self) -> Result<ApiClient> {
        let client = ApiClient::new(&self.api_root)?;

        if let Some(account) = &self.account {
            let password = self.password.as_deref().unwrap_or_default();
            match client.login(account, password).await?.into_payload() {
                Payload::Data(user) => {
                    info!(id = user.id, role = ?user.user_role, "logged in as {}", user.display_name())
                }
                Payload::Empty => return Err(anyhow!("login returned no user")),
                Payload::Failed { code, message } => {
                    return Err(anyhow!(
                        "login rejected ({}): {}",
                        code,
                        message.unwrap_or_default()
                    ))
                }
            }
        }

        Ok(client)
    }
}
