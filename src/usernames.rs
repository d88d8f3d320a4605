use anyhow::Result;
use clap::Args;
use tracing::debug;

use access::UsernameCache;
use replies::UserId;

use crate::connect::Connection;

#[derive(Debug, Args)]
pub struct Command {
    #[command(flatten)]
    connection: Connection,

    #[arg(required = true)]
    users: Vec<UserId>,
}

#[tokio::main(flavor = "current_thread")]
pub async fn execute_command(cmd: &Command) -> Result<()> {
    let client = cmd.connection.open().await?;
    let usernames = UsernameCache::new(client);

    for id in &cmd.users {
        let name = usernames.resolve(Some(*id)).await;

        println!("{}: {}", id, name);
    }

    debug!(cached = usernames.len(), "done");

    Ok(())
}
