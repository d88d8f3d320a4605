use anyhow::Result;
use clap::Args;
use std::rc::Rc;

use access::{LoginUserStore, Permissions};
use replies::PictureId;

use crate::connect::Connection;

#[derive(Debug, Args)]
pub struct Command {
    #[command(flatten)]
    connection: Connection,

    #[arg(required = true)]
    pictures: Vec<PictureId>,
}

#[tokio::main(flavor = "current_thread")]
pub async fn execute_command(cmd: &Command) -> Result<()> {
    let client = Rc::new(cmd.connection.open().await?);
    let store = LoginUserStore::new(client.clone());
    let permissions = Permissions::new(store, client);

    for id in &cmd.pictures {
        let decision = permissions.decide(*id).await;
        let verdict = if decision.allowed() {
            "allowed"
        } else {
            "denied"
        };

        println!("picture {}: {} ({})", id, verdict, decision);
    }

    Ok(())
}
