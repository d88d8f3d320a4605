use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod connect;
pub mod permissions;
pub mod usernames;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Checks whether the session user may modify each picture.
    CanEdit(permissions::Command),
    /// Resolves user ids to display names.
    Whois(usernames::Command),
    /// Formats a byte count the way picture sizes are shown.
    Size { bytes: u64 },
}

fn default_filter(verbose: u8) -> String {
    match verbose {
        0 => "gallery=info,access=info,client=info".into(),
        1 => "gallery=debug,access=debug,client=debug".into(),
        _ => "trace".into(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(cli.verbose)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("debug enabled");

    match &cli.command {
        Some(Commands::CanEdit(cmd)) => permissions::execute_command(cmd),
        Some(Commands::Whois(cmd)) => usernames::execute_command(cmd),
        Some(Commands::Size { bytes }) => {
            println!("{}", replies::format_size(Some(*bytes)));

            Ok(())
        }
        None => Ok(()),
    }
}
