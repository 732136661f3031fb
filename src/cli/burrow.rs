use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::{
    api::{Fetcher, Notifier},
    cli::{DingTalkArgs, TeslaMateArgs},
    prelude::*,
    render::Message,
    tables::build_snapshot_table,
};

#[derive(Parser)]
pub struct BurrowArgs {
    #[command(subcommand)]
    command: BurrowCommand,
}

impl BurrowArgs {
    pub async fn run(
        self,
        teslamate: &TeslaMateArgs,
        dingtalk: &DingTalkArgs,
        timeout: Duration,
    ) -> Result {
        match self.command {
            BurrowCommand::Status => {
                let snapshot = teslamate
                    .try_new_client(timeout)?
                    .fetch()
                    .await
                    .context("failed to fetch the vehicle status")?;
                println!("{}", build_snapshot_table(&snapshot));
            }
            BurrowCommand::Notify(args) => {
                dingtalk
                    .try_new_client(timeout)?
                    .send(&Message { title: args.title, text: args.text })
                    .await
                    .context("failed to send the test notification")?;
                info!("sent");
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum BurrowCommand {
    /// Fetch the current vehicle status and print it.
    Status,

    /// Send a test notification to the webhook.
    Notify(BurrowNotifyArgs),
}

#[derive(Parser)]
pub struct BurrowNotifyArgs {
    #[clap(long, default_value = "test")]
    title: String,

    /// Markdown body.
    #[clap(long, default_value = "## Tesla: test")]
    text: String,
}
