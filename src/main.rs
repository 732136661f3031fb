mod api;
mod cli;
mod core;
mod fmt;
mod prelude;
mod render;
mod tables;
mod watch;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, WatchArgs},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let timeout = args.http_timeout.into();

    let command = match args.command {
        Some(command) => command,
        None => Command::Watch(WatchArgs::try_from_env()?),
    };
    match command {
        Command::Watch(watch) => {
            let fetcher = args.teslamate.try_new_client(timeout)?;
            watch.run(fetcher, &args.dingtalk, timeout).await?;
        }
        Command::Burrow(burrow) => {
            burrow.run(&args.teslamate, &args.dingtalk, timeout).await?;
        }
    }

    info!("done!");
    Ok(())
}
