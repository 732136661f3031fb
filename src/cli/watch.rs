use std::time::Duration;

use clap::Parser;

use crate::{
    api::{Fetcher, Notifier, Scout},
    cli::DingTalkArgs,
    prelude::*,
    watch::Watcher,
};

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(long, env = "POLLING_INTERVAL", default_value = "60s")]
    pub polling_interval: humantime::Duration,

    /// Do not send the notifications, only log them (dry run).
    #[clap(long)]
    pub scout: bool,
}

impl WatchArgs {
    /// Arguments of a bare invocation: defaults, overridden by the environment.
    pub fn try_from_env() -> Result<Self> {
        Ok(Self::try_parse_from(["watch"])?)
    }

    pub async fn run(
        &self,
        fetcher: impl Fetcher,
        dingtalk: &DingTalkArgs,
        timeout: Duration,
    ) -> Result {
        info!(polling_interval = %self.polling_interval, scout = self.scout, "watching…");
        if self.scout {
            self.watch(fetcher, Scout).await;
        } else {
            self.watch(fetcher, dingtalk.try_new_client(timeout)?).await;
        }
        Ok(())
    }

    async fn watch(&self, fetcher: impl Fetcher, notifier: impl Notifier) {
        Watcher::builder()
            .fetcher(fetcher)
            .notifier(notifier)
            .interval(self.polling_interval)
            .build()
            .run()
            .await;
    }
}
