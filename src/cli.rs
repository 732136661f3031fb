mod burrow;
mod watch;

use std::time::Duration;

use clap::{Parser, Subcommand};

pub use self::{burrow::BurrowArgs, watch::WatchArgs};
use crate::{
    api::{dingtalk, teslamate},
    prelude::*,
};

/// Without a command, watch the car and notify about charging.
#[derive(Parser)]
#[command(version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub teslamate: TeslaMateArgs,

    #[clap(flatten)]
    pub dingtalk: DingTalkArgs,

    /// Timeout for every HTTP request.
    #[clap(long, env = "HTTP_TIMEOUT", default_value = "10s")]
    pub http_timeout: humantime::Duration,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Watch the car and notify about charging, the default.
    #[clap(name = "watch")]
    Watch(WatchArgs),

    /// Development tools.
    #[clap(name = "burrow")]
    Burrow(Box<BurrowArgs>),
}

#[derive(Parser)]
pub struct TeslaMateArgs {
    /// TeslaMate API base URL. For example: `https://teslamate.example.com/api`.
    #[clap(long = "tesla-api-url", env = "TESLA_API_URL", default_value = "")]
    pub base_url: String,

    #[clap(long, env = "TESLA_CAR_ID", default_value = "1")]
    pub car_id: u32,
}

impl TeslaMateArgs {
    pub fn try_new_client(&self, timeout: Duration) -> Result<teslamate::Api> {
        teslamate::Api::try_new(&self.base_url, self.car_id, timeout)
    }
}

#[derive(Parser)]
pub struct DingTalkArgs {
    /// DingTalk robot webhook, including the access token.
    #[clap(long = "dingtalk-webhook", env = "NOTIFY_DINGROBOT_WEBHOOK", default_value = "")]
    pub webhook_url: String,
}

impl DingTalkArgs {
    pub fn try_new_client(&self, timeout: Duration) -> Result<dingtalk::Api> {
        dingtalk::Api::try_new(self.webhook_url.clone(), timeout)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_ok() -> Result {
        let args = Args::try_parse_from(["tesla-notify"])?;
        assert_eq!(args.teslamate.car_id, 1);
        assert_eq!(Duration::from(args.http_timeout), Duration::from_secs(10));
        assert!(args.command.is_none());
        Ok(())
    }

    #[test]
    fn default_watch_args_ok() -> Result {
        let args = WatchArgs::try_from_env()?;
        assert_eq!(Duration::from(args.polling_interval), Duration::from_secs(60));
        assert!(!args.scout);
        Ok(())
    }

    #[test]
    fn watch_command_ok() -> Result {
        let args = Args::try_parse_from([
            "tesla-notify",
            "watch",
            "--scout",
            "--polling-interval",
            "5min",
        ])?;
        let Some(Command::Watch(watch)) = args.command else {
            bail!("expected the watch command");
        };
        assert!(watch.scout);
        assert_eq!(Duration::from(watch.polling_interval), Duration::from_secs(300));
        Ok(())
    }

    #[test]
    fn burrow_status_ok() -> Result {
        let args = Args::try_parse_from([
            "tesla-notify",
            "--tesla-api-url",
            "http://localhost:8080/api",
            "burrow",
            "status",
        ])?;
        assert_eq!(args.teslamate.base_url, "http://localhost:8080/api");
        assert!(matches!(args.command, Some(Command::Burrow(_))));
        Ok(())
    }
}
