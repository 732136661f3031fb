use async_trait::async_trait;

use crate::{api::Error, prelude::*, render::Message};

/// Channel where the notifications go.
#[async_trait]
pub trait Notifier: Sync {
    async fn send(&self, message: &Message) -> Result<(), Error>;
}

/// Only logs the messages, for dry runs.
pub struct Scout;

#[async_trait]
impl Notifier for Scout {
    async fn send(&self, message: &Message) -> Result<(), Error> {
        info!(title = %message.title, text = %message.text, "would send");
        Ok(())
    }
}
