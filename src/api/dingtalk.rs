//! [DingTalk custom robot](https://open.dingtalk.com/document/robots/custom-robot-access) webhook.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    api::{Error, Notifier, client},
    prelude::*,
    render::Message,
};

pub struct Api {
    client: Client,
    webhook_url: String,
}

impl Api {
    /// The webhook URL is taken as is: a missing one fails on every delivery, not here.
    pub fn try_new(webhook_url: String, timeout: Duration) -> Result<Self> {
        Ok(Self { client: client::try_new(timeout)?, webhook_url })
    }
}

#[async_trait]
impl Notifier for Api {
    #[instrument(skip_all, fields(title = %message.title))]
    async fn send(&self, message: &Message) -> Result<(), Error> {
        info!("sending…");
        let delivery_error = |source| Error::Delivery { title: message.title.clone(), source };
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&SendRequest::markdown(message))
            .send()
            .await
            .map_err(delivery_error)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus { title: message.title.clone(), status });
        }
        let body = response.text().await.map_err(delivery_error)?;
        debug!(%body, "delivered");
        if let Ok(SendResponse { code, message: error_message }) = serde_json::from_str(&body)
            && code != 0
        {
            return Err(Error::Rejected {
                title: message.title.clone(),
                code,
                message: error_message,
            });
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(tag = "msgtype", rename_all = "lowercase")]
enum SendRequest<'a> {
    Markdown { markdown: Markdown<'a> },
}

impl<'a> SendRequest<'a> {
    fn markdown(message: &'a Message) -> Self {
        Self::Markdown { markdown: Markdown { title: &message.title, text: &message.text } }
    }
}

#[derive(Serialize)]
struct Markdown<'a> {
    title: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    #[serde(rename = "errcode")]
    code: i64,

    #[serde(rename = "errmsg", default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn send_request_ok() -> Result {
        let message = Message { title: "charging started".into(), text: "## Tesla".into() };
        assert_eq!(
            serde_json::to_value(SendRequest::markdown(&message))?,
            json!({
                "msgtype": "markdown",
                "markdown": {
                    "title": "charging started",
                    "text": "## Tesla",
                },
            }),
        );
        Ok(())
    }

    #[test]
    fn send_response_ok() -> Result {
        // language=json
        let body = r#"{"errcode": 0, "errmsg": "ok"}"#;
        assert_eq!(serde_json::from_str::<SendResponse>(body)?.code, 0);
        Ok(())
    }

    #[test]
    fn send_response_rejected() -> Result {
        // language=json
        let body = r#"{"errcode": 310000, "errmsg": "keywords not in content"}"#;
        let response = serde_json::from_str::<SendResponse>(body)?;
        assert_eq!(response.code, 310_000);
        assert_eq!(response.message, "keywords not in content");
        Ok(())
    }

    #[tokio::test]
    async fn empty_webhook_url_fails_to_deliver() -> Result {
        let message = Message { title: "test".into(), text: "test".into() };
        let error = Api::try_new(String::new(), Duration::from_secs(1))?
            .send(&message)
            .await
            .unwrap_err();
        assert!(matches!(error, Error::Delivery { .. }), "{error:?}");
        Ok(())
    }

    #[tokio::test]
    #[ignore = "online test"]
    async fn send_ok() -> Result {
        let message = Message { title: "test".into(), text: "## Tesla: test".into() };
        Api::try_new(std::env::var("NOTIFY_DINGROBOT_WEBHOOK")?, Duration::from_secs(10))?
            .send(&message)
            .await?;
        Ok(())
    }
}
