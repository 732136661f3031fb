//! [TeslaMate API](https://github.com/tobiasehlert/teslamateapi) client.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use self::models::StatusResponse;
use crate::{
    api::{Error, Fetcher, client},
    core::Snapshot,
    prelude::*,
};

pub struct Api {
    client: Client,
    status_url: String,
}

impl Api {
    /// The base URL is taken as is: a missing one fails on every request, not here.
    pub fn try_new(base_url: &str, car_id: u32, timeout: Duration) -> Result<Self> {
        Ok(Self { client: client::try_new(timeout)?, status_url: status_url(base_url, car_id) })
    }
}

#[async_trait]
impl Fetcher for Api {
    #[instrument(skip_all, fields(url = %self.status_url))]
    async fn fetch(&self) -> Result<Snapshot, Error> {
        debug!("fetching…");
        let fetch_error = |source| Error::Fetch { url: self.status_url.clone(), source };
        let body = self
            .client
            .get(&self.status_url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(fetch_error)?
            .bytes()
            .await
            .map_err(fetch_error)?;
        let snapshot = decode(&body)?;
        info!(
            car_name = %snapshot.car_name,
            state = %snapshot.state,
            battery_level = snapshot.battery_level,
            plugged_in = snapshot.plugged_in,
            time_to_full_charge = snapshot.time_to_full_charge,
            "fetched",
        );
        Ok(snapshot)
    }
}

fn status_url(base_url: &str, car_id: u32) -> String {
    format!("{}/v1/cars/{car_id}/status", base_url.trim_end_matches('/'))
}

fn decode(body: &[u8]) -> Result<Snapshot, Error> {
    Ok(serde_json::from_slice::<StatusResponse>(body).map_err(Error::Decode)?.into())
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    /// Answer a single request with the status line and body, and return the base URL.
    async fn serve_once(status: &'static str, body: &'static str) -> Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}/api", listener.local_addr()?);
        tokio::spawn(async move {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut request = Vec::new();
            let mut buffer = [0; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                match stream.read(&mut buffer).await {
                    Ok(0) | Err(_) => break,
                    Ok(n_read) => request.extend_from_slice(&buffer[..n_read]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        });
        Ok(base_url)
    }

    #[test]
    fn status_url_ok() {
        assert_eq!(
            status_url("https://teslamate.local/api", 1),
            "https://teslamate.local/api/v1/cars/1/status"
        );
        assert_eq!(
            status_url("https://teslamate.local/api/", 2),
            "https://teslamate.local/api/v1/cars/2/status"
        );
    }

    #[test]
    fn empty_base_url_is_kept() {
        assert_eq!(status_url("", 1), "/v1/cars/1/status");
    }

    #[tokio::test]
    async fn empty_base_url_fails_to_fetch() -> Result {
        let error = Api::try_new("", 1, Duration::from_secs(1))?.fetch().await.unwrap_err();
        assert!(matches!(error, Error::Fetch { .. }), "{error:?}");
        Ok(())
    }

    #[test]
    fn decode_error_ok() {
        let error = decode(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(error, Error::Decode(_)), "{error:?}");
    }

    #[tokio::test]
    async fn unsuccessful_status_fails_to_fetch() -> Result {
        let base_url = serve_once("503 Service Unavailable", "").await?;
        let error = Api::try_new(&base_url, 1, Duration::from_secs(5))?.fetch().await.unwrap_err();
        assert!(matches!(error, Error::Fetch { .. }), "{error:?}");
        Ok(())
    }

    #[tokio::test]
    async fn unexpected_body_fails_to_decode() -> Result {
        // language=json
        let base_url = serve_once("200 OK", r#"{"data": {"car": null}}"#).await?;
        let error = Api::try_new(&base_url, 1, Duration::from_secs(5))?.fetch().await.unwrap_err();
        assert!(matches!(error, Error::Decode(_)), "{error:?}");
        Ok(())
    }

    #[tokio::test]
    #[ignore = "online test"]
    async fn fetch_ok() -> Result {
        let base_url = std::env::var("TESLA_API_URL")?;
        let snapshot = Api::try_new(&base_url, 1, Duration::from_secs(10))?.fetch().await?;
        assert!(snapshot.battery_level <= 100);
        Ok(())
    }
}
