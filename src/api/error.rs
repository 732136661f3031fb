use reqwest::StatusCode;

/// Failures at the boundary with the telemetry source and the notification channel.
///
/// None of them is fatal: the poll loop logs and moves on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure or a non-success status from the telemetry source.
    #[error("failed to fetch the vehicle status from `{url}`")]
    Fetch {
        url: String,

        #[source]
        source: reqwest::Error,
    },

    /// The telemetry source responded with something that is not a complete vehicle status.
    #[error("failed to decode the vehicle status")]
    Decode(#[source] serde_json::Error),

    /// Transport failure while sending a notification.
    #[error("failed to deliver `{title}`")]
    Delivery {
        title: String,

        #[source]
        source: reqwest::Error,
    },

    /// The webhook answered with anything but `200 OK`.
    #[error("webhook responded with `{status}` to `{title}`")]
    UnexpectedStatus { title: String, status: StatusCode },

    /// The robot accepted the request but refused the message.
    #[error("webhook rejected `{title}`: {message} (code {code})")]
    Rejected { title: String, code: i64, message: String },
}
