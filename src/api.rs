mod client;
pub mod dingtalk;
mod error;
mod fetcher;
mod notifier;
pub mod teslamate;

pub use self::{
    error::Error,
    fetcher::Fetcher,
    notifier::{Notifier, Scout},
};
