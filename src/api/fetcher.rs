use async_trait::async_trait;

use crate::{api::Error, core::Snapshot};

/// Source of vehicle snapshots.
#[async_trait]
pub trait Fetcher: Sync {
    /// Fetch and decode the current snapshot, all or nothing.
    async fn fetch(&self) -> Result<Snapshot, Error>;
}
