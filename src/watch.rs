use std::time::Duration;

use bon::Builder;
use chrono::Local;
use tokio::time::{MissedTickBehavior, interval};

use crate::{
    api::{Fetcher, Notifier},
    core::{Snapshot, detect},
    prelude::*,
};

/// Polls the car and notifies about what changed since the previous poll.
#[derive(Builder)]
pub struct Watcher<F, N> {
    fetcher: F,
    notifier: N,

    #[builder(into)]
    interval: Duration,

    /// Last successfully fetched snapshot, [`None`] until the first one.
    #[builder(skip)]
    previous: Option<Snapshot>,
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PollOutcome {
    /// No snapshot this time, nothing has been compared.
    Skipped,

    Polled { n_events: usize, n_delivered: usize },
}

impl<F: Fetcher, N: Notifier> Watcher<F, N> {
    /// Poll right away and then on every interval, forever.
    ///
    /// A slow poll delays the following one.
    pub async fn run(mut self) {
        let mut interval = interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if let PollOutcome::Polled { n_events, n_delivered } = self.poll_once().await {
                debug!(n_events, n_delivered, "polled");
            }
        }
    }

    /// Fetch, detect, notify, and remember the snapshot.
    #[instrument(skip_all)]
    pub async fn poll_once(&mut self) -> PollOutcome {
        let current = match self.fetcher.fetch().await {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!("failed to fetch the snapshot: {:#}", Error::from(error));
                return PollOutcome::Skipped;
            }
        };

        let events = detect(self.previous.as_ref(), &current);
        let n_events = events.len();
        let mut n_delivered = 0;
        for event in events {
            info!(kind = ?event.kind, "detected");
            let message = event.render(Local::now());
            match self.notifier.send(&message).await {
                Ok(()) => n_delivered += 1,
                Err(error) => warn!("failed to notify: {:#}", Error::from(error)),
            }
        }

        self.previous = Some(current);
        PollOutcome::Polled { n_events, n_delivered }
    }
}
