use crate::core::Snapshot;

/// What happened between two consecutive snapshots.
///
/// The [`Display`](std::fmt::Display) implementation is the human-readable notification title.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum EventKind {
    /// The very first snapshot since the process started.
    #[display("monitoring started")]
    StartedMonitoring,

    #[display("charge cable connected")]
    PlugConnected,

    #[display("charging started")]
    ChargingStarted,

    #[display("charging stopped")]
    ChargingStopped,

    #[display("charge cable disconnected")]
    PlugDisconnected,

    /// Plugged in and no time is left until the charge limit.
    #[display("charging complete")]
    ChargingComplete,

    /// Plugged in and exactly five minutes are left.
    #[display("charging almost complete")]
    ChargingAlmostComplete,
}

/// Detected event along with the snapshot it is about.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Event<'a> {
    pub kind: EventKind,
    pub snapshot: &'a Snapshot,
}

impl<'a> Event<'a> {
    pub const fn new(kind: EventKind, snapshot: &'a Snapshot) -> Self {
        Self { kind, snapshot }
    }
}
