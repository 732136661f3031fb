use crate::core::{Event, EventKind, Snapshot};

/// Remaining time at which [`EventKind::ChargingAlmostComplete`] fires.
///
/// Matched exactly, so a poll has to land on this very second.
const ALMOST_COMPLETE_SECONDS: i64 = 300;

/// Compare the previous snapshot with the current one and list the events to notify about.
///
/// Events are ordered: plug connected, charging started, charging stopped, plug disconnected,
/// then the remaining-time checks which fire on every poll while the cable is plugged in.
/// The first observation only ever yields [`EventKind::StartedMonitoring`].
pub fn detect<'a>(previous: Option<&Snapshot>, current: &'a Snapshot) -> Vec<Event<'a>> {
    let Some(previous) = previous else {
        return vec![Event::new(EventKind::StartedMonitoring, current)];
    };

    let mut kinds = Vec::new();
    if !previous.plugged_in && current.plugged_in {
        kinds.push(EventKind::PlugConnected);
    }
    if !previous.is_charging() && current.is_charging() {
        kinds.push(EventKind::ChargingStarted);
    }
    if previous.is_charging() && !current.is_charging() {
        kinds.push(EventKind::ChargingStopped);
    }
    if previous.plugged_in && !current.plugged_in {
        kinds.push(EventKind::PlugDisconnected);
    }

    if current.plugged_in {
        let seconds_to_full_charge = current.seconds_to_full_charge();
        if seconds_to_full_charge <= 0 {
            kinds.push(EventKind::ChargingComplete);
        } else if seconds_to_full_charge == ALMOST_COMPLETE_SECONDS {
            kinds.push(EventKind::ChargingAlmostComplete);
        }
    }

    kinds.into_iter().map(|kind| Event::new(kind, current)).collect()
}
