mod detector;
mod event;
pub mod snapshot;

pub use self::{
    detector::detect,
    event::{Event, EventKind},
    snapshot::Snapshot,
};
