#![allow(unused_imports)]

pub use anyhow::{Context, Error, bail};
pub use tracing::{Level, debug, info, instrument, warn};

pub type Result<T = (), E = Error> = anyhow::Result<T, E>;
