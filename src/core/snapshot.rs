use bon::Builder;

/// Vehicle state in which charging-related transitions are reported.
pub const CHARGING: &str = "charging";

/// One complete telemetry reading of a car.
#[must_use]
#[derive(Clone, Debug, PartialEq, Builder)]
pub struct Snapshot {
    pub car_id: i64,

    #[builder(into)]
    pub car_name: String,

    /// Reported operating mode, for example `online`, `asleep` or `charging`.
    #[builder(into)]
    pub state: String,

    /// When the car entered [`Snapshot::state`], as reported (normally RFC 3339).
    #[builder(into)]
    pub state_since: String,

    /// State of charge, percent.
    pub battery_level: u8,

    /// Whether the charge cable is inserted, regardless of active charging.
    pub plugged_in: bool,

    /// Amperes.
    pub charger_actual_current: i32,

    /// Kilowatts.
    pub charger_power: i32,

    /// Hours until the charge limit is reached, `0` when not charging or done.
    pub time_to_full_charge: f64,
}

impl Snapshot {
    pub fn is_charging(&self) -> bool {
        self.state == CHARGING
    }

    /// Whole seconds until the charge is complete, truncated toward zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn seconds_to_full_charge(&self) -> i64 {
        (3600.0 * self.time_to_full_charge) as i64
    }

    /// Whole minutes until the charge is complete, truncated toward zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn minutes_to_full_charge(&self) -> i64 {
        (60.0 * self.time_to_full_charge) as i64
    }
}
