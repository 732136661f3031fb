use serde::{Deserialize, Deserializer, de};

use crate::core::Snapshot;

/// `GET /v1/cars/{id}/status` response body.
#[derive(Deserialize)]
pub struct StatusResponse {
    data: Data,
}

#[derive(Deserialize)]
struct Data {
    car: Car,
    status: Status,
}

#[derive(Deserialize)]
struct Car {
    car_id: i64,
    car_name: String,
}

#[derive(Deserialize)]
struct Status {
    state: String,
    state_since: String,
    battery_details: BatteryDetails,
    charging_details: ChargingDetails,
}

#[derive(Deserialize)]
struct BatteryDetails {
    #[serde(deserialize_with = "deserialize_percent")]
    battery_level: u8,
}

fn deserialize_percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = u8::deserialize(deserializer)?;
    if value > 100 {
        return Err(de::Error::invalid_value(
            de::Unexpected::Unsigned(value.into()),
            &"a percentage from 0 to 100",
        ));
    }
    Ok(value)
}

#[derive(Deserialize)]
struct ChargingDetails {
    plugged_in: bool,
    charger_actual_current: i32,
    charger_power: i32,

    /// Hours.
    time_to_full_charge: f64,
}

impl From<StatusResponse> for Snapshot {
    fn from(response: StatusResponse) -> Self {
        let Data { car, status } = response.data;
        Self {
            car_id: car.car_id,
            car_name: car.car_name,
            state: status.state,
            state_since: status.state_since,
            battery_level: status.battery_details.battery_level,
            plugged_in: status.charging_details.plugged_in,
            charger_actual_current: status.charging_details.charger_actual_current,
            charger_power: status.charging_details.charger_power,
            time_to_full_charge: status.charging_details.time_to_full_charge,
        }
    }
}
