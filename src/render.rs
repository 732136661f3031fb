use chrono::{DateTime, Local};

use crate::{
    core::Event,
    fmt::{LocalTimestamp, TIMESTAMP_FORMAT},
};

/// DingTalk line break: markdown needs two trailing spaces.
const LINE_BREAK: &str = "  \n";

/// Rendered notification, ready for delivery.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    pub title: String,

    /// Markdown body.
    pub text: String,
}

impl Event<'_> {
    /// Render the notification; `now` ends up in the footer.
    pub fn render(&self, now: DateTime<Local>) -> Message {
        let title = self.kind.to_string();
        let snapshot = self.snapshot;

        let mut lines = vec![
            format!("## Tesla: {title}"),
            format!("#### - Car\t{}", snapshot.car_name),
            format!("#### - State\t{}", snapshot.state),
            format!("#### - Battery\t{}%", snapshot.battery_level),
        ];
        if snapshot.plugged_in {
            lines.push("#### - Plugged in\tyes".to_string());
        }
        if snapshot.charger_actual_current != 0 {
            lines.push(format!("#### - Charger current\t{} A", snapshot.charger_actual_current));
        }
        if snapshot.charger_power != 0 {
            lines.push(format!("#### - Charger power\t{} kW", snapshot.charger_power));
        }
        if snapshot.time_to_full_charge != 0.0 {
            lines.push(format!("#### - Remaining\t{} min", snapshot.minutes_to_full_charge()));
        }
        lines.push(format!("#### - State since\t{}", LocalTimestamp(&snapshot.state_since)));
        lines.push(format!("###### {}", now.format(TIMESTAMP_FORMAT)));

        Message { title, text: lines.join(LINE_BREAK) }
    }
}
