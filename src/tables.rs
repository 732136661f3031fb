use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{core::Snapshot, fmt::LocalTimestamp};

pub fn build_snapshot_table(snapshot: &Snapshot) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        "Car", "State", "Since", "Battery", "Plugged", "Current", "Power", "Full in",
    ]);
    table.add_row(vec![
        Cell::new(format!("{} #{}", snapshot.car_name, snapshot.car_id)),
        Cell::new(&snapshot.state).fg(if snapshot.is_charging() {
            Color::Green
        } else {
            Color::Reset
        }),
        Cell::new(LocalTimestamp(&snapshot.state_since)).add_attribute(Attribute::Dim),
        Cell::new(format!("{}%", snapshot.battery_level)).set_alignment(CellAlignment::Right).fg(
            match snapshot.battery_level {
                0..=20 => Color::Red,
                21..=50 => Color::DarkYellow,
                _ => Color::Green,
            },
        ),
        Cell::new(if snapshot.plugged_in { "yes" } else { "no" }),
        Cell::new(format!("{} A", snapshot.charger_actual_current))
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("{} kW", snapshot.charger_power)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{} min", snapshot.minutes_to_full_charge()))
            .set_alignment(CellAlignment::Right),
    ]);
    table
}
