use serde::Serialize;
use crate::constants::HOUR_TICK_COUNT;
use crate::geometry::StationTable;
use crate::time::format_hour_label;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// Vertical axis: one tick per station, labelled `"{km} km - {name}"`
#[must_use]
pub fn distance_ticks(stations: &StationTable) -> Vec<AxisTick> {
    stations
        .stations()
        .iter()
        .map(|s| AxisTick {
            value: s.km_from_start,
            label: format_distance_label(stations, s.km_from_start),
        })
        .collect()
}

/// Label for an arbitrary distance, naming the station only on an exact match
#[must_use]
pub fn format_distance_label(stations: &StationTable, km: f64) -> String {
    match stations.name_at(km) {
        Some(name) => format!("{km} km - {name}"),
        None => format!("{km} km"),
    }
}

/// Horizontal axis: every hour boundary from `00:00` to `24:00`
#[must_use]
pub fn time_ticks() -> Vec<AxisTick> {
    (0..HOUR_TICK_COUNT)
        .map(|hour| {
            let value = f64::from(hour * 60);
            AxisTick {
                value,
                label: format_hour_label(value),
            }
        })
        .collect()
}
