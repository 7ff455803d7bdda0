//! Space-time diagram assembly
//!
//! Turns a [`SimulationSnapshot`] into the structure the charting layer draws:
//! one polyline per train, axis ticks and the canvas sizing.

mod axes;
mod legend;
mod series;
mod viewport;

pub use axes::{distance_ticks, format_distance_label, time_ticks, AxisTick};
pub use legend::{class_color, legend_entries, LegendEntry, LegendMarker};
pub use series::{assemble_series, GraphPoint, TrainSeries};
pub use viewport::{total_width, Viewport};

use serde::Serialize;
use crate::constants::NO_DATA_MESSAGE;
use crate::geometry::StationTable;
use crate::models::SimulationSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceTimeGraph {
    pub series: Vec<TrainSeries>,
    pub distance_axis: Vec<AxisTick>,
    pub time_axis: Vec<AxisTick>,
    pub viewport: Viewport,
}

impl SpaceTimeGraph {
    #[must_use]
    pub fn build(snapshot: &SimulationSnapshot, stations: &StationTable, base_width: f64) -> Self {
        let series = snapshot
            .trains
            .iter()
            .enumerate()
            .map(|(idx, train)| assemble_series(train, idx, stations))
            .collect();

        Self {
            series,
            distance_axis: distance_ticks(stations),
            time_axis: time_ticks(),
            viewport: Viewport::new(base_width, stations.max_km()),
        }
    }
}

/// What the graph area shows
///
/// Before any snapshot has arrived the area shows an explicit message instead
/// of empty axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum GraphView {
    NoData { message: &'static str },
    Ready(SpaceTimeGraph),
}

impl GraphView {
    #[must_use]
    pub fn from_snapshot(
        snapshot: Option<&SimulationSnapshot>,
        stations: &StationTable,
        base_width: f64,
    ) -> Self {
        match snapshot {
            Some(snapshot) => Self::Ready(SpaceTimeGraph::build(snapshot, stations, base_width)),
            None => Self::NoData { message: NO_DATA_MESSAGE },
        }
    }

    #[must_use]
    pub fn graph(&self) -> Option<&SpaceTimeGraph> {
        match self {
            Self::Ready(graph) => Some(graph),
            Self::NoData { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> SimulationSnapshot {
        serde_json::from_str(include_str!("../../fixtures/snapshot.json")).expect("fixture is valid")
    }

    #[test]
    fn test_no_snapshot_shows_no_data() {
        let view = GraphView::from_snapshot(None, &StationTable::corridor(), 1000.0);
        assert_eq!(view, GraphView::NoData { message: NO_DATA_MESSAGE });
        assert!(view.graph().is_none());
    }

    #[test]
    fn test_build_from_fixture() {
        let snapshot = fixture();
        let view = GraphView::from_snapshot(Some(&snapshot), &StationTable::corridor(), 1000.0);
        let graph = view.graph().expect("graph is ready");

        assert_eq!(graph.series.len(), 4);
        assert_eq!(graph.distance_axis.len(), 22);
        assert_eq!(graph.time_axis.len(), 25);
        assert_eq!(graph.viewport.total_width, 1200.0);
        assert_eq!(graph.viewport.max_km, 176.83);

        // T0: three legs, two with dwell
        assert_eq!(graph.series[0].data.len(), 8);
        // Truncated backend time "8:04:59." reads as 8:04, then 3 min dwell
        assert_eq!(graph.series[0].data[1], GraphPoint::new(484.0, 7.74));
        assert_eq!(graph.series[0].data[2], GraphPoint::new(487.0, 7.74));
        // T1 runs DOWN from PSA
        assert_eq!(graph.series[1].label_point, GraphPoint::new(360.0, 176.83));
        // T2: the leg to an unknown station is dropped
        assert_eq!(graph.series[2].data.len(), 2);
        assert_eq!(graph.series[2].label_point, GraphPoint::new(610.0, 24.08));
        // T3 wraps past midnight and is compressed
        assert_eq!(graph.series[3].data[1].x, 1430.01);
    }

    #[test]
    fn test_null_stations_drop_only_their_segment() {
        let json = r#"{"trains": [
            {"train_id": "A", "segments": [
                {"from_station": null, "to_station": "KPL", "scheduled_dep": "7:00:00", "scheduled_arr": "7:05:00"},
                {"from_station": "KTV", "to_station": "KPL", "scheduled_dep": "8:00:00", "scheduled_arr": "8:05:00"}
            ]},
            {"train_id": "B", "segments": null}
        ]}"#;
        let snapshot: SimulationSnapshot = serde_json::from_str(json).expect("valid snapshot");
        let view = GraphView::from_snapshot(Some(&snapshot), &StationTable::corridor(), 1000.0);
        let graph = view.graph().expect("graph is ready");

        assert_eq!(graph.series.len(), 2);
        assert_eq!(
            graph.series[0].data,
            vec![GraphPoint::new(480.0, 0.0), GraphPoint::new(485.0, 7.74)]
        );
        assert!(graph.series[1].data.is_empty());
        assert_eq!(graph.series[1].label_point, GraphPoint::ORIGIN);
    }

    #[test]
    fn test_serialized_view_is_tagged() {
        let view = GraphView::from_snapshot(None, &StationTable::corridor(), 1000.0);
        let json = serde_json::to_value(&view).expect("serializable");
        assert_eq!(json["state"], "noData");
    }
}
