use serde::Serialize;
use crate::constants::DEFAULT_TRAIN_COLOR;
use crate::geometry::StationTable;
use crate::models::TrainRun;
use crate::time::{time_to_minutes, TimeCursor};

/// One plotted vertex: minutes since midnight against distance along the section
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
}

impl GraphPoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A train's polyline as handed to the charting layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainSeries {
    pub id: String,
    pub color: String,
    pub data: Vec<GraphPoint>,
    /// Where the floating train identifier is drawn
    pub label_point: GraphPoint,
}

/// Build the time/distance polyline for one train
///
/// Each resolvable segment contributes a departure and an arrival point, plus
/// a stationary point when it specifies a dwell. Segments naming an unknown
/// station contribute nothing and leave the time cursor where it was, so the
/// resulting `x` values never decrease.
#[must_use]
pub fn assemble_series(train: &TrainRun, index: usize, stations: &StationTable) -> TrainSeries {
    let mut cursor = TimeCursor::new();
    let mut data = Vec::with_capacity(train.segments.len() * 3);

    for segment in &train.segments {
        let Some((from_km, to_km)) =
            stations.resolve_span(train.direction, &segment.from_station, &segment.to_station)
        else {
            continue;
        };

        let (dep, arr) = cursor.advance(
            time_to_minutes(segment.scheduled_dep.as_deref()),
            time_to_minutes(segment.scheduled_arr.as_deref()),
        );
        data.push(GraphPoint::new(dep, from_km));
        data.push(GraphPoint::new(arr, to_km));

        if let Some(dwell_end) = cursor.dwell(segment.dwell_time_sec) {
            data.push(GraphPoint::new(dwell_end, to_km));
        }
    }

    let id = train
        .train_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("Train-{}", index + 1));
    let color = train
        .color
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_TRAIN_COLOR.to_string());
    let label_point = data.first().copied().unwrap_or(GraphPoint::ORIGIN);

    TrainSeries { id, color, data, label_point }
}
