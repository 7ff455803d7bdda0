use serde::Serialize;
use crate::models::{Direction, TrainType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendMarker {
    Line,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub marker: LegendMarker,
    pub color: &'static str,
}

/// Color the simulation backend assigns to a train class
#[must_use]
pub fn class_color(train_type: TrainType, direction: Direction) -> &'static str {
    match (train_type, direction) {
        (TrainType::Passenger, Direction::Up) => "#005eff",
        (TrainType::Passenger, Direction::Down) => "#ff3300",
        (TrainType::Freight, Direction::Up) => "#00aa00",
        (TrainType::Freight, Direction::Down) => "#ff8800",
    }
}

#[must_use]
pub fn legend_entries() -> Vec<LegendEntry> {
    let line = |label, train_type, direction| LegendEntry {
        label,
        marker: LegendMarker::Line,
        color: class_color(train_type, direction),
    };

    vec![
        line("Pass. UP ↑", TrainType::Passenger, Direction::Up),
        line("Pass. DOWN ↓", TrainType::Passenger, Direction::Down),
        line("Freight UP ↑", TrainType::Freight, Direction::Up),
        line("Freight DOWN ↓", TrainType::Freight, Direction::Down),
        LegendEntry {
            label: "Loop / Siding",
            marker: LegendMarker::Dot,
            color: "#2ecc71",
        },
    ]
}
