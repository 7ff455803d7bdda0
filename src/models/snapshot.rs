use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use super::{null_as_default, TrainRun};

/// Infrastructure the backend simulated with, echoed back in every snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Infrastructure {
    #[serde(default, deserialize_with = "null_as_default")]
    pub auto_blocks: Vec<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub loop_stations: Vec<u32>,
    /// Block index to speed multiplier
    #[serde(default, deserialize_with = "null_as_default")]
    pub speed_up_blocks: IndexMap<u32, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreightStats {
    #[serde(default)]
    pub finished_trains: u32,
    #[serde(default)]
    pub average_travel_time_hours: f64,
    #[serde(default)]
    pub average_speed_kmph: f64,
}

/// One complete simulation result
///
/// Snapshots are never merged: each fetch replaces the previous one whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub trains: Vec<TrainRun>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub infrastructure: Infrastructure,
    #[serde(default)]
    pub simulation_time_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freight_stats: Option<FreightStats>,
}
