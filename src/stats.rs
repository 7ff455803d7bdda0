use serde::Serialize;
use crate::constants::ESTIMATED_BLOCK_LENGTH_KM;
use crate::models::SimulationSnapshot;

/// Section throughput derived from a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Throughput {
    pub trains: usize,
    /// Simulated span; a missing or non-positive value counts as one hour
    pub hours: f64,
    pub per_hour: f64,
    pub per_day: f64,
    pub auto_blocks: usize,
    pub loop_stations: usize,
    /// Estimated from the automatic block count
    pub section_length_km: f64,
    /// Blocks per km; a zero section length counts as 1 km
    pub block_density: f64,
    /// Km per loop station; no loops counts as one
    pub loop_spacing_km: f64,
}

impl Throughput {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_snapshot(snapshot: &SimulationSnapshot) -> Self {
        let trains = snapshot.trains.len();
        let hours = snapshot
            .simulation_time_hours
            .filter(|h| *h > 0.0)
            .unwrap_or(1.0);
        let per_hour = trains as f64 / hours;

        let auto_blocks = snapshot.infrastructure.auto_blocks.len();
        let loop_stations = snapshot.infrastructure.loop_stations.len();
        let section_length_km = auto_blocks as f64 * ESTIMATED_BLOCK_LENGTH_KM;
        let density_length = if section_length_km > 0.0 { section_length_km } else { 1.0 };

        Self {
            trains,
            hours,
            per_hour,
            per_day: per_hour * 24.0,
            auto_blocks,
            loop_stations,
            section_length_km,
            block_density: auto_blocks as f64 / density_length,
            loop_spacing_km: section_length_km / loop_stations.max(1) as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Infrastructure, TrainRun};

    #[test]
    fn test_throughput_per_hour_and_day() {
        let snapshot = SimulationSnapshot {
            trains: vec![TrainRun::default(); 12],
            simulation_time_hours: Some(4.0),
            ..SimulationSnapshot::default()
        };
        let stats = Throughput::from_snapshot(&snapshot);
        assert_eq!(stats.trains, 12);
        assert_eq!(stats.per_hour, 3.0);
        assert_eq!(stats.per_day, 72.0);
    }

    #[test]
    fn test_missing_duration_counts_as_one_hour() {
        let snapshot = SimulationSnapshot {
            trains: vec![TrainRun::default(); 3],
            simulation_time_hours: Some(0.0),
            ..SimulationSnapshot::default()
        };
        let stats = Throughput::from_snapshot(&snapshot);
        assert_eq!(stats.hours, 1.0);
        assert_eq!(stats.per_hour, 3.0);
    }

    #[test]
    fn test_infrastructure_summary() {
        let snapshot = SimulationSnapshot {
            infrastructure: Infrastructure {
                auto_blocks: vec![6, 7, 8, 9],
                loop_stations: vec![10, 13],
                ..Infrastructure::default()
            },
            ..SimulationSnapshot::default()
        };
        let stats = Throughput::from_snapshot(&snapshot);
        assert_eq!(stats.auto_blocks, 4);
        assert_eq!(stats.loop_stations, 2);
        assert_eq!(stats.section_length_km, 6.0);
        assert_eq!(stats.block_density, 4.0 / 6.0);
        assert_eq!(stats.loop_spacing_km, 3.0);
    }

    #[test]
    fn test_empty_infrastructure_avoids_division_by_zero() {
        let stats = Throughput::from_snapshot(&SimulationSnapshot::default());
        assert_eq!(stats.section_length_km, 0.0);
        assert_eq!(stats.block_density, 0.0);
        assert_eq!(stats.loop_spacing_km, 0.0);
        assert_eq!(stats.per_hour, 0.0);
    }

    #[test]
    fn test_fixture_summary() {
        let snapshot: SimulationSnapshot =
            serde_json::from_str(include_str!("../fixtures/snapshot.json")).expect("fixture is valid");
        let stats = Throughput::from_snapshot(&snapshot);
        assert_eq!(stats.section_length_km, 4.5);
        assert_eq!(stats.loop_spacing_km, 2.25);
        assert_eq!(stats.block_density, 3.0 / 4.5);
    }
}
