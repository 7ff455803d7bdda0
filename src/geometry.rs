use indexmap::IndexMap;
use thiserror::Error;
use crate::models::{Block, Direction, Station};

/// Station codes and distances of the default section, ascending by distance
const CORRIDOR_STATIONS: [(&str, f64); 22] = [
    ("KTV", 0.0),
    ("KPL", 7.74),
    ("ALM", 16.97),
    ("KUK", 24.08),
    ("VZM", 34.73),
    ("NML", 46.47),
    ("GVI", 58.8),
    ("CPP", 65.37),
    ("BTVA", 69.8),
    ("SGDM", 78.64),
    ("PDU", 88.71),
    ("DUSI", 97.53),
    ("CHE", 103.99),
    ("ULM", 114.03),
    ("TIU", 123.66),
    ("HCM", 129.09),
    ("KBM", 137.38),
    ("DGB", 145.36),
    ("NWP", 151.3),
    ("RMZ", 158.31),
    ("PUN", 164.54),
    ("PSA", 176.83),
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StationTableError {
    #[error("a section needs at least one station")]
    Empty,
    #[error("station {0} appears more than once")]
    DuplicateName(String),
    #[error("station {name} at {km} km does not lie beyond the previous station")]
    NotAscending { name: String, km: f64 },
}

/// The section's spatial axis: uniquely named stations, strictly ascending by distance
#[derive(Debug, Clone, PartialEq)]
pub struct StationTable {
    stations: Vec<Station>,
    index_by_name: IndexMap<String, usize>,
}

impl StationTable {
    /// Build a table from stations listed in section order
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, a name repeats, or the
    /// distances are not strictly ascending.
    pub fn new(stations: Vec<Station>) -> Result<Self, StationTableError> {
        if stations.is_empty() {
            return Err(StationTableError::Empty);
        }

        let mut index_by_name = IndexMap::with_capacity(stations.len());
        let mut previous_km: Option<f64> = None;

        for (idx, station) in stations.iter().enumerate() {
            if previous_km.is_some_and(|prev| station.km_from_start <= prev) {
                return Err(StationTableError::NotAscending {
                    name: station.name.clone(),
                    km: station.km_from_start,
                });
            }
            if index_by_name.insert(station.name.clone(), idx).is_some() {
                return Err(StationTableError::DuplicateName(station.name.clone()));
            }
            previous_km = Some(station.km_from_start);
        }

        Ok(Self { stations, index_by_name })
    }

    /// The 22-station KTV → PSA section the simulation backend models
    #[must_use]
    pub fn corridor() -> Self {
        let stations: Vec<Station> = CORRIDOR_STATIONS
            .iter()
            .map(|&(name, km)| Station::new(name, km))
            .collect();
        let index_by_name = stations
            .iter()
            .enumerate()
            .map(|(idx, station)| (station.name.clone(), idx))
            .collect();
        Self { stations, index_by_name }
    }

    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Station> {
        self.index_by_name.get(name).map(|&idx| &self.stations[idx])
    }

    /// Distance of a station from the section start, if the name is known
    #[must_use]
    pub fn km_of(&self, name: &str) -> Option<f64> {
        self.get(name).map(|s| s.km_from_start)
    }

    /// Name of the station sitting exactly at `km`
    #[must_use]
    pub fn name_at(&self, km: f64) -> Option<&str> {
        self.stations
            .iter()
            .find(|s| s.km_from_start == km)
            .map(|s| s.name.as_str())
    }

    /// Farthest station distance, the top of the distance axis
    #[must_use]
    pub fn max_km(&self) -> f64 {
        self.stations.last().map_or(0.0, |s| s.km_from_start)
    }

    #[must_use]
    pub fn length_km(&self) -> f64 {
        self.max_km() - self.stations.first().map_or(0.0, |s| s.km_from_start)
    }

    /// Adjacent station pairs in section order
    pub fn blocks(&self) -> impl Iterator<Item = Block<'_>> {
        self.stations
            .windows(2)
            .enumerate()
            .map(|(index, pair)| Block {
                index,
                from_station: &pair[0],
                to_station: &pair[1],
            })
    }

    /// Header text for the section, e.g. `KTV → PSA`
    #[must_use]
    pub fn section_label(&self) -> String {
        match (self.stations.first(), self.stations.last()) {
            (Some(first), Some(last)) if first != last => format!("{} → {}", first.name, last.name),
            (Some(only), _) => only.name.clone(),
            _ => String::new(),
        }
    }

    /// Resolve both ends of a leg and orient them for `direction`
    ///
    /// Returns `None` when either station is unknown; such legs are dropped
    /// from the diagram rather than reported.
    #[must_use]
    pub fn resolve_span(&self, direction: Direction, from: &str, to: &str) -> Option<(f64, f64)> {
        let from_km = self.km_of(from)?;
        let to_km = self.km_of(to)?;
        Some(direction.orient(from_km, to_km))
    }
}

impl Default for StationTable {
    fn default() -> Self {
        Self::corridor()
    }
}
