use serde::{Deserialize, Serialize};

/// A named stop on the section, positioned by distance from the section start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub km_from_start: f64,
}

impl Station {
    #[must_use]
    pub fn new(name: impl Into<String>, km_from_start: f64) -> Self {
        Self {
            name: name.into(),
            km_from_start,
        }
    }
}

/// Adjacent station pair, one edge of the section line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'a> {
    pub index: usize,
    pub from_station: &'a Station,
    pub to_station: &'a Station,
}

impl Block<'_> {
    #[must_use]
    pub fn length_km(&self) -> f64 {
        self.to_station.km_from_start - self.from_station.km_from_start
    }
}
