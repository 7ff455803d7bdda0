use serde::{Deserialize, Deserializer, Serialize, Serializer};
use super::null_as_default;

/// Travel orientation of a train along the section
///
/// Anything other than a case-insensitive `DOWN` is treated as `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("DOWN") {
            Self::Down
        } else {
            Self::Up
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }

    /// Order a pair of distances so that plotted distance grows along `Up`
    /// travel and shrinks along `Down` travel
    #[must_use]
    pub fn orient(self, from_km: f64, to_km: f64) -> (f64, f64) {
        match self {
            Self::Down if from_km < to_km => (to_km, from_km),
            Self::Up if from_km > to_km => (to_km, from_km),
            _ => (from_km, to_km),
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map_or(Self::Up, Self::from_label))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainType {
    Passenger,
    Freight,
}

/// One leg of a train's run between two named stations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Empty when the backend sent no station; such a segment never resolves
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_station: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to_station: String,
    #[serde(default)]
    pub scheduled_dep: Option<String>,
    #[serde(default)]
    pub scheduled_arr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dwell_time_sec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainRun {
    #[serde(default)]
    pub train_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_name: Option<String>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_type: Option<TrainType>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub segments: Vec<Segment>,
}
