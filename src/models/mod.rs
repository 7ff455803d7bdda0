mod snapshot;
mod station;
mod train;

pub use snapshot::{FreightStats, Infrastructure, SimulationSnapshot};
pub use station::{Block, Station};
pub use train::{Direction, Segment, TrainRun, TrainType};

use serde::{Deserialize, Deserializer};

/// Read an explicit JSON `null` as the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
