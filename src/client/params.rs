use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;
use crate::config::ConfigError;
use crate::constants::SIMULATE_PATH;

/// Caller-supplied simulation inputs
///
/// The client forwards these strings untouched; the backend owns their grammar
/// (see [`parse_block_list`] and [`parse_speed_up`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub auto_blocks: String,
    pub loops: String,
    pub speed_up: String,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            auto_blocks: "6,7,8".to_string(),
            loops: "10,13".to_string(),
            speed_up: "17:1.5,18:1.2".to_string(),
        }
    }
}

impl SimulationParams {
    #[must_use]
    pub fn new(
        auto_blocks: impl Into<String>,
        loops: impl Into<String>,
        speed_up: impl Into<String>,
    ) -> Self {
        Self {
            auto_blocks: auto_blocks.into(),
            loops: loops.into(),
            speed_up: speed_up.into(),
        }
    }

    /// The `<base>/simulate?auto_blocks=…&loops=…&speed_up=…` request target
    ///
    /// # Errors
    ///
    /// Returns an error if `base` cannot carry a path
    pub fn target_url(&self, base: &Url) -> Result<Url, ConfigError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| ConfigError::CannotBeABase(base.to_string()))?
            .pop_if_empty()
            .push(SIMULATE_PATH);
        url.query_pairs_mut()
            .clear()
            .append_pair("auto_blocks", &self.auto_blocks)
            .append_pair("loops", &self.loops)
            .append_pair("speed_up", &self.speed_up);
        Ok(url)
    }
}

/// Parse a comma-separated list of block or station indices
///
/// Items that are not plain non-negative integers are skipped. An empty input
/// means "not specified" and yields `None`.
#[must_use]
pub fn parse_block_list(raw: &str) -> Option<Vec<u32>> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty() && item.bytes().all(|b| b.is_ascii_digit()))
            .filter_map(|item| item.parse().ok())
            .collect(),
    )
}

/// Parse `block:multiplier` pairs, e.g. `17:1.5,18:1.2`
///
/// Malformed pairs are skipped. An empty input yields `None`.
#[must_use]
pub fn parse_speed_up(raw: &str) -> Option<IndexMap<u32, f64>> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(
        raw.split(',')
            .filter_map(|item| {
                let (block, multiplier) = item.split_once(':')?;
                Some((block.trim().parse().ok()?, multiplier.trim().parse().ok()?))
            })
            .collect(),
    )
}
