use crate::series::NOT_CONFIGURED;
use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};
use std::time::Duration;

/// Default length of a collection, in milliseconds.
pub const DEFAULT_STATS_COLLECTION_TIME: u64 = 10_000;
/// Default time between two captures, in milliseconds.
pub const DEFAULT_STATS_COLLECTION_INTERVAL: u64 = 1_000;

/// What to collect, for how long and how often.
///
/// Deserializes from the test payload JSON, e.g.
///
/// ```json
/// {
///   "peerConnections": ["window.pc"],
///   "statsCollectionTime": 10000,
///   "statsCollectionInterval": 1000,
///   "selectedStats": ["inbound-rtp", "outbound-rtp", "candidate-pair"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetStatsConfig {
    /// Labels of the peer connections to collect from, in collection order.
    pub peer_connections: Vec<String>,

    /// Length of the collection in milliseconds.
    #[serde(alias = "statsCollectionDuration")]
    pub stats_collection_time: u64,

    /// Time between two captures in milliseconds.
    pub stats_collection_interval: u64,

    /// Stats types to keep, all of them when empty.
    pub selected_stats: Vec<String>,

    pub region_id: String,

    pub network_profile: String,
}

impl Default for GetStatsConfig {
    fn default() -> Self {
        Self {
            peer_connections: vec![],
            stats_collection_time: DEFAULT_STATS_COLLECTION_TIME,
            stats_collection_interval: DEFAULT_STATS_COLLECTION_INTERVAL,
            selected_stats: vec![],
            region_id: NOT_CONFIGURED.to_owned(),
            network_profile: NOT_CONFIGURED.to_owned(),
        }
    }
}

impl GetStatsConfig {
    /// Parses and validates a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GetStatsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.peer_connections.is_empty() {
            return Err(Error::ErrNoPeerConnections);
        }
        if self.stats_collection_interval == 0 {
            return Err(Error::ErrZeroCollectionInterval);
        }
        if let Some(label) = self.peer_connections.iter().find(|pc| pc.trim().is_empty()) {
            return Err(Error::ErrInvalidConfig(format!(
                "blank peer connection label {label:?}"
            )));
        }
        Ok(())
    }

    pub fn collection_time(&self) -> Duration {
        Duration::from_millis(self.stats_collection_time)
    }

    pub fn collection_interval(&self) -> Duration {
        Duration::from_millis(self.stats_collection_interval)
    }
}

#[derive(Default)]
pub struct GetStatsConfigBuilder {
    config: GetStatsConfig,
}

impl GetStatsConfigBuilder {
    pub fn new() -> Self {
        GetStatsConfigBuilder::default()
    }

    pub fn with_peer_connections(mut self, peer_connections: Vec<String>) -> Self {
        self.config.peer_connections = peer_connections;
        self
    }

    pub fn with_stats_collection_time(mut self, stats_collection_time: Duration) -> Self {
        self.config.stats_collection_time = duration_millis(stats_collection_time);
        self
    }

    pub fn with_stats_collection_interval(mut self, stats_collection_interval: Duration) -> Self {
        self.config.stats_collection_interval = duration_millis(stats_collection_interval);
        self
    }

    pub fn with_selected_stats(mut self, selected_stats: Vec<String>) -> Self {
        self.config.selected_stats = selected_stats;
        self
    }

    pub fn with_region_id(mut self, region_id: String) -> Self {
        self.config.region_id = region_id;
        self
    }

    pub fn with_network_profile(mut self, network_profile: String) -> Self {
        self.config.network_profile = network_profile;
        self
    }

    pub fn build(self) -> Result<GetStatsConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
