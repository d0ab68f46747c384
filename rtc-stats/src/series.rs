
use crate::snapshot::RTCStatsSnapshot;
use serde_json::{Value, json};
use shared::error::Result;

/// Default for region and network profile tags nobody configured.
pub const NOT_CONFIGURED: &str = "NC";

/// The snapshots captured for one peer connection, in capture order.
#[derive(Debug, Clone, PartialEq)]
pub struct RTCStatsTimeSeries {
    peer_connection: String,
    region_id: String,
    network_profile: String,
    snapshots: Vec<RTCStatsSnapshot>,
}

impl RTCStatsTimeSeries {
    pub fn new(peer_connection: impl Into<String>) -> Self {
        Self {
            peer_connection: peer_connection.into(),
            region_id: NOT_CONFIGURED.to_owned(),
            network_profile: NOT_CONFIGURED.to_owned(),
            snapshots: vec![],
        }
    }

    pub fn with_region_id(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = region_id.into();
        self
    }

    pub fn with_network_profile(mut self, network_profile: impl Into<String>) -> Self {
        self.network_profile = network_profile.into();
        self
    }

    /// Appends `snapshot`.
    ///
    /// Browser timestamps are trusted: a snapshot older than the previous one
    /// is still appended, only logged.
    pub fn push(&mut self, snapshot: RTCStatsSnapshot) {
        if let Some(last) = self.snapshots.last() {
            if snapshot.timestamp() < last.timestamp() {
                log::warn!(
                    "{}: snapshot timestamp went backwards ({} < {})",
                    self.peer_connection,
                    snapshot.timestamp(),
                    last.timestamp()
                );
            }
        }
        self.snapshots.push(snapshot);
    }

    pub fn peer_connection(&self) -> &str {
        &self.peer_connection
    }

    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    pub fn network_profile(&self) -> &str {
        &self.network_profile
    }

    pub fn iter(&self) -> impl Iterator<Item = &RTCStatsSnapshot> {
        self.snapshots.iter()
    }

    pub fn first(&self) -> Option<&RTCStatsSnapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&RTCStatsSnapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the raw series, one `{timestamp, stats}` object per snapshot.
    pub fn to_json(&self) -> Result<Value> {
        let snapshots = self
            .snapshots
            .iter()
            .map(|s| -> Result<Value> {
                Ok(json!({
                    "timestamp": s.timestamp(),
                    "stats": s.to_json()?
                }))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(json!({
            "peerConnection": self.peer_connection,
            "regionId": self.region_id,
            "networkProfile": self.network_profile,
            "snapshots": snapshots
        }))
    }
}

impl<'a> IntoIterator for &'a RTCStatsTimeSeries {
    type Item = &'a RTCStatsSnapshot;
    type IntoIter = std::slice::Iter<'a, RTCStatsSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
