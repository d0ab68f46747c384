use super::{RTCStats, RTCStatsType, StatsRecord};
use serde::{Deserialize, Serialize};

/// A `local-candidate` or `remote-candidate` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCIceCandidateStats {
    #[serde(flatten)]
    pub stats: RTCStats,

    pub transport_id: String,
    /// `address`, or `ip` on older browsers.
    pub address: String,
    pub port: f64,
    pub protocol: String,
    /// host, srflx, prflx or relay.
    pub candidate_type: String,
    pub priority: f64,
    pub url: String,
}

impl RTCIceCandidateStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>, typ: RTCStatsType) -> Self {
        Self {
            stats: record.stats(typ),
            transport_id: record.text("transportId"),
            address: record.text_or(&["address", "ip"]),
            port: record.number("port"),
            protocol: record.text("protocol"),
            candidate_type: record.text("candidateType"),
            priority: record.number("priority"),
            url: record.text("url"),
        }
    }

    /// Returns true for a `remote-candidate` record.
    pub fn is_remote(&self) -> bool {
        self.stats.typ == RTCStatsType::RemoteCandidate
    }
}
