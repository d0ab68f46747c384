use super::{RTCStats, RTCStatsType, StatsRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCPeerConnectionStats {
    #[serde(flatten)]
    pub stats: RTCStats,

    pub data_channels_opened: f64,
    pub data_channels_closed: f64,
}

impl RTCPeerConnectionStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>) -> Self {
        Self {
            stats: record.stats(RTCStatsType::PeerConnection),
            data_channels_opened: record.number("dataChannelsOpened"),
            data_channels_closed: record.number("dataChannelsClosed"),
        }
    }
}
