use super::{RTCStats, RTCStatsType, StatsRecord};
use serde::{Deserialize, Serialize};

/// Statistics for a data channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCDataChannelStats {
    #[serde(flatten)]
    pub stats: RTCStats,

    pub label: String,
    pub protocol: String,
    pub data_channel_identifier: String,
    /// "connecting", "open", "closing" or "closed".
    pub state: String,
    pub messages_sent: f64,
    pub bytes_sent: f64,
    pub messages_received: f64,
    pub bytes_received: f64,
}

impl RTCDataChannelStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>) -> Self {
        Self {
            stats: record.stats(RTCStatsType::DataChannel),
            label: record.text("label"),
            protocol: record.text("protocol"),
            data_channel_identifier: record.text("dataChannelIdentifier"),
            state: record.text("state"),
            messages_sent: record.number("messagesSent"),
            bytes_sent: record.number("bytesSent"),
            messages_received: record.number("messagesReceived"),
            bytes_received: record.number("bytesReceived"),
        }
    }
}
