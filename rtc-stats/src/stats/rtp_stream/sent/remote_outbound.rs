use super::super::super::{RTCStatsType, StatsRecord};
use super::RTCSentRtpStreamStats;
use serde::{Deserialize, Serialize};

/// Statistics the remote peer reports about the stream it sends us.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCRemoteOutboundRtpStreamStats {
    #[serde(flatten)]
    pub sent_rtp_stream_stats: RTCSentRtpStreamStats,

    /// Id of the matching local `inbound-rtp` record.
    pub local_id: String,

    /// Remote timestamp at which these statistics were sent, as reported.
    pub remote_timestamp: String,
}

impl RTCRemoteOutboundRtpStreamStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>) -> Self {
        Self {
            sent_rtp_stream_stats: RTCSentRtpStreamStats::from_record(
                record,
                RTCStatsType::RemoteOutboundRTP,
            ),
            local_id: record.text("localId"),
            remote_timestamp: record.text("remoteTimestamp"),
        }
    }
}
