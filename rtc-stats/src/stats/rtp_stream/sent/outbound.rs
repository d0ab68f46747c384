//! `outbound-rtp` records, one per stream we send.

use super::super::super::{RTCStatsType, StatsRecord};
use super::RTCSentRtpStreamStats;
use serde::{Deserialize, Serialize};

/// # W3C Reference
///
/// See [RTCOutboundRtpStreamStats](https://www.w3.org/TR/webrtc-stats/#outboundrtpstats-dict*)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCOutboundRtpStreamStats {
    #[serde(flatten)]
    pub sent_rtp_stream_stats: RTCSentRtpStreamStats,

    /// Legacy sender reference.
    pub sender_id: String,

    /// Id of the matching
    /// [`RTCRemoteInboundRtpStreamStats`](super::super::received::remote_inbound::RTCRemoteInboundRtpStreamStats).
    pub remote_id: String,

    pub nack_count: f64,
    pub frames_encoded: f64,
    pub frames_sent: f64,
    pub frames_per_second: f64,
}

impl RTCOutboundRtpStreamStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>) -> Self {
        Self {
            sent_rtp_stream_stats: RTCSentRtpStreamStats::from_record(
                record,
                RTCStatsType::OutboundRTP,
            ),
            sender_id: record.text("senderId"),
            remote_id: record.text("remoteId"),
            nack_count: record.number("nackCount"),
            frames_encoded: record.number("framesEncoded"),
            frames_sent: record.number("framesSent"),
            frames_per_second: record.number("framesPerSecond"),
        }
    }
}
