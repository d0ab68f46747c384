use super::super::{RTCStatsType, StatsRecord};
use super::RTCRtpStreamStats;
use serde::{Deserialize, Serialize};

pub mod inbound;
pub mod remote_inbound;

/// Counters shared by `inbound-rtp` and `remote-inbound-rtp` records.
///
/// # W3C Reference
///
/// See [RTCReceivedRtpStreamStats](https://www.w3.org/TR/webrtc-stats/#receivedrtpstats-dict*)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCReceivedRtpStreamStats {
    #[serde(flatten)]
    pub rtp_stream_stats: RTCRtpStreamStats,

    pub packets_received: f64,

    /// Cumulative, may go negative when duplicates arrive.
    pub packets_lost: f64,

    /// Dropped by the jitter buffer as late or early.
    pub packets_discarded: f64,

    /// Seconds.
    pub jitter: f64,

    pub bytes_received: f64,
}

impl RTCReceivedRtpStreamStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>, typ: RTCStatsType) -> Self {
        Self {
            rtp_stream_stats: RTCRtpStreamStats::from_record(record, typ),
            packets_received: record.number("packetsReceived"),
            packets_lost: record.number("packetsLost"),
            packets_discarded: record.number("packetsDiscarded"),
            jitter: record.number("jitter"),
            bytes_received: record.number("bytesReceived"),
        }
    }
}
