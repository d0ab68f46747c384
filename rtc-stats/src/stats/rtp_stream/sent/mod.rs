use super::super::{RTCStatsType, StatsRecord};
use super::RTCRtpStreamStats;
use serde::{Deserialize, Serialize};

pub mod outbound;
pub mod remote_outbound;

/// Counters shared by `outbound-rtp` and `remote-outbound-rtp` records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCSentRtpStreamStats {
    #[serde(flatten)]
    pub rtp_stream_stats: RTCRtpStreamStats,

    pub packets_sent: f64,
    pub bytes_sent: f64,
}

impl RTCSentRtpStreamStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>, typ: RTCStatsType) -> Self {
        Self {
            rtp_stream_stats: RTCRtpStreamStats::from_record(record, typ),
            packets_sent: record.number("packetsSent"),
            bytes_sent: record.number("bytesSent"),
        }
    }
}
