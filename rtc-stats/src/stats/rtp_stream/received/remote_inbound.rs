use super::super::super::{RTCStatsType, StatsRecord};
use super::RTCReceivedRtpStreamStats;
use serde::{Deserialize, Serialize};

/// What the remote peer reports, through RTCP receiver reports, about a
/// stream we send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCRemoteInboundRtpStreamStats {
    #[serde(flatten)]
    pub received_rtp_stream_stats: RTCReceivedRtpStreamStats,

    /// Id of the matching local `outbound-rtp` record.
    pub local_id: String,

    /// Seconds.
    pub round_trip_time: f64,

    pub fraction_lost: f64,
}

impl RTCRemoteInboundRtpStreamStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>) -> Self {
        Self {
            received_rtp_stream_stats: RTCReceivedRtpStreamStats::from_record(
                record,
                RTCStatsType::RemoteInboundRTP,
            ),
            local_id: record.text("localId"),
            round_trip_time: record.number("roundTripTime"),
            fraction_lost: record.number("fractionLost"),
        }
    }
}
