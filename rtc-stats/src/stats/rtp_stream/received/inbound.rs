//! `inbound-rtp` records, one per stream we receive.

use super::super::super::{RTCStatsType, StatsRecord};
use super::RTCReceivedRtpStreamStats;
use ::serde::{Deserialize, Serialize};

/// # W3C Reference
///
/// See [RTCInboundRtpStreamStats](https://www.w3.org/TR/webrtc-stats/#inboundrtpstats-dict*)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCInboundRtpStreamStats {
    #[serde(flatten)]
    pub received_rtp_stream_stats: RTCReceivedRtpStreamStats,

    /// Legacy receiver reference.
    pub receiver_id: String,

    /// Id of the matching
    /// [`RTCRemoteOutboundRtpStreamStats`](super::super::sent::remote_outbound::RTCRemoteOutboundRtpStreamStats).
    pub remote_id: String,

    pub nack_count: f64,

    /// Audio only, 0.0 to 1.0.
    pub audio_level: f64,

    pub frames_decoded: f64,
    pub frames_received: f64,
    pub frames_dropped: f64,
    pub frames_per_second: f64,
    pub partial_frames_lost: f64,

    pub total_audio_energy: f64,
    pub total_samples_duration: f64,
}

impl RTCInboundRtpStreamStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>) -> Self {
        Self {
            received_rtp_stream_stats: RTCReceivedRtpStreamStats::from_record(
                record,
                RTCStatsType::InboundRTP,
            ),
            receiver_id: record.text("receiverId"),
            remote_id: record.text("remoteId"),
            nack_count: record.number("nackCount"),
            audio_level: record.number("audioLevel"),
            frames_decoded: record.number("framesDecoded"),
            frames_received: record.number("framesReceived"),
            frames_dropped: record.number("framesDropped"),
            frames_per_second: record.number("framesPerSecond"),
            partial_frames_lost: record.number("partialFramesLost"),
            total_audio_energy: record.number("totalAudioEnergy"),
            total_samples_duration: record.number("totalSamplesDuration"),
        }
    }
}
