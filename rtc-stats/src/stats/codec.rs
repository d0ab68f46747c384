use super::{RTCStats, RTCStatsType, StatsRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCCodecStats {
    #[serde(flatten)]
    pub stats: RTCStats,

    pub payload_type: f64,
    /// Hz.
    pub clock_rate: f64,
    pub channels: f64,
    /// `mimeType`, or `codec` on older browsers.
    pub mime_type: String,
    pub codec_type: String,
    pub sdp_fmtp_line: String,
}

impl RTCCodecStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>) -> Self {
        Self {
            stats: record.stats(RTCStatsType::Codec),
            payload_type: record.number("payloadType"),
            clock_rate: record.number("clockRate"),
            channels: record.number("channels"),
            mime_type: record.text_or(&["mimeType", "codec"]),
            codec_type: record.text("codecType"),
            sdp_fmtp_line: record.text("sdpFmtpLine"),
        }
    }
}
