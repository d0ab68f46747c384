//! RTP stream statistics.
//!
//! Inbound and remote-outbound records describe what we receive, outbound and
//! remote-inbound records what we send. All four share [`RTCRtpStreamStats`];
//! the `received` and `sent` submodules add the per direction counters.

use super::{RTCMediaKind, RTCStats, RTCStatsType, StatsRecord};
use serde::{Deserialize, Serialize};

pub mod received;
pub mod sent;

/// Fields every RTP stream record carries.
///
/// # W3C Reference
///
/// See [RTCRtpStreamStats](https://www.w3.org/TR/webrtc-stats/#rtpstreamstats-dict*)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCRtpStreamStats {
    #[serde(flatten)]
    pub stats: RTCStats,

    /// Reported as a number by current browsers and as a string by older ones.
    pub ssrc: String,

    /// Read from `kind`, then from the legacy `mediaType`.
    pub kind: RTCMediaKind,

    /// Id of the [`RTCTransportStats`](super::transport::RTCTransportStats) record.
    pub transport_id: String,

    /// Id of the [`RTCCodecStats`](super::codec::RTCCodecStats) record.
    pub codec_id: String,

    /// The media source feeding or fed by this stream.
    ///
    /// Read from `trackId`, then `mediaSourceId`, then `trackIdentifier`.
    pub track_id: String,
}

impl RTCRtpStreamStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>, typ: RTCStatsType) -> Self {
        Self {
            stats: record.stats(typ),
            ssrc: record.text("ssrc"),
            kind: record.kind(),
            transport_id: record.text("transportId"),
            codec_id: record.text("codecId"),
            track_id: record.text_or(&["trackId", "mediaSourceId", "trackIdentifier"]),
        }
    }
}
