//! Fields shared by `media-source` and legacy `track` records.

use super::super::{RTCMediaKind, RTCStats, RTCStatsType, StatsRecord};
use serde::{Deserialize, Serialize};

/// Embedded in [`RTCAudioSourceStats`](super::audio_source::RTCAudioSourceStats)
/// and [`RTCVideoSourceStats`](super::video_source::RTCVideoSourceStats).
///
/// # W3C Reference
///
/// See [RTCMediaSourceStats](https://www.w3.org/TR/webrtc-stats/#mediasourcestats-dict*)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCMediaSourceStats {
    #[serde(flatten)]
    pub stats: RTCStats,

    /// `MediaStreamTrack.id`.
    pub track_identifier: String,

    pub kind: RTCMediaKind,

    /// Legacy `track` field, "true" for a track received from the remote peer.
    pub remote_source: String,

    /// Legacy `track` field.
    pub ended: String,

    /// Legacy `track` field.
    pub detached: String,
}

impl RTCMediaSourceStats {
    pub(crate) fn from_record(
        record: &StatsRecord<'_>,
        typ: RTCStatsType,
        kind: RTCMediaKind,
    ) -> Self {
        Self {
            stats: record.stats(typ),
            track_identifier: record.text("trackIdentifier"),
            kind,
            remote_source: record.text("remoteSource"),
            ended: record.text("ended"),
            detached: record.text("detached"),
        }
    }

    /// Returns true if a stream referencing `track_id` belongs to this source.
    ///
    /// Streams reference their source by record id (`trackId`,
    /// `mediaSourceId`) or by track identifier.
    pub fn is_referenced_by(&self, track_id: &str) -> bool {
        shared::util::is_available(track_id)
            && (self.stats.id == track_id || self.track_identifier == track_id)
    }
}
