use super::super::{RTCMediaKind, RTCStatsType, StatsRecord};
use super::media_source::RTCMediaSourceStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCVideoSourceStats {
    #[serde(flatten)]
    pub media_source_stats: RTCMediaSourceStats,

    /// `frameWidth` on `track` records, `width` on `media-source` records.
    pub width: f64,
    pub height: f64,
    pub frames_per_second: f64,
    pub frames_sent: f64,
    pub frames_received: f64,
    pub frames_decoded: f64,
    pub frames_dropped: f64,
    pub frames_corrupted: f64,
}

impl RTCVideoSourceStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>, typ: RTCStatsType) -> Self {
        Self {
            media_source_stats: RTCMediaSourceStats::from_record(record, typ, RTCMediaKind::Video),
            width: record.number_or(&["frameWidth", "width"]),
            height: record.number_or(&["frameHeight", "height"]),
            frames_per_second: record.number("framesPerSecond"),
            frames_sent: record.number("framesSent"),
            frames_received: record.number("framesReceived"),
            frames_decoded: record.number("framesDecoded"),
            frames_dropped: record.number("framesDropped"),
            frames_corrupted: record.number("framesCorrupted"),
        }
    }
}
