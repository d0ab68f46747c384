use super::super::{RTCMediaKind, RTCStatsType, StatsRecord};
use super::media_source::RTCMediaSourceStats;
use serde::{Deserialize, Serialize};

/// An audio `media-source`, or a legacy audio `track`.
///
/// # W3C Reference
///
/// See [RTCAudioSourceStats](https://www.w3.org/TR/webrtc-stats/#audiosourcestats-dict*)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCAudioSourceStats {
    #[serde(flatten)]
    pub media_source_stats: RTCMediaSourceStats,

    /// 0.0 to 1.0, linear.
    pub audio_level: f64,
    pub total_audio_energy: f64,
    /// Seconds.
    pub total_samples_duration: f64,

    /// Legacy `track` records report frame counters on audio too.
    pub frames_received: f64,

    pub frames_sent: f64,
}

impl RTCAudioSourceStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>, typ: RTCStatsType) -> Self {
        Self {
            media_source_stats: RTCMediaSourceStats::from_record(record, typ, RTCMediaKind::Audio),
            audio_level: record.number("audioLevel"),
            total_audio_energy: record.number("totalAudioEnergy"),
            total_samples_duration: record.number("totalSamplesDuration"),
            frames_received: record.number("framesReceived"),
            frames_sent: record.number("framesSent"),
        }
    }
}
