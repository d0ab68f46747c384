//! Per RTP stream summaries.

use super::metric::Metric;
use crate::series::RTCStatsTimeSeries;
use crate::snapshot::RTCStatsSnapshot;
use crate::stats::RTCMediaKind;
use crate::stats::rtp_stream::RTCRtpStreamStats;
use crate::stats::rtp_stream::received::inbound::RTCInboundRtpStreamStats;
use crate::stats::rtp_stream::sent::outbound::RTCOutboundRtpStreamStats;
use serde::Serialize;
use shared::util::{NUMERIC_SENTINEL, is_sentinel};
use std::collections::HashMap;

/// Readings shared by inbound and outbound streams.
pub(crate) trait RtpStreamSample {
    fn rtp(&self) -> &RTCRtpStreamStats;
    fn bytes(&self) -> f64;
    fn packets(&self) -> f64;
    fn frames_per_second(&self) -> f64;
}

impl RtpStreamSample for RTCInboundRtpStreamStats {
    fn rtp(&self) -> &RTCRtpStreamStats {
        &self.received_rtp_stream_stats.rtp_stream_stats
    }

    fn bytes(&self) -> f64 {
        self.received_rtp_stream_stats.bytes_received
    }

    fn packets(&self) -> f64 {
        self.received_rtp_stream_stats.packets_received
    }

    fn frames_per_second(&self) -> f64 {
        self.frames_per_second
    }
}

impl RtpStreamSample for RTCOutboundRtpStreamStats {
    fn rtp(&self) -> &RTCRtpStreamStats {
        &self.sent_rtp_stream_stats.rtp_stream_stats
    }

    fn bytes(&self) -> f64 {
        self.sent_rtp_stream_stats.bytes_sent
    }

    fn packets(&self) -> f64 {
        self.sent_rtp_stream_stats.packets_sent
    }

    fn frames_per_second(&self) -> f64 {
        self.frames_per_second
    }
}

/// Every reading of one stream across a time series, in capture order.
pub(crate) struct StreamGroup<'a, S> {
    pub(crate) samples: Vec<(&'a RTCStatsSnapshot, &'a S)>,
}

impl<'a, S: RtpStreamSample> StreamGroup<'a, S> {
    /// Groups the streams `streams_of` returns by stream id, in order of
    /// first appearance.
    pub(crate) fn collect<I, F>(series: &'a RTCStatsTimeSeries, streams_of: F) -> Vec<Self>
    where
        F: Fn(&'a RTCStatsSnapshot) -> I,
        I: Iterator<Item = &'a S>,
    {
        let mut groups: Vec<Self> = vec![];
        let mut index: HashMap<&'a str, usize> = HashMap::new();

        for snapshot in series {
            for stream in streams_of(snapshot) {
                let id = stream.rtp().stats.id.as_str();
                let i = *index.entry(id).or_insert_with(|| {
                    groups.push(StreamGroup { samples: vec![] });
                    groups.len() - 1
                });
                groups[i].samples.push((snapshot, stream));
            }
        }

        groups
    }

    fn first(&self) -> Option<&'a S> {
        self.samples.first().map(|(_, s)| *s)
    }

    fn last(&self) -> Option<(&'a RTCStatsSnapshot, &'a S)> {
        self.samples.last().copied()
    }

    pub(crate) fn kind(&self) -> RTCMediaKind {
        self.first().map_or(RTCMediaKind::Unspecified, |s| s.rtp().kind)
    }

    /// Mean of the stream's frame rate, read from the linked media source
    /// when the stream does not report one.
    fn average_frame_rate(&self) -> Metric {
        Metric::mean(self.samples.iter().map(|(snapshot, stream)| {
            let fps = stream.frames_per_second();
            if is_sentinel(fps) {
                snapshot
                    .track_for(&stream.rtp().stats.id)
                    .map_or(NUMERIC_SENTINEL, |t| t.frames_per_second())
            } else {
                fps
            }
        }))
    }

    fn summary(&self, fully_detailed: bool) -> StreamSummary {
        let kind = self.kind();
        let (first, (last_snapshot, last)) = match (self.first(), self.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return StreamSummary::default(),
        };
        let rtp = last.rtp();
        let track = last_snapshot.track_for(&rtp.stats.id);

        let average_bitrate = if self.samples.len() < 2 {
            Metric::NotAvailable(last.bytes())
        } else {
            Metric::bitrate(
                first.bytes(),
                last.bytes(),
                sample_timestamp(&self.samples[0]),
                sample_timestamp(&(last_snapshot, last)),
            )
        };

        StreamSummary {
            stream_id: rtp.stats.id.clone(),
            ssrc: rtp.ssrc.clone(),
            kind,
            codec_id: rtp.codec_id.clone(),
            sample_count: self.samples.len(),
            total_bytes: Metric::reading(last.bytes()),
            average_bitrate,
            total_packets: Metric::reading(last.packets()),
            average_frame_rate: (kind == RTCMediaKind::Video).then(|| self.average_frame_rate()),
            audio_level: (kind == RTCMediaKind::Audio)
                .then(|| Metric::Value(track.map_or(NUMERIC_SENTINEL, |t| t.audio_level()))),
            ..Default::default()
        }
        .with_samples(fully_detailed.then(|| {
            self.samples
                .iter()
                .map(|sample| StreamSample {
                    timestamp: Metric::reading(sample_timestamp(sample)),
                    bytes: Metric::reading(sample.1.bytes()),
                    packets: Metric::reading(sample.1.packets()),
                    frames_per_second: (kind == RTCMediaKind::Video)
                        .then(|| Metric::reading(sample.1.frames_per_second())),
                    jitter: None,
                })
                .collect()
        }))
    }
}

/// The stream's own timestamp, the snapshot's when it has none.
fn sample_timestamp<S: RtpStreamSample>((snapshot, stream): &(&RTCStatsSnapshot, &S)) -> f64 {
    let timestamp = stream.rtp().stats.timestamp;
    if is_sentinel(timestamp) {
        snapshot.timestamp()
    } else {
        timestamp
    }
}

impl StreamGroup<'_, RTCInboundRtpStreamStats> {
    pub(crate) fn inbound_summary(&self, fully_detailed: bool) -> StreamSummary {
        let mut summary = self.summary(fully_detailed);
        let Some((last_snapshot, last)) = self.last() else {
            return summary;
        };
        let received = &last.received_rtp_stream_stats;
        let kind = summary.kind;

        summary.packets_lost = Some(Metric::reading(received.packets_lost));
        summary.packet_loss_percentage = Some(Metric::percentage(
            received.packets_lost,
            received.packets_received,
        ));
        summary.packet_discard_percentage = Some(Metric::percentage(
            received.packets_discarded,
            received.packets_received,
        ));
        if kind == RTCMediaKind::Audio {
            summary.average_jitter = Some(Metric::mean(self.samples.iter().map(|(_, s)| {
                let jitter = s.received_rtp_stream_stats.jitter;
                if is_sentinel(jitter) {
                    NUMERIC_SENTINEL
                } else {
                    1000.0 * jitter
                }
            })));
        }
        summary.frames_received = Some(Metric::Value(
            last_snapshot
                .track_for(&received.rtp_stream_stats.stats.id)
                .map_or(NUMERIC_SENTINEL, |t| t.frames_received()),
        ));

        if let Some(samples) = summary.samples.as_mut() {
            for (sample, (_, stream)) in samples.iter_mut().zip(&self.samples) {
                let jitter = stream.received_rtp_stream_stats.jitter;
                sample.jitter = Some(if is_sentinel(jitter) {
                    Metric::MISSING
                } else {
                    Metric::Value(1000.0 * jitter)
                });
            }
        }
        summary
    }
}

impl StreamGroup<'_, RTCOutboundRtpStreamStats> {
    pub(crate) fn outbound_summary(&self, fully_detailed: bool) -> StreamSummary {
        let mut summary = self.summary(fully_detailed);
        if let Some((last_snapshot, last)) = self.last() {
            summary.frames_sent = Some(Metric::Value(
                last_snapshot
                    .track_for(&last.rtp().stats.id)
                    .map_or(NUMERIC_SENTINEL, |t| t.frames_sent()),
            ));
        }
        summary
    }
}

/// One stream reading, only part of fully detailed summaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSample {
    pub timestamp: Metric,
    pub bytes: Metric,
    pub packets: Metric,
    /// Milliseconds, inbound streams only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jitter: Option<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames_per_second: Option<Metric>,
}

/// Derived metrics of one RTP stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSummary {
    pub stream_id: String,
    pub ssrc: String,
    pub kind: RTCMediaKind,
    pub codec_id: String,
    /// Number of snapshots the stream appears in.
    pub sample_count: usize,
    /// Bytes received or sent, from the last snapshot.
    pub total_bytes: Metric,
    /// Bits per second between the first and the last snapshot.
    pub average_bitrate: Metric,
    pub total_packets: Metric,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packets_lost: Option<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_loss_percentage: Option<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_discard_percentage: Option<Metric>,
    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_jitter: Option<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_frame_rate: Option<Metric>,
    /// From the linked media source, `-1` when there is none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames_received: Option<Metric>,
    /// From the linked media source, `-1` when there is none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames_sent: Option<Metric>,
    /// From the linked media source, `-1` when there is none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_level: Option<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<StreamSample>>,
}

impl Default for StreamSummary {
    fn default() -> Self {
        Self {
            stream_id: shared::util::NOT_AVAILABLE.to_owned(),
            ssrc: shared::util::NOT_AVAILABLE.to_owned(),
            kind: RTCMediaKind::Unspecified,
            codec_id: shared::util::NOT_AVAILABLE.to_owned(),
            sample_count: 0,
            total_bytes: Metric::MISSING,
            average_bitrate: Metric::MISSING,
            total_packets: Metric::MISSING,
            packets_lost: None,
            packet_loss_percentage: None,
            packet_discard_percentage: None,
            average_jitter: None,
            average_frame_rate: None,
            frames_received: None,
            frames_sent: None,
            audio_level: None,
            samples: None,
        }
    }
}

impl StreamSummary {
    fn with_samples(mut self, samples: Option<Vec<StreamSample>>) -> Self {
        self.samples = samples;
        self
    }
}
