//! Time series summarization.
//!
//! [`summarize`] reduces an [`RTCStatsTimeSeries`] to the derived metrics a
//! test report carries: byte totals, bitrates, packet loss, jitter, frame
//! rates and round trip times.


pub mod metric;
pub mod stream;

use crate::series::RTCStatsTimeSeries;
use crate::stats::RTCMediaKind;
use crate::stats::ice_candidate_pair::RTCIceCandidatePairStats;
use crate::stats::rtp_stream::received::inbound::RTCInboundRtpStreamStats;
use crate::stats::rtp_stream::sent::outbound::RTCOutboundRtpStreamStats;
use metric::Metric;
use serde::Serialize;
use serde_json::Value;
use shared::error::Result;
use shared::util::{NUMERIC_SENTINEL, is_sentinel};
use stream::{RtpStreamSample, StreamGroup, StreamSummary};

/// Stream summaries of one direction, split by media kind.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DirectionSummary {
    pub audio: Vec<StreamSummary>,
    pub video: Vec<StreamSummary>,
}

impl DirectionSummary {
    fn push(&mut self, summary: StreamSummary) {
        match summary.kind {
            RTCMediaKind::Audio => self.audio.push(summary),
            RTCMediaKind::Video => self.video.push(summary),
            RTCMediaKind::Unspecified => {
                log::debug!("skipping stream {} of unknown kind", summary.stream_id)
            }
        }
    }
}

/// The selected candidate pair of one snapshot, only part of fully detailed
/// summaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePairSample {
    pub timestamp: Metric,
    pub id: String,
    pub state: String,
    /// Milliseconds.
    pub total_round_trip_time: Metric,
    /// Milliseconds.
    pub current_round_trip_time: Metric,
}

/// Derived metrics of one peer connection's time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    #[serde(rename = "Starting Timestamp")]
    pub starting_timestamp: Metric,
    #[serde(rename = "Ending Timestamp")]
    pub ending_timestamp: Metric,
    #[serde(rename = "Total Inbound Bytes Received (Bytes)")]
    pub total_inbound_bytes: Metric,
    #[serde(rename = "Total Inbound Audio Bytes Received (Bytes)")]
    pub total_inbound_audio_bytes: Metric,
    #[serde(rename = "Total Inbound Video Bytes Received (Bytes)")]
    pub total_inbound_video_bytes: Metric,
    #[serde(rename = "Total Outbound Bytes Sent (Bytes)")]
    pub total_outbound_bytes: Metric,
    #[serde(rename = "Total Outbound Audio Bytes Sent (Bytes)")]
    pub total_outbound_audio_bytes: Metric,
    #[serde(rename = "Total Outbound Video Bytes Sent (Bytes)")]
    pub total_outbound_video_bytes: Metric,
    #[serde(rename = "Total Round Trip Time (ms)")]
    pub total_round_trip_time: Metric,
    #[serde(rename = "Average Current Round Trip Time (ms)")]
    pub average_current_round_trip_time: Metric,
    /// Over the successful candidate pair, so every stream and the RTCP and
    /// data channel traffic it carries.
    #[serde(rename = "Average Sent Bitrate (bps)")]
    pub average_sent_bitrate: Metric,
    #[serde(rename = "Average Received Bitrate (bps)")]
    pub average_received_bitrate: Metric,
    #[serde(rename = "Remote IP", skip_serializing_if = "Option::is_none")]
    pub remote_ip: Option<String>,
    pub inbound: DirectionSummary,
    pub outbound: DirectionSummary,
    #[serde(rename = "candidatePairs", skip_serializing_if = "Option::is_none")]
    pub candidate_pairs: Option<Vec<CandidatePairSample>>,
}

impl StatsSummary {
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Summarizes `series`.
///
/// `fully_detailed` adds the per snapshot readings of every stream, the
/// selected candidate pair of every snapshot and the remote address.
pub fn summarize(series: &RTCStatsTimeSeries, fully_detailed: bool) -> StatsSummary {
    let timestamp = |s: Option<&crate::snapshot::RTCStatsSnapshot>| {
        Metric::reading(s.map_or(NUMERIC_SENTINEL, |s| s.timestamp()))
    };

    let last = series.last();
    let inbound_totals = byte_totals(
        last.into_iter()
            .flat_map(|s| s.inbound_rtp_streams())
            .map(|s| (s.rtp().kind, s.bytes())),
    );
    let outbound_totals = byte_totals(
        last.into_iter()
            .flat_map(|s| s.outbound_rtp_streams())
            .map(|s| (s.rtp().kind, s.bytes())),
    );

    let pairs = || {
        series
            .iter()
            .filter_map(|s| s.successful_candidate_pair().as_candidate_pair())
    };
    let total_round_trip_time =
        Metric::sum(pairs().map(|p| seconds_to_millis(p.total_round_trip_time)));
    let average_current_round_trip_time = Metric::mean(
        pairs()
            .map(|p| p.current_round_trip_time)
            .filter(|rtt| *rtt > 0.0)
            .map(seconds_to_millis),
    );

    let transport = pair_bitrates(pairs());

    let mut inbound = DirectionSummary::default();
    let inbound_groups =
        StreamGroup::<RTCInboundRtpStreamStats>::collect(series, |s| s.inbound_rtp_streams());
    for group in inbound_groups {
        inbound.push(group.inbound_summary(fully_detailed));
    }
    let mut outbound = DirectionSummary::default();
    let outbound_groups =
        StreamGroup::<RTCOutboundRtpStreamStats>::collect(series, |s| s.outbound_rtp_streams());
    for group in outbound_groups {
        outbound.push(group.outbound_summary(fully_detailed));
    }

    let candidate_pairs = fully_detailed.then(|| {
        series
            .iter()
            .filter_map(|snapshot| {
                let pair = snapshot.successful_candidate_pair().as_candidate_pair()?;
                Some(CandidatePairSample {
                    timestamp: Metric::reading(snapshot.timestamp()),
                    id: pair.stats.id.clone(),
                    state: pair.state.to_string(),
                    total_round_trip_time: Metric::reading(seconds_to_millis(
                        pair.total_round_trip_time,
                    )),
                    current_round_trip_time: Metric::reading(seconds_to_millis(
                        pair.current_round_trip_time,
                    )),
                })
            })
            .collect()
    });

    log::debug!(
        "{}: summarized {} snapshots, {} inbound and {} outbound streams",
        series.peer_connection(),
        series.len(),
        inbound.audio.len() + inbound.video.len(),
        outbound.audio.len() + outbound.video.len()
    );

    StatsSummary {
        starting_timestamp: timestamp(series.first()),
        ending_timestamp: timestamp(last),
        total_inbound_bytes: inbound_totals.all,
        total_inbound_audio_bytes: inbound_totals.audio,
        total_inbound_video_bytes: inbound_totals.video,
        total_outbound_bytes: outbound_totals.all,
        total_outbound_audio_bytes: outbound_totals.audio,
        total_outbound_video_bytes: outbound_totals.video,
        total_round_trip_time,
        average_current_round_trip_time,
        average_sent_bitrate: transport.sent,
        average_received_bitrate: transport.received,
        remote_ip: fully_detailed.then(|| last.map(|s| s.remote_ip())).flatten(),
        inbound,
        outbound,
        candidate_pairs,
    }
}

struct ByteTotals {
    all: Metric,
    audio: Metric,
    video: Metric,
}

fn byte_totals(streams: impl Iterator<Item = (RTCMediaKind, f64)>) -> ByteTotals {
    let streams: Vec<_> = streams.collect();
    let of_kind = |kind: RTCMediaKind| {
        Metric::sum(
            streams
                .iter()
                .filter(|(k, _)| *k == kind)
                .map(|(_, bytes)| *bytes),
        )
    };

    ByteTotals {
        all: Metric::sum(streams.iter().map(|(_, bytes)| *bytes)),
        audio: of_kind(RTCMediaKind::Audio),
        video: of_kind(RTCMediaKind::Video),
    }
}

struct PairBitrates {
    sent: Metric,
    received: Metric,
}

/// Bitrates between the first and the last successful candidate pair.
fn pair_bitrates<'a>(pairs: impl Iterator<Item = &'a RTCIceCandidatePairStats>) -> PairBitrates {
    let pairs: Vec<_> = pairs.collect();
    let (Some(first), Some(last)) = (pairs.first(), pairs.last()) else {
        return PairBitrates {
            sent: Metric::MISSING,
            received: Metric::MISSING,
        };
    };

    let (first_ms, last_ms) = (first.stats.timestamp, last.stats.timestamp);
    PairBitrates {
        sent: Metric::bitrate(first.bytes_sent, last.bytes_sent, first_ms, last_ms),
        received: Metric::bitrate(first.bytes_received, last.bytes_received, first_ms, last_ms),
    }
}

fn seconds_to_millis(seconds: f64) -> f64 {
    if is_sentinel(seconds) {
        NUMERIC_SENTINEL
    } else {
        1000.0 * seconds
    }
}
