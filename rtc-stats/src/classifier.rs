//! Raw getStats() record classification.
//!
//! [`classify`] turns one raw record into exactly one [`RTCStatsEntry`]
//! variant, picked from the record's `type` field.

#[cfg(test)]
mod classifier_test;

use crate::stats::certificate::RTCCertificateStats;
use crate::stats::codec::RTCCodecStats;
use crate::stats::data_channel::RTCDataChannelStats;
use crate::stats::ice_candidate::RTCIceCandidateStats;
use crate::stats::ice_candidate_pair::RTCIceCandidatePairStats;
use crate::stats::media::VIDEO_ONLY_FIELDS;
use crate::stats::media::audio_source::RTCAudioSourceStats;
use crate::stats::media::media_source::RTCMediaSourceStats;
use crate::stats::media::video_source::RTCVideoSourceStats;
use crate::stats::peer_connection::RTCPeerConnectionStats;
use crate::stats::rtp_stream::RTCRtpStreamStats;
use crate::stats::rtp_stream::received::inbound::RTCInboundRtpStreamStats;
use crate::stats::rtp_stream::received::remote_inbound::RTCRemoteInboundRtpStreamStats;
use crate::stats::rtp_stream::sent::outbound::RTCOutboundRtpStreamStats;
use crate::stats::rtp_stream::sent::remote_outbound::RTCRemoteOutboundRtpStreamStats;
use crate::stats::transport::RTCTransportStats;
use crate::stats::{RTCMediaKind, RTCStats, RTCStatsType, RawRecord, StatsRecord};
use serde::Serialize;
use shared::util::NUMERIC_SENTINEL;

/// A classified statistics object.
///
/// Each variant corresponds to a different W3C WebRTC stats dictionary type.
/// [`RTCStatsEntry::Empty`] stands for "no data", e.g. when no candidate pair
/// carries the connection yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RTCStatsEntry {
    /// Peer connection level statistics.
    PeerConnection(RTCPeerConnectionStats),
    /// Transport statistics.
    Transport(RTCTransportStats),
    /// ICE candidate pair statistics.
    IceCandidatePair(RTCIceCandidatePairStats),
    /// Local ICE candidate statistics.
    LocalCandidate(RTCIceCandidateStats),
    /// Remote ICE candidate statistics.
    RemoteCandidate(RTCIceCandidateStats),
    /// Certificate statistics.
    Certificate(RTCCertificateStats),
    /// Codec statistics.
    Codec(RTCCodecStats),
    /// Data channel statistics.
    DataChannel(RTCDataChannelStats),
    /// Inbound RTP stream statistics.
    InboundRtp(RTCInboundRtpStreamStats),
    /// Outbound RTP stream statistics.
    OutboundRtp(RTCOutboundRtpStreamStats),
    /// Remote inbound RTP stream statistics (from RTCP RR).
    RemoteInboundRtp(RTCRemoteInboundRtpStreamStats),
    /// Remote outbound RTP stream statistics (from RTCP SR).
    RemoteOutboundRtp(RTCRemoteOutboundRtpStreamStats),
    /// Audio `track` or `media-source` statistics.
    AudioSource(RTCAudioSourceStats),
    /// Video `track` or `media-source` statistics.
    VideoSource(RTCVideoSourceStats),
    /// No data.
    Empty,
}

/// Shared "no data" entry, handed out by reference from lookups.
pub static EMPTY: RTCStatsEntry = RTCStatsEntry::Empty;

impl RTCStatsEntry {
    /// Returns the base fields, `None` for [`RTCStatsEntry::Empty`].
    pub fn stats(&self) -> Option<&RTCStats> {
        let stats = match self {
            RTCStatsEntry::PeerConnection(s) => &s.stats,
            RTCStatsEntry::Transport(s) => &s.stats,
            RTCStatsEntry::IceCandidatePair(s) => &s.stats,
            RTCStatsEntry::LocalCandidate(s) => &s.stats,
            RTCStatsEntry::RemoteCandidate(s) => &s.stats,
            RTCStatsEntry::Certificate(s) => &s.stats,
            RTCStatsEntry::Codec(s) => &s.stats,
            RTCStatsEntry::DataChannel(s) => &s.stats,
            RTCStatsEntry::InboundRtp(s) => &s.received_rtp_stream_stats.rtp_stream_stats.stats,
            RTCStatsEntry::OutboundRtp(s) => &s.sent_rtp_stream_stats.rtp_stream_stats.stats,
            RTCStatsEntry::RemoteInboundRtp(s) => {
                &s.received_rtp_stream_stats.rtp_stream_stats.stats
            }
            RTCStatsEntry::RemoteOutboundRtp(s) => {
                &s.sent_rtp_stream_stats.rtp_stream_stats.stats
            }
            RTCStatsEntry::AudioSource(s) => &s.media_source_stats.stats,
            RTCStatsEntry::VideoSource(s) => &s.media_source_stats.stats,
            RTCStatsEntry::Empty => return None,
        };
        Some(stats)
    }

    /// Returns the stats type for this entry, `None` for the empty entry.
    pub fn stats_type(&self) -> Option<RTCStatsType> {
        self.stats().map(|s| s.typ)
    }

    /// Returns the unique ID for this stats entry, `"NA"` for the empty entry.
    pub fn id(&self) -> &str {
        self.stats()
            .map_or(shared::util::NOT_AVAILABLE, |s| s.id.as_str())
    }

    /// Returns the normalized timestamp, `-1.0` when unknown.
    pub fn timestamp(&self) -> f64 {
        self.stats().map_or(NUMERIC_SENTINEL, |s| s.timestamp)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RTCStatsEntry::Empty)
    }

    /// Returns the RTP stream base fields of any RTP stream variant.
    pub fn rtp_stream(&self) -> Option<&RTCRtpStreamStats> {
        match self {
            RTCStatsEntry::InboundRtp(s) => Some(&s.received_rtp_stream_stats.rtp_stream_stats),
            RTCStatsEntry::OutboundRtp(s) => Some(&s.sent_rtp_stream_stats.rtp_stream_stats),
            RTCStatsEntry::RemoteInboundRtp(s) => {
                Some(&s.received_rtp_stream_stats.rtp_stream_stats)
            }
            RTCStatsEntry::RemoteOutboundRtp(s) => Some(&s.sent_rtp_stream_stats.rtp_stream_stats),
            _ => None,
        }
    }

    /// Returns the media source base fields of an audio or video source.
    pub fn media_source(&self) -> Option<&RTCMediaSourceStats> {
        match self {
            RTCStatsEntry::AudioSource(s) => Some(&s.media_source_stats),
            RTCStatsEntry::VideoSource(s) => Some(&s.media_source_stats),
            _ => None,
        }
    }

    pub fn as_candidate_pair(&self) -> Option<&RTCIceCandidatePairStats> {
        match self {
            RTCStatsEntry::IceCandidatePair(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_candidate(&self) -> Option<&RTCIceCandidateStats> {
        match self {
            RTCStatsEntry::LocalCandidate(s) | RTCStatsEntry::RemoteCandidate(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_inbound_rtp(&self) -> Option<&RTCInboundRtpStreamStats> {
        match self {
            RTCStatsEntry::InboundRtp(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_outbound_rtp(&self) -> Option<&RTCOutboundRtpStreamStats> {
        match self {
            RTCStatsEntry::OutboundRtp(s) => Some(s),
            _ => None,
        }
    }
}

/// Classifies one raw getStats() record.
///
/// Returns `None` when the record has no `type` or one this crate does not
/// know about. Field-level problems never fail classification: unreadable
/// numbers become `-1.0` and missing text becomes `"NA"`.
pub fn classify(raw: &RawRecord) -> Option<RTCStatsEntry> {
    let record = StatsRecord::new(raw);
    let type_name = record.text("type");
    let Some(typ) = RTCStatsType::from_type_str(&type_name) else {
        log::debug!("dropping stats record {} of unknown type {type_name}", record.text("id"));
        return None;
    };

    let entry = match typ {
        RTCStatsType::Codec => RTCStatsEntry::Codec(RTCCodecStats::from_record(&record)),
        RTCStatsType::Track | RTCStatsType::MediaSource => match media_kind(&record) {
            RTCMediaKind::Video => {
                RTCStatsEntry::VideoSource(RTCVideoSourceStats::from_record(&record, typ))
            }
            _ => RTCStatsEntry::AudioSource(RTCAudioSourceStats::from_record(&record, typ)),
        },
        RTCStatsType::InboundRTP => {
            RTCStatsEntry::InboundRtp(RTCInboundRtpStreamStats::from_record(&record))
        }
        RTCStatsType::OutboundRTP => {
            RTCStatsEntry::OutboundRtp(RTCOutboundRtpStreamStats::from_record(&record))
        }
        RTCStatsType::RemoteInboundRTP => {
            RTCStatsEntry::RemoteInboundRtp(RTCRemoteInboundRtpStreamStats::from_record(&record))
        }
        RTCStatsType::RemoteOutboundRTP => {
            RTCStatsEntry::RemoteOutboundRtp(RTCRemoteOutboundRtpStreamStats::from_record(&record))
        }
        RTCStatsType::PeerConnection => {
            RTCStatsEntry::PeerConnection(RTCPeerConnectionStats::from_record(&record))
        }
        RTCStatsType::DataChannel => {
            RTCStatsEntry::DataChannel(RTCDataChannelStats::from_record(&record))
        }
        RTCStatsType::Transport => {
            RTCStatsEntry::Transport(RTCTransportStats::from_record(&record))
        }
        RTCStatsType::CandidatePair => {
            RTCStatsEntry::IceCandidatePair(RTCIceCandidatePairStats::from_record(&record))
        }
        RTCStatsType::LocalCandidate => {
            RTCStatsEntry::LocalCandidate(RTCIceCandidateStats::from_record(&record, typ))
        }
        RTCStatsType::RemoteCandidate => {
            RTCStatsEntry::RemoteCandidate(RTCIceCandidateStats::from_record(&record, typ))
        }
        RTCStatsType::Certificate => {
            RTCStatsEntry::Certificate(RTCCertificateStats::from_record(&record))
        }
    };

    Some(entry)
}

/// Media kind of a `track`/`media-source` record, inferred from its fields
/// when `kind` is absent.
fn media_kind(record: &StatsRecord<'_>) -> RTCMediaKind {
    match record.kind() {
        RTCMediaKind::Unspecified if record.has_any(&VIDEO_ONLY_FIELDS) => RTCMediaKind::Video,
        RTCMediaKind::Unspecified => RTCMediaKind::Audio,
        kind => kind,
    }
}
