//! WebRTC Statistics types.
//!
//! This module contains the typed form of the records a browser returns from
//! `RTCPeerConnection.getStats()`. Every type is populated once, from a raw
//! record, and never changes afterwards. Missing or malformed fields become
//! `"NA"` for display fields and `-1.0` for numeric fields.

use ::serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::time::timestamp_millis;
use shared::util::{NUMERIC_SENTINEL, is_available, is_sentinel, value_to_f64, value_to_string};
use std::fmt;

pub mod certificate;
pub mod codec;
pub mod data_channel;
pub mod ice_candidate;
pub mod ice_candidate_pair;
pub mod media;
pub mod peer_connection;
pub mod rtp_stream;
pub mod transport;

/// One raw stats record as handed over by the capture collaborator.
pub type RawRecord = Map<String, Value>;

/// The type of statistics object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RTCStatsType {
    #[serde(rename = "codec")]
    Codec,
    #[serde(rename = "track")]
    Track,
    #[serde(rename = "media-source")]
    MediaSource,
    #[serde(rename = "inbound-rtp")]
    InboundRTP,
    #[serde(rename = "outbound-rtp")]
    OutboundRTP,
    #[serde(rename = "remote-inbound-rtp")]
    RemoteInboundRTP,
    #[serde(rename = "remote-outbound-rtp")]
    RemoteOutboundRTP,
    #[serde(rename = "peer-connection")]
    PeerConnection,
    #[serde(rename = "data-channel")]
    DataChannel,
    #[serde(rename = "transport")]
    Transport,
    #[serde(rename = "candidate-pair")]
    CandidatePair,
    #[serde(rename = "local-candidate")]
    LocalCandidate,
    #[serde(rename = "remote-candidate")]
    RemoteCandidate,
    #[serde(rename = "certificate")]
    Certificate,
}

impl RTCStatsType {
    /// Every type the classifier knows about.
    pub const ALL: [RTCStatsType; 14] = [
        RTCStatsType::Codec,
        RTCStatsType::Track,
        RTCStatsType::MediaSource,
        RTCStatsType::InboundRTP,
        RTCStatsType::OutboundRTP,
        RTCStatsType::RemoteInboundRTP,
        RTCStatsType::RemoteOutboundRTP,
        RTCStatsType::PeerConnection,
        RTCStatsType::DataChannel,
        RTCStatsType::Transport,
        RTCStatsType::CandidatePair,
        RTCStatsType::LocalCandidate,
        RTCStatsType::RemoteCandidate,
        RTCStatsType::Certificate,
    ];

    /// Returns the `type` string used by getStats() for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RTCStatsType::Codec => "codec",
            RTCStatsType::Track => "track",
            RTCStatsType::MediaSource => "media-source",
            RTCStatsType::InboundRTP => "inbound-rtp",
            RTCStatsType::OutboundRTP => "outbound-rtp",
            RTCStatsType::RemoteInboundRTP => "remote-inbound-rtp",
            RTCStatsType::RemoteOutboundRTP => "remote-outbound-rtp",
            RTCStatsType::PeerConnection => "peer-connection",
            RTCStatsType::DataChannel => "data-channel",
            RTCStatsType::Transport => "transport",
            RTCStatsType::CandidatePair => "candidate-pair",
            RTCStatsType::LocalCandidate => "local-candidate",
            RTCStatsType::RemoteCandidate => "remote-candidate",
            RTCStatsType::Certificate => "certificate",
        }
    }

    /// Parses a getStats() `type` string, `None` for types this crate does
    /// not classify.
    pub fn from_type_str(typ: &str) -> Option<Self> {
        RTCStatsType::ALL.into_iter().find(|t| t.as_str() == typ)
    }
}

impl fmt::Display for RTCStatsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unique identifier for a statistics object.
pub type RTCStatsId = String;

/// Base statistics object containing common fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RTCStats {
    /// Epoch milliseconds, `-1.0` when the record had no usable timestamp.
    pub timestamp: f64,
    #[serde(rename = "type")]
    pub typ: RTCStatsType,
    pub id: RTCStatsId,
}

/// The media kind of a stream or a track.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RTCMediaKind {
    #[default]
    #[serde(rename = "NA")]
    Unspecified,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "video")]
    Video,
}

impl From<&str> for RTCMediaKind {
    fn from(raw: &str) -> Self {
        match raw {
            "audio" => RTCMediaKind::Audio,
            "video" => RTCMediaKind::Video,
            _ => RTCMediaKind::Unspecified,
        }
    }
}

impl fmt::Display for RTCMediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCMediaKind::Audio => "audio",
            RTCMediaKind::Video => "video",
            RTCMediaKind::Unspecified => "NA",
        };
        write!(f, "{s}")
    }
}

/// Read-only view over a raw record used while building a typed stat.
///
/// Field names are tried in order so that the current W3C names and the
/// legacy names older browsers still report map to the same field.
pub(crate) struct StatsRecord<'a> {
    raw: &'a RawRecord,
}

impl<'a> StatsRecord<'a> {
    pub(crate) fn new(raw: &'a RawRecord) -> Self {
        Self { raw }
    }

    pub(crate) fn stats(&self, typ: RTCStatsType) -> RTCStats {
        RTCStats {
            timestamp: timestamp_millis(self.raw.get("timestamp")),
            typ,
            id: self.text("id"),
        }
    }

    pub(crate) fn text(&self, name: &str) -> String {
        value_to_string(self.raw.get(name))
    }

    pub(crate) fn text_or(&self, names: &[&str]) -> String {
        names
            .iter()
            .map(|name| self.text(name))
            .find(|s| is_available(s))
            .unwrap_or_else(|| self.text(names[0]))
    }

    pub(crate) fn number(&self, name: &str) -> f64 {
        value_to_f64(self.raw.get(name))
    }

    pub(crate) fn number_or(&self, names: &[&str]) -> f64 {
        names
            .iter()
            .map(|name| self.number(name))
            .find(|v| !is_sentinel(*v))
            .unwrap_or(NUMERIC_SENTINEL)
    }

    pub(crate) fn kind(&self) -> RTCMediaKind {
        RTCMediaKind::from(self.text_or(&["kind", "mediaType"]).as_str())
    }

    pub(crate) fn has_any(&self, names: &[&str]) -> bool {
        names
            .iter()
            .any(|name| self.raw.get(*name).is_some_and(|v| !v.is_null()))
    }
}
