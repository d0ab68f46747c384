//! One getStats() capture for one peer connection.

#[cfg(test)]
mod snapshot_test;

use crate::classifier::{EMPTY, RTCStatsEntry, classify};
use crate::stats::ice_candidate_pair::RTCIceCandidatePairStats;
use crate::stats::media::audio_source::RTCAudioSourceStats;
use crate::stats::media::video_source::RTCVideoSourceStats;
use crate::stats::rtp_stream::received::inbound::RTCInboundRtpStreamStats;
use crate::stats::rtp_stream::sent::outbound::RTCOutboundRtpStreamStats;
use crate::stats::{RTCStatsType, RawRecord};
use serde_json::{Map, Value};
use shared::error::Result;
use shared::time::unix_millis_now;
use shared::util::{NOT_AVAILABLE, NUMERIC_SENTINEL, is_available, is_sentinel};
use std::collections::{BTreeMap, HashMap};

/// A media source as seen from the stream it is linked to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RTCMediaSourceRef<'a> {
    Audio(&'a RTCAudioSourceStats),
    Video(&'a RTCVideoSourceStats),
}

impl<'a> RTCMediaSourceRef<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            RTCMediaSourceRef::Audio(s) => &s.media_source_stats.stats.id,
            RTCMediaSourceRef::Video(s) => &s.media_source_stats.stats.id,
        }
    }

    pub fn frames_received(&self) -> f64 {
        match self {
            RTCMediaSourceRef::Audio(s) => s.frames_received,
            RTCMediaSourceRef::Video(s) => s.frames_received,
        }
    }

    pub fn frames_sent(&self) -> f64 {
        match self {
            RTCMediaSourceRef::Audio(s) => s.frames_sent,
            RTCMediaSourceRef::Video(s) => s.frames_sent,
        }
    }

    /// Audio level, `-1.0` for video.
    pub fn audio_level(&self) -> f64 {
        match self {
            RTCMediaSourceRef::Audio(s) => s.audio_level,
            RTCMediaSourceRef::Video(_) => NUMERIC_SENTINEL,
        }
    }

    /// Frame rate, `-1.0` for audio.
    pub fn frames_per_second(&self) -> f64 {
        match self {
            RTCMediaSourceRef::Audio(_) => NUMERIC_SENTINEL,
            RTCMediaSourceRef::Video(s) => s.frames_per_second,
        }
    }
}

/// The classified stats of one capture instant.
///
/// Stats are grouped by type and keep the order the browser reported them
/// in. RTP streams are linked to the media source they reference; the link
/// is a position into the snapshot's own `track`/`media-source` lists.
#[derive(Debug, Clone, PartialEq)]
pub struct RTCStatsSnapshot {
    timestamp: f64,
    peer_connection: String,
    stats: BTreeMap<RTCStatsType, Vec<RTCStatsEntry>>,
    track_links: HashMap<String, (RTCStatsType, usize)>,
}

impl RTCStatsSnapshot {
    /// Classifies `records` into a snapshot labelled `peer_connection`.
    ///
    /// When `selected_stats` is not empty, records whose `type` is not one
    /// of its entries are skipped before classification.
    pub fn build(peer_connection: &str, records: &[RawRecord], selected_stats: &[String]) -> Self {
        let mut stats: BTreeMap<RTCStatsType, Vec<RTCStatsEntry>> = BTreeMap::new();
        let mut timestamp = None;
        let mut skipped = 0usize;

        for raw in records {
            if !selected_stats.is_empty() {
                let typ = raw.get("type").and_then(Value::as_str).unwrap_or_default();
                if !selected_stats.iter().any(|s| s == typ) {
                    skipped += 1;
                    continue;
                }
            }
            if let Some(entry) = classify(raw) {
                if let Some(typ) = entry.stats_type() {
                    if timestamp.is_none() && !is_sentinel(entry.timestamp()) {
                        timestamp = Some(entry.timestamp());
                    }
                    stats.entry(typ).or_default().push(entry);
                }
            }
        }
        let timestamp = timestamp.unwrap_or_else(unix_millis_now);

        let mut snapshot = Self {
            timestamp,
            peer_connection: peer_connection.to_owned(),
            stats,
            track_links: HashMap::new(),
        };
        snapshot.link_tracks();

        log::trace!(
            "{peer_connection}: built snapshot of {} stats ({skipped} filtered out)",
            snapshot.len()
        );
        snapshot
    }

    fn link_tracks(&mut self) {
        let mut links = HashMap::new();
        let streams = self
            .iter_type(RTCStatsType::InboundRTP)
            .chain(self.iter_type(RTCStatsType::OutboundRTP))
            .filter_map(RTCStatsEntry::rtp_stream);

        for stream in streams {
            let source = [RTCStatsType::Track, RTCStatsType::MediaSource]
                .into_iter()
                .find_map(|typ| {
                    self.iter_type(typ)
                        .position(|e| {
                            e.media_source()
                                .is_some_and(|s| s.is_referenced_by(&stream.track_id))
                        })
                        .map(|index| (typ, index))
                });
            match source {
                Some(link) => {
                    links.insert(stream.stats.id.clone(), link);
                }
                None => log::trace!(
                    "{}: no media source for stream {} (track {})",
                    self.peer_connection,
                    stream.stats.id,
                    stream.track_id
                ),
            }
        }

        self.track_links = links;
    }

    /// Epoch milliseconds of this capture.
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn peer_connection(&self) -> &str {
        &self.peer_connection
    }

    /// Returns the stats of type `typ` in reported order.
    pub fn get(&self, typ: RTCStatsType) -> &[RTCStatsEntry] {
        self.stats.get(&typ).map(Vec::as_slice).unwrap_or_default()
    }

    fn iter_type(&self, typ: RTCStatsType) -> impl Iterator<Item = &RTCStatsEntry> {
        self.get(typ).iter()
    }

    /// Returns an iterator over all stats, grouped by type.
    pub fn iter(&self) -> impl Iterator<Item = &RTCStatsEntry> {
        self.stats.values().flatten()
    }

    /// Number of classified stats.
    pub fn len(&self) -> usize {
        self.stats.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn inbound_rtp_streams(&self) -> impl Iterator<Item = &RTCInboundRtpStreamStats> {
        self.iter_type(RTCStatsType::InboundRTP)
            .filter_map(RTCStatsEntry::as_inbound_rtp)
    }

    pub fn outbound_rtp_streams(&self) -> impl Iterator<Item = &RTCOutboundRtpStreamStats> {
        self.iter_type(RTCStatsType::OutboundRTP)
            .filter_map(RTCStatsEntry::as_outbound_rtp)
    }

    pub fn candidate_pairs(&self) -> impl Iterator<Item = &RTCIceCandidatePairStats> {
        self.iter_type(RTCStatsType::CandidatePair)
            .filter_map(RTCStatsEntry::as_candidate_pair)
    }

    /// Returns the candidate pair carrying the connection.
    ///
    /// The first pair in reported order that
    /// [`carries_traffic`](RTCIceCandidatePairStats::carries_traffic) wins;
    /// only when there is none, the first one that
    /// [`is_measuring`](RTCIceCandidatePairStats::is_measuring).
    /// [`RTCStatsEntry::Empty`] when none qualifies.
    pub fn successful_candidate_pair(&self) -> &RTCStatsEntry {
        let find = |rule: fn(&RTCIceCandidatePairStats) -> bool| {
            self.iter_type(RTCStatsType::CandidatePair)
                .find(|e| e.as_candidate_pair().is_some_and(rule))
        };
        find(RTCIceCandidatePairStats::carries_traffic)
            .or_else(|| find(RTCIceCandidatePairStats::is_measuring))
            .unwrap_or(&EMPTY)
    }

    /// Returns the media source linked to the RTP stream `stream_id`.
    pub fn track_for(&self, stream_id: &str) -> Option<RTCMediaSourceRef<'_>> {
        let (typ, index) = self.track_links.get(stream_id)?;
        match self.get(*typ).get(*index)? {
            RTCStatsEntry::AudioSource(s) => Some(RTCMediaSourceRef::Audio(s)),
            RTCStatsEntry::VideoSource(s) => Some(RTCMediaSourceRef::Video(s)),
            _ => None,
        }
    }

    /// Returns the address of the remote end of the connection.
    ///
    /// The remote candidate of the successful pair is preferred, then the
    /// first remote candidate. `"NA"` when there is none.
    pub fn remote_ip(&self) -> String {
        let remotes: Vec<_> = self
            .iter_type(RTCStatsType::RemoteCandidate)
            .filter_map(RTCStatsEntry::as_candidate)
            .collect();

        let selected = self
            .successful_candidate_pair()
            .as_candidate_pair()
            .map(|p| p.remote_candidate_id.as_str());
        let candidate = selected
            .and_then(|id| remotes.iter().find(|c| c.stats.id == id))
            .or(remotes.first());

        candidate
            .map(|c| c.address.clone())
            .filter(|address| is_available(address))
            .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
    }

    /// Returns the snapshot as `{type: {id: stat}}`.
    pub fn to_json(&self) -> Result<Value> {
        let mut by_type = Map::new();
        for (typ, entries) in &self.stats {
            let mut by_id = Map::new();
            for entry in entries {
                by_id.insert(entry.id().to_owned(), serde_json::to_value(entry)?);
            }
            by_type.insert(typ.to_string(), Value::Object(by_id));
        }
        Ok(Value::Object(by_type))
    }
}
