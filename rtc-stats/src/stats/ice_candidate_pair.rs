//! `candidate-pair` records and the pick of the pair carrying the call.

use super::{RTCStats, RTCStatsType, StatsRecord};
use ::serde::{Deserialize, Serialize};
use std::fmt;

/// ICE connectivity check state of a candidate pair.
#[derive(Default, PartialEq, Eq, Debug, Copy, Clone, Serialize, Deserialize)]
pub enum RTCStatsIceCandidatePairState {
    /// Absent, or not a W3C state.
    #[default]
    #[serde(rename = "NA")]
    Unspecified,
    #[serde(rename = "frozen")]
    Frozen,
    #[serde(rename = "waiting")]
    Waiting,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "failed")]
    Failed,
    #[serde(rename = "succeeded")]
    Succeeded,
}

impl From<&str> for RTCStatsIceCandidatePairState {
    fn from(raw: &str) -> Self {
        match raw {
            "frozen" => RTCStatsIceCandidatePairState::Frozen,
            "waiting" => RTCStatsIceCandidatePairState::Waiting,
            "in-progress" => RTCStatsIceCandidatePairState::InProgress,
            "failed" => RTCStatsIceCandidatePairState::Failed,
            "succeeded" => RTCStatsIceCandidatePairState::Succeeded,
            _ => RTCStatsIceCandidatePairState::Unspecified,
        }
    }
}

impl fmt::Display for RTCStatsIceCandidatePairState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCStatsIceCandidatePairState::Unspecified => "NA",
            RTCStatsIceCandidatePairState::Frozen => "frozen",
            RTCStatsIceCandidatePairState::Waiting => "waiting",
            RTCStatsIceCandidatePairState::InProgress => "in-progress",
            RTCStatsIceCandidatePairState::Failed => "failed",
            RTCStatsIceCandidatePairState::Succeeded => "succeeded",
        };
        write!(f, "{s}")
    }
}

/// A local/remote candidate combination and the traffic it carried.
///
/// # W3C Reference
///
/// See [RTCIceCandidatePairStats](https://www.w3.org/TR/webrtc-stats/#candidatepair-dict*)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCIceCandidatePairStats {
    #[serde(flatten)]
    pub stats: RTCStats,

    pub transport_id: String,
    pub local_candidate_id: String,
    pub remote_candidate_id: String,
    pub state: RTCStatsIceCandidatePairState,
    pub priority: f64,

    /// Kept as reported, browsers disagree on its type.
    pub nominated: String,

    pub bytes_sent: f64,
    pub bytes_received: f64,

    /// Seconds, summed over every STUN response.
    pub total_round_trip_time: f64,

    /// Seconds, latest STUN response only.
    pub current_round_trip_time: f64,
}

impl RTCIceCandidatePairStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>) -> Self {
        Self {
            stats: record.stats(RTCStatsType::CandidatePair),
            transport_id: record.text("transportId"),
            local_candidate_id: record.text("localCandidateId"),
            remote_candidate_id: record.text("remoteCandidateId"),
            state: RTCStatsIceCandidatePairState::from(record.text("state").as_str()),
            priority: record.number("priority"),
            nominated: record.text("nominated"),
            bytes_sent: record.number("bytesSent"),
            bytes_received: record.number("bytesReceived"),
            total_round_trip_time: record.number("totalRoundTripTime"),
            current_round_trip_time: record.number("currentRoundTripTime"),
        }
    }

    /// Returns true when the pair `succeeded` and moved bytes in either
    /// direction.
    pub fn carries_traffic(&self) -> bool {
        self.state == RTCStatsIceCandidatePairState::Succeeded
            && (self.bytes_received > 0.0 || self.bytes_sent > 0.0)
    }

    /// Returns true when the pair is still `in-progress` but already measured
    /// a round trip.
    pub fn is_measuring(&self) -> bool {
        self.state == RTCStatsIceCandidatePairState::InProgress
            && self.current_round_trip_time > 0.0
    }

    /// Returns true if this pair may be the one carrying the connection.
    ///
    /// [`carries_traffic`](Self::carries_traffic) ranks above
    /// [`is_measuring`](Self::is_measuring) when picking among several pairs.
    pub fn is_successful(&self) -> bool {
        self.carries_traffic() || self.is_measuring()
    }
}
