use super::{RTCStats, RTCStatsType, StatsRecord};
use serde::{Deserialize, Serialize};

/// Statistics for the transport carrying the peer connection's media and data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCTransportStats {
    #[serde(flatten)]
    pub stats: RTCStats,

    pub bytes_sent: f64,
    pub bytes_received: f64,
    /// References an [`RTCIceCandidatePairStats`](super::ice_candidate_pair::RTCIceCandidatePairStats) object.
    pub selected_candidate_pair_id: String,
    pub local_certificate_id: String,
    pub remote_certificate_id: String,
    pub dtls_state: String,
}

impl RTCTransportStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>) -> Self {
        Self {
            stats: record.stats(RTCStatsType::Transport),
            bytes_sent: record.number("bytesSent"),
            bytes_received: record.number("bytesReceived"),
            selected_candidate_pair_id: record.text("selectedCandidatePairId"),
            local_certificate_id: record.text("localCertificateId"),
            remote_certificate_id: record.text("remoteCertificateId"),
            dtls_state: record.text("dtlsState"),
        }
    }
}
