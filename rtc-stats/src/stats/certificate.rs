use super::{RTCStats, RTCStatsType, StatsRecord};
use serde::{Deserialize, Serialize};

/// A DTLS certificate, local or remote.
///
/// # W3C Reference
///
/// See [RTCCertificateStats](https://www.w3.org/TR/webrtc-stats/#certificatestats-dict*)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCCertificateStats {
    #[serde(flatten)]
    pub stats: RTCStats,

    pub fingerprint: String,
    /// e.g. "sha-256".
    pub fingerprint_algorithm: String,
    pub base64_certificate: String,
    /// "NA" for a self-signed certificate.
    pub issuer_certificate_id: String,
}

impl RTCCertificateStats {
    pub(crate) fn from_record(record: &StatsRecord<'_>) -> Self {
        Self {
            stats: record.stats(RTCStatsType::Certificate),
            fingerprint: record.text("fingerprint"),
            fingerprint_algorithm: record.text("fingerprintAlgorithm"),
            base64_certificate: record.text("base64Certificate"),
            issuer_certificate_id: record.text("issuerCertificateId"),
        }
    }
}
