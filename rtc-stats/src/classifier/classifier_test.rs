use super::*;
use crate::stats::ice_candidate_pair::RTCStatsIceCandidatePairState;
use serde_json::json;

fn raw(value: serde_json::Value) -> RawRecord {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("not a record: {other}"),
    }
}

#[test]
fn test_classify_every_known_type() {
    let records: Vec<RawRecord> = RTCStatsType::ALL
        .iter()
        .enumerate()
        .map(|(i, typ)| {
            raw(json!({
                "id": format!("S{i}"),
                "type": typ.as_str(),
                "timestamp": 1536834943435u64
            }))
        })
        .collect();

    let entries: Vec<RTCStatsEntry> = records.iter().filter_map(classify).collect();
    assert_eq!(entries.len(), RTCStatsType::ALL.len());

    for (entry, typ) in entries.iter().zip(RTCStatsType::ALL) {
        assert_eq!(entry.stats_type(), Some(typ));
        assert_eq!(entry.timestamp(), 1536834943435.0);
        assert!(!entry.is_empty());
    }
}

#[test]
fn test_classify_unknown_type() {
    assert!(classify(&raw(json!({"id": "X", "type": "media-playout"}))).is_none());
    assert!(classify(&raw(json!({"id": "X"}))).is_none());
}

#[test]
fn test_classify_lenient_fields() {
    let entry = classify(&raw(json!({
        "id": "RTCInboundRTPVideoStream_1",
        "type": "inbound-rtp",
        "timestamp": "1.536834943435905E12",
        "mediaType": "video",
        "bytesReceived": "not a number",
        "packetsReceived": "120",
        "jitter": null
    })))
    .unwrap();

    let inbound = entry.as_inbound_rtp().unwrap();
    let received = &inbound.received_rtp_stream_stats;
    assert_eq!(received.rtp_stream_stats.stats.timestamp, 1536834943435.0);
    assert_eq!(received.rtp_stream_stats.kind, RTCMediaKind::Video);
    assert_eq!(received.bytes_received, NUMERIC_SENTINEL);
    assert_eq!(received.packets_received, 120.0);
    assert_eq!(received.jitter, NUMERIC_SENTINEL);
    assert_eq!(received.rtp_stream_stats.codec_id, "NA");
    assert_eq!(inbound.frames_per_second, NUMERIC_SENTINEL);
}

#[test]
fn test_classify_legacy_aliases() {
    let codec = classify(&raw(json!({"id": "C1", "type": "codec", "codec": "VP8"}))).unwrap();
    match codec {
        RTCStatsEntry::Codec(c) => assert_eq!(c.mime_type, "VP8"),
        other => panic!("unexpected {other:?}"),
    }

    let candidate = classify(&raw(json!({
        "id": "R1",
        "type": "remote-candidate",
        "ip": "10.0.0.7",
        "port": 50000
    })))
    .unwrap();
    let candidate = candidate.as_candidate().unwrap();
    assert!(candidate.is_remote());
    assert_eq!(candidate.address, "10.0.0.7");
    assert_eq!(candidate.port, 50000.0);

    let outbound = classify(&raw(json!({
        "id": "O1",
        "type": "outbound-rtp",
        "kind": "audio",
        "mediaSourceId": "M1"
    })))
    .unwrap();
    let rtp = outbound.rtp_stream().unwrap();
    assert_eq!(rtp.kind, RTCMediaKind::Audio);
    assert_eq!(rtp.track_id, "M1");
}

#[test]
fn test_classify_media_source_kind() {
    let tests = vec![
        (json!({"id": "T1", "type": "track", "kind": "video"}), true),
        (json!({"id": "T2", "type": "track", "kind": "audio", "framesSent": 3}), false),
        (json!({"id": "T3", "type": "track", "frameWidth": 640}), true),
        (json!({"id": "T4", "type": "media-source", "audioLevel": 0.2}), false),
    ];

    for (record, is_video) in tests {
        let entry = classify(&raw(record)).unwrap();
        assert_eq!(
            matches!(entry, RTCStatsEntry::VideoSource(_)),
            is_video,
            "{}",
            entry.id()
        );
        assert!(entry.media_source().is_some());
    }
}

#[test]
fn test_classify_candidate_pair() {
    let entry = classify(&raw(json!({
        "id": "P1",
        "type": "candidate-pair",
        "state": "succeeded",
        "bytesSent": 500,
        "totalRoundTripTime": 0.05
    })))
    .unwrap();

    let pair = entry.as_candidate_pair().unwrap();
    assert_eq!(pair.state, RTCStatsIceCandidatePairState::Succeeded);
    assert_eq!(pair.bytes_received, NUMERIC_SENTINEL);
    assert!(pair.is_successful());
}

#[test]
fn test_empty_entry() {
    assert!(EMPTY.is_empty());
    assert_eq!(EMPTY.id(), "NA");
    assert_eq!(EMPTY.timestamp(), NUMERIC_SENTINEL);
    assert_eq!(EMPTY.stats_type(), None);
}
