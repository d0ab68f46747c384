use super::*;
use serde_json::json;

fn records(values: Vec<Value>) -> Vec<RawRecord> {
    values
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

fn pair(id: &str, state: &str, bytes_sent: u64, bytes_received: u64) -> Value {
    json!({
        "id": id,
        "type": "candidate-pair",
        "timestamp": 1536834943435u64,
        "state": state,
        "bytesSent": bytes_sent,
        "bytesReceived": bytes_received,
        "remoteCandidateId": format!("R-{id}")
    })
}

#[test]
fn test_build_groups_by_type() {
    let raw = records(vec![
        json!({"id": "C1", "type": "codec", "timestamp": 1536834943435u64}),
        json!({"id": "C2", "type": "codec", "timestamp": 1536834943435u64}),
        json!({"id": "T1", "type": "transport", "timestamp": 1536834943435u64}),
        json!({"id": "X1", "type": "media-playout", "timestamp": 1536834943435u64}),
    ]);

    let snapshot = RTCStatsSnapshot::build("pc0", &raw, &[]);
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.peer_connection(), "pc0");
    assert_eq!(snapshot.timestamp(), 1536834943435.0);
    let ids: Vec<&str> = snapshot.get(RTCStatsType::Codec).iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["C1", "C2"]);
    assert!(snapshot.get(RTCStatsType::InboundRTP).is_empty());
}

#[test]
fn test_build_timestamp_in_reported_order() {
    let raw = records(vec![
        json!({"id": "P1", "type": "candidate-pair", "timestamp": 1536834943000u64}),
        json!({"id": "C1", "type": "codec", "timestamp": 1536834944000u64}),
    ]);

    let snapshot = RTCStatsSnapshot::build("pc0", &raw, &[]);
    assert_eq!(snapshot.timestamp(), 1536834943000.0);
}

#[test]
fn test_build_type_filter() {
    let raw = records(vec![
        json!({"id": "C1", "type": "codec"}),
        json!({"id": "P1", "type": "candidate-pair"}),
        json!({"id": "I1", "type": "inbound-rtp"}),
    ]);
    let filter = vec!["candidate-pair".to_owned(), "inbound-rtp".to_owned()];

    let snapshot = RTCStatsSnapshot::build("pc0", &raw, &filter);
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.get(RTCStatsType::Codec).is_empty());
}

#[test]
fn test_build_without_timestamps_uses_wall_clock() {
    let raw = records(vec![json!({"id": "C1", "type": "codec"})]);
    let before = unix_millis_now();
    let snapshot = RTCStatsSnapshot::build("pc0", &raw, &[]);
    assert!(snapshot.timestamp() >= before);
}

#[test]
fn test_successful_candidate_pair() {
    let raw = records(vec![
        pair("P1", "succeeded", 0, 0),
        pair("P2", "succeeded", 500, 0),
        pair("P3", "succeeded", 900, 900),
    ]);
    let snapshot = RTCStatsSnapshot::build("pc0", &raw, &[]);
    assert_eq!(snapshot.successful_candidate_pair().id(), "P2");
}

#[test]
fn test_successful_candidate_pair_in_progress() {
    let mut in_progress = pair("P2", "in-progress", 0, 0);
    in_progress["currentRoundTripTime"] = json!(0.012);
    let raw = records(vec![pair("P1", "failed", 100, 100), in_progress]);

    let snapshot = RTCStatsSnapshot::build("pc0", &raw, &[]);
    assert_eq!(snapshot.successful_candidate_pair().id(), "P2");
}

#[test]
fn test_successful_candidate_pair_prefers_traffic() {
    let mut in_progress = pair("P1", "in-progress", 0, 0);
    in_progress["currentRoundTripTime"] = json!(0.012);
    let raw = records(vec![in_progress, pair("P2", "succeeded", 500, 0)]);

    let snapshot = RTCStatsSnapshot::build("pc0", &raw, &[]);
    assert_eq!(snapshot.successful_candidate_pair().id(), "P2");
}

#[test]
fn test_successful_candidate_pair_none() {
    let raw = records(vec![
        pair("P1", "succeeded", 0, 0),
        pair("P2", "in-progress", 10, 10),
        pair("P3", "waiting", 10, 10),
    ]);
    let snapshot = RTCStatsSnapshot::build("pc0", &raw, &[]);
    assert!(snapshot.successful_candidate_pair().is_empty());

    let empty = RTCStatsSnapshot::build("pc0", &[], &[]);
    assert!(empty.successful_candidate_pair().is_empty());
}

#[test]
fn test_track_correlation() {
    let raw = records(vec![
        json!({"id": "T1", "type": "track", "kind": "video", "framesReceived": 42}),
        json!({"id": "T2", "type": "track", "kind": "audio", "audioLevel": 0.25}),
        json!({"id": "I1", "type": "inbound-rtp", "kind": "video", "trackId": "T1"}),
        json!({"id": "I2", "type": "inbound-rtp", "kind": "audio", "trackId": "T2"}),
        json!({"id": "I3", "type": "inbound-rtp", "kind": "video", "trackId": "T9"}),
        json!({"id": "I4", "type": "inbound-rtp", "kind": "video"}),
    ]);
    let snapshot = RTCStatsSnapshot::build("pc0", &raw, &[]);

    let video = snapshot.track_for("I1").unwrap();
    assert_eq!(video.id(), "T1");
    assert_eq!(video.frames_received(), 42.0);
    assert_eq!(video.audio_level(), NUMERIC_SENTINEL);

    let audio = snapshot.track_for("I2").unwrap();
    assert_eq!(audio.audio_level(), 0.25);
    assert_eq!(audio.frames_received(), NUMERIC_SENTINEL);

    assert!(snapshot.track_for("I3").is_none());
    assert!(snapshot.track_for("I4").is_none());
}

#[test]
fn test_track_correlation_media_source() {
    let raw = records(vec![
        json!({"id": "M1", "type": "media-source", "kind": "video", "trackIdentifier": "cam", "framesPerSecond": 30}),
        json!({"id": "O1", "type": "outbound-rtp", "kind": "video", "mediaSourceId": "M1"}),
        json!({"id": "I1", "type": "inbound-rtp", "kind": "video", "trackIdentifier": "cam"}),
    ]);
    let snapshot = RTCStatsSnapshot::build("pc0", &raw, &[]);

    assert_eq!(snapshot.track_for("O1").unwrap().frames_per_second(), 30.0);
    assert_eq!(snapshot.track_for("I1").unwrap().id(), "M1");
}

#[test]
fn test_remote_ip() {
    let raw = records(vec![
        pair("P1", "succeeded", 500, 500),
        json!({"id": "R-P0", "type": "remote-candidate", "address": "10.0.0.1"}),
        json!({"id": "R-P1", "type": "remote-candidate", "ip": "10.0.0.2"}),
    ]);
    let snapshot = RTCStatsSnapshot::build("pc0", &raw, &[]);
    assert_eq!(snapshot.remote_ip(), "10.0.0.2");

    let raw = records(vec![json!({"id": "R1", "type": "remote-candidate", "address": "10.0.0.3"})]);
    assert_eq!(RTCStatsSnapshot::build("pc0", &raw, &[]).remote_ip(), "10.0.0.3");

    assert_eq!(RTCStatsSnapshot::build("pc0", &[], &[]).remote_ip(), NOT_AVAILABLE);
}

#[test]
fn test_to_json() {
    let raw = records(vec![
        json!({"id": "C1", "type": "codec", "timestamp": 1536834943435u64, "mimeType": "audio/opus", "clockRate": 48000}),
        json!({"id": "P1", "type": "peer-connection", "timestamp": 1536834943435u64, "dataChannelsOpened": 1}),
    ]);
    let json = RTCStatsSnapshot::build("pc0", &raw, &[]).to_json().unwrap();

    assert_eq!(json["codec"]["C1"]["mimeType"], "audio/opus");
    assert_eq!(json["codec"]["C1"]["clockRate"], 48000.0);
    assert_eq!(json["codec"]["C1"]["type"], "codec");
    assert_eq!(json["peer-connection"]["P1"]["dataChannelsOpened"], 1.0);
    assert_eq!(json["peer-connection"]["P1"]["dataChannelsClosed"], -1.0);
}
