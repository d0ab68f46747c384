use rtc_stats::collector::config::GetStatsConfigBuilder;
use rtc_stats::collector::{StatsCapture, StatsCollector};
use rtc_stats::shared::error::{Error, Result};
use rtc_stats::stats::RawRecord;
use rtc_stats::summary::metric::Metric;
use rtc_stats::summary::summarize;
use serde_json::{Value, json};
use std::time::Duration;

const T0: u64 = 1536834943000;

/// Replays one getStats() report per call, as a browser session would
/// return them second after second.
struct ScriptedBrowser {
    tick: u64,
    fail_at: Option<u64>,
}

impl ScriptedBrowser {
    fn new() -> Self {
        Self {
            tick: 0,
            fail_at: None,
        }
    }

    fn report(&self, peer_connection: &str) -> Vec<Value> {
        let t = self.tick;
        // legacy reports use exponential timestamps and old field names
        let timestamp = format!("{}E12", (T0 + t * 1000) as f64 / 1e12);
        vec![
            json!({
                "id": "RTCCodec_video_Inbound_96",
                "type": "codec",
                "timestamp": timestamp,
                "codec": "VP8",
                "payloadType": 96,
                "clockRate": 90000
            }),
            json!({
                "id": "RTCMediaStreamTrack_receiver_2",
                "type": "track",
                "timestamp": timestamp,
                "kind": "video",
                "remoteSource": true,
                "framesReceived": 30 * (t + 1),
                "framesPerSecond": 30
            }),
            json!({
                "id": "RTCMediaStreamTrack_receiver_1",
                "type": "track",
                "timestamp": timestamp,
                "kind": "audio",
                "remoteSource": true,
                "audioLevel": 0.5
            }),
            json!({
                "id": "RTCInboundRTPVideoStream_2",
                "type": "inbound-rtp",
                "timestamp": timestamp,
                "mediaType": "video",
                "ssrc": 2,
                "codecId": "RTCCodec_video_Inbound_96",
                "trackId": "RTCMediaStreamTrack_receiver_2",
                "bytesReceived": 100_000 * (t + 1),
                "packetsReceived": 100 * (t + 1),
                "packetsLost": 5 * (t + 1)
            }),
            json!({
                "id": "RTCInboundRTPAudioStream_1",
                "type": "inbound-rtp",
                "timestamp": timestamp,
                "mediaType": "audio",
                "ssrc": 1,
                "trackId": "RTCMediaStreamTrack_receiver_1",
                "bytesReceived": 10_000 * (t + 1),
                "packetsReceived": 50 * (t + 1),
                "packetsLost": 0,
                "jitter": 0.5
            }),
            json!({
                "id": "RTCOutboundRTPVideoStream_3",
                "type": "outbound-rtp",
                "timestamp": timestamp,
                "mediaType": "video",
                "ssrc": 3,
                "bytesSent": 1000 + 4000 * t,
                "packetsSent": 10 * (t + 1)
            }),
            json!({
                "id": "RTCIceCandidatePair_a_b",
                "type": "candidate-pair",
                "timestamp": timestamp,
                "state": "succeeded",
                "bytesSent": 1000 + 4000 * t,
                "bytesReceived": 110_000 * (t + 1),
                "totalRoundTripTime": 0.25 * (t + 1) as f64,
                "currentRoundTripTime": 0.25,
                "remoteCandidateId": "RTCIceCandidate_b"
            }),
            json!({
                "id": "RTCIceCandidate_b",
                "type": "remote-candidate",
                "timestamp": timestamp,
                "ip": "203.0.113.9",
                "port": 40000
            }),
            json!({
                "id": format!("RTCPeerConnection_{peer_connection}"),
                "type": "peer-connection",
                "timestamp": timestamp,
                "dataChannelsOpened": 0
            }),
            json!({"id": "ignored", "type": "media-playout", "timestamp": timestamp}),
        ]
    }
}

impl StatsCapture for ScriptedBrowser {
    fn capture(&mut self, peer_connection: &str) -> Result<Vec<RawRecord>> {
        if self.fail_at == Some(self.tick) {
            return Err(Error::capture_failed(peer_connection, "no such session"));
        }
        let records = self
            .report(peer_connection)
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        self.tick += 1;
        Ok(records)
    }
}

fn collect(duration: Duration) -> rtc_stats::series::RTCStatsTimeSeries {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut collector = StatsCollector::new(ScriptedBrowser::new());
    collector
        .collect_over_time("window.pc", duration, Duration::from_secs(1), &[])
        .unwrap()
}

#[test]
fn test_collect_and_summarize() {
    let series = collect(Duration::from_secs(2));
    assert_eq!(series.len(), 3);

    let first = series.first().unwrap();
    assert_eq!(first.timestamp(), T0 as f64);
    // the media-playout record is not classified
    assert_eq!(first.len(), 9);

    let summary = summarize(&series, false);
    assert_eq!(summary.starting_timestamp, Metric::Value(T0 as f64));
    assert_eq!(summary.ending_timestamp, Metric::Value((T0 + 2000) as f64));
    assert_eq!(summary.total_inbound_bytes, Metric::Value(330_000.0));
    assert_eq!(summary.total_inbound_video_bytes, Metric::Value(300_000.0));
    assert_eq!(summary.total_inbound_audio_bytes, Metric::Value(30_000.0));
    assert_eq!(summary.total_outbound_video_bytes, Metric::Value(9000.0));
    assert_eq!(summary.total_round_trip_time, Metric::Value(1500.0));
    assert_eq!(summary.average_current_round_trip_time, Metric::Value(250.0));

    let outbound = &summary.outbound.video[0];
    assert_eq!(outbound.average_bitrate, Metric::Value(32000.0));

    let video = &summary.inbound.video[0];
    assert_eq!(video.stream_id, "RTCInboundRTPVideoStream_2");
    assert_eq!(video.codec_id, "RTCCodec_video_Inbound_96");
    assert_eq!(video.packet_loss_percentage, Some(Metric::Value(5.0)));
    assert_eq!(video.frames_received, Some(Metric::Value(90.0)));
    assert_eq!(video.average_frame_rate, Some(Metric::Value(30.0)));
    assert_eq!(video.average_bitrate, Metric::Value(800_000.0));

    let audio = &summary.inbound.audio[0];
    assert_eq!(audio.average_jitter, Some(Metric::Value(500.0)));
    assert_eq!(audio.audio_level, Some(Metric::Value(0.5)));
    assert_eq!(audio.packet_loss_percentage, Some(Metric::Value(0.0)));
}

#[test]
fn test_fully_detailed_summary_json() {
    let series = collect(Duration::from_secs(1));
    let json = summarize(&series, true).to_json().unwrap();

    assert_eq!(json["Remote IP"], "203.0.113.9");
    assert_eq!(json["candidatePairs"].as_array().map(Vec::len), Some(2));
    assert_eq!(
        json["inbound"]["video"][0]["samples"].as_array().map(Vec::len),
        Some(2)
    );
    assert_eq!(json["inbound"]["video"][0]["framesReceived"], json!(60));
}

#[test]
fn test_single_capture_bitrate_not_available() {
    let series = collect(Duration::ZERO);
    assert_eq!(series.len(), 1);

    let json = summarize(&series, false).to_json().unwrap();
    assert_eq!(json["outbound"]["video"][0]["averageBitrate"], "NA (1000)");
}

#[test]
fn test_capture_failure_aborts_collection() {
    let mut browser = ScriptedBrowser::new();
    browser.fail_at = Some(2);
    let mut collector = StatsCollector::new(browser);

    let err = collector
        .collect_over_time("window.pc", Duration::from_secs(5), Duration::from_secs(1), &[])
        .unwrap_err();
    assert_eq!(err, Error::capture_failed("window.pc", "no such session"));
    assert_eq!(collector.into_inner().tick, 2);
}

#[test]
fn test_collect_map_with_selected_stats() {
    let config = GetStatsConfigBuilder::new()
        .with_peer_connections(vec!["pc0".to_owned(), "pc1".to_owned()])
        .with_stats_collection_time(Duration::from_secs(1))
        .with_stats_collection_interval(Duration::from_secs(1))
        .with_selected_stats(vec!["candidate-pair".to_owned()])
        .with_network_profile("lte".to_owned())
        .build()
        .unwrap();

    let mut collector = StatsCollector::new(ScriptedBrowser::new());
    let map = collector.collect_map(&config).unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.network_profile(), "lte");
    let local = map.local_pc_stats().unwrap();
    assert_eq!(local.peer_connection(), "pc0");
    assert_eq!(local.network_profile(), "lte");
    assert!(local.iter().all(|s| s.len() == 1));
    assert!(!local.first().unwrap().successful_candidate_pair().is_empty());

    let summary = summarize(map.get("pc1").unwrap(), false);
    assert!(summary.inbound.video.is_empty());
    assert_eq!(summary.total_inbound_bytes, Metric::MISSING);
}
