use criterion::{Criterion, criterion_group, criterion_main};
use rtc_stats::classifier::classify;
use rtc_stats::series::RTCStatsTimeSeries;
use rtc_stats::snapshot::RTCStatsSnapshot;
use rtc_stats::stats::RawRecord;
use rtc_stats::summary::summarize;
use serde_json::{Value, json};
use std::hint::black_box;

fn report(tick: u64) -> Vec<RawRecord> {
    let timestamp = 1536834943000 + tick * 1000;
    let mut records = vec![];
    for stream in 0..4u64 {
        let kind = if stream % 2 == 0 { "audio" } else { "video" };
        records.push(json!({
            "id": format!("RTCMediaStreamTrack_{stream}"),
            "type": "track",
            "timestamp": timestamp,
            "kind": kind,
            "framesReceived": 30 * tick,
            "framesPerSecond": 30,
            "audioLevel": 0.4
        }));
        records.push(json!({
            "id": format!("RTCInboundRTPStream_{stream}"),
            "type": "inbound-rtp",
            "timestamp": timestamp,
            "kind": kind,
            "trackId": format!("RTCMediaStreamTrack_{stream}"),
            "bytesReceived": 50_000 * tick,
            "packetsReceived": 100 * tick,
            "packetsLost": tick,
            "jitter": 0.012
        }));
        records.push(json!({
            "id": format!("RTCOutboundRTPStream_{stream}"),
            "type": "outbound-rtp",
            "timestamp": timestamp,
            "kind": kind,
            "bytesSent": 40_000 * tick,
            "packetsSent": 90 * tick
        }));
    }
    for pair in 0..3u64 {
        let state = if pair == 2 { "succeeded" } else { "failed" };
        records.push(json!({
            "id": format!("RTCIceCandidatePair_{pair}"),
            "type": "candidate-pair",
            "timestamp": timestamp,
            "state": state,
            "bytesSent": 1000 * tick,
            "totalRoundTripTime": 0.02 * tick as f64,
            "currentRoundTripTime": 0.02
        }));
    }

    records
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

fn benchmark_classify(c: &mut Criterion) {
    let records = report(1);

    c.bench_function("classify report", |b| {
        b.iter(|| {
            for record in &records {
                let _ = black_box(classify(record));
            }
        })
    });

    c.bench_function("RTCStatsSnapshot build", |b| {
        b.iter(|| {
            let _ = black_box(RTCStatsSnapshot::build("pc", &records, &[]));
        })
    });
}

fn benchmark_summarize(c: &mut Criterion) {
    let mut series = RTCStatsTimeSeries::new("pc");
    for tick in 0..60 {
        series.push(RTCStatsSnapshot::build("pc", &report(tick), &[]));
    }

    c.bench_function("summarize 60 snapshots", |b| {
        b.iter(|| {
            let _ = black_box(summarize(&series, false));
        })
    });

    c.bench_function("summarize 60 snapshots fully detailed", |b| {
        b.iter(|| {
            let _ = summarize(&series, true).to_json().unwrap();
        })
    });
}

criterion_group!(benches, benchmark_classify, benchmark_summarize);
criterion_main!(benches);
