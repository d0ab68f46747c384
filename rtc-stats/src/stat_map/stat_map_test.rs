use super::*;

#[test]
fn test_stat_map_order() {
    let mut map = RTCStatMap::new();
    assert!(map.local_pc_stats().is_none());

    map.insert(RTCStatsTimeSeries::new("local"));
    map.insert(RTCStatsTimeSeries::new("remote"));
    map.insert(RTCStatsTimeSeries::new("local").with_region_id("us-east"));

    assert_eq!(map.len(), 2);
    assert_eq!(map.labels().collect::<Vec<_>>(), vec!["local", "remote"]);
    let local = map.local_pc_stats().unwrap();
    assert_eq!(local.peer_connection(), "local");
    assert_eq!(local.region_id(), "us-east");
    assert!(map.contains("remote"));
    assert!(map.get("missing").is_none());
}

#[test]
fn test_stat_map_tags() {
    let map = RTCStatMap::new();
    assert_eq!(map.region_id(), NOT_CONFIGURED);
    assert_eq!(map.network_profile(), NOT_CONFIGURED);
    assert_eq!(map.itinerary(), NOT_CONFIGURED);

    let map = RTCStatMap::new()
        .with_region_id("ap-south")
        .with_network_profile("wifi")
        .with_itinerary("step-3");
    assert_eq!(map.region_id(), "ap-south");
    assert_eq!(map.network_profile(), "wifi");
    assert_eq!(map.itinerary(), "step-3");
}

#[test]
fn test_stat_map_to_json() {
    let mut map = RTCStatMap::new();
    map.insert(RTCStatsTimeSeries::new("pc0"));
    let json = map.to_json().unwrap();
    assert_eq!(json["pc0"]["peerConnection"], "pc0");
    assert!(json["pc0"]["snapshots"].as_array().unwrap().is_empty());
}
