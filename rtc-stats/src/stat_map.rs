//! Time series of every peer connection of one test step.

#[cfg(test)]
mod stat_map_test;

use crate::series::{NOT_CONFIGURED, RTCStatsTimeSeries};
use serde_json::{Map, Value};
use shared::error::Result;
use std::collections::HashMap;

/// Peer connection label to time series, in collection order.
#[derive(Debug, Clone, PartialEq)]
pub struct RTCStatMap {
    entries: HashMap<String, RTCStatsTimeSeries>,
    order: Vec<String>,
    region_id: String,
    network_profile: String,
    itinerary: String,
}

impl Default for RTCStatMap {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: vec![],
            region_id: NOT_CONFIGURED.to_owned(),
            network_profile: NOT_CONFIGURED.to_owned(),
            itinerary: NOT_CONFIGURED.to_owned(),
        }
    }
}

impl RTCStatMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region_id(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = region_id.into();
        self
    }

    pub fn with_network_profile(mut self, network_profile: impl Into<String>) -> Self {
        self.network_profile = network_profile.into();
        self
    }

    pub fn with_itinerary(mut self, itinerary: impl Into<String>) -> Self {
        self.itinerary = itinerary.into();
        self
    }

    /// Inserts `series` under its peer connection label, replacing any
    /// series with the same label but keeping its position.
    pub fn insert(&mut self, series: RTCStatsTimeSeries) {
        let label = series.peer_connection().to_owned();
        if self.entries.insert(label.clone(), series).is_none() {
            self.order.push(label);
        }
    }

    pub fn get(&self, peer_connection: &str) -> Option<&RTCStatsTimeSeries> {
        self.entries.get(peer_connection)
    }

    pub fn contains(&self, peer_connection: &str) -> bool {
        self.entries.contains_key(peer_connection)
    }

    /// Returns an iterator over all series in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &RTCStatsTimeSeries> {
        self.order.iter().filter_map(|label| self.entries.get(label))
    }

    /// Returns an iterator over all labels in collection order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The series of the local peer connection, i.e. the first one collected.
    pub fn local_pc_stats(&self) -> Option<&RTCStatsTimeSeries> {
        self.iter().next()
    }

    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    pub fn network_profile(&self) -> &str {
        &self.network_profile
    }

    pub fn itinerary(&self) -> &str {
        &self.itinerary
    }

    /// Returns `{label: series}`.
    pub fn to_json(&self) -> Result<Value> {
        let mut map = Map::new();
        for series in self.iter() {
            map.insert(series.peer_connection().to_owned(), series.to_json()?);
        }
        Ok(Value::Object(map))
    }
}
