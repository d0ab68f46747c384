//! Repeated getStats() capture.
//!
//! The collector never talks to a browser itself. It drives a
//! [`StatsCapture`] implementation, which runs `getStats()` for one peer
//! connection and hands back the raw records, at the configured cadence.


pub mod cancellation;
pub mod config;

use crate::series::RTCStatsTimeSeries;
use crate::snapshot::RTCStatsSnapshot;
use crate::stat_map::RTCStatMap;
use crate::stats::RawRecord;
use cancellation::CancellationToken;
use config::GetStatsConfig;
use shared::error::{Error, Result};
use std::time::Duration;

/// Time one capture is assumed to take. It is subtracted from the interval
/// so that ticks stay roughly `interval` apart.
pub const DEFAULT_CAPTURE_COST: Duration = Duration::from_secs(1);

/// Runs `getStats()` on a peer connection and returns its raw records.
pub trait StatsCapture {
    /// Captures the current stats of `peer_connection`.
    ///
    /// Implementations report failures as [`Error::ErrCaptureFailed`].
    fn capture(&mut self, peer_connection: &str) -> Result<Vec<RawRecord>>;
}

impl<F> StatsCapture for F
where
    F: FnMut(&str) -> Result<Vec<RawRecord>>,
{
    fn capture(&mut self, peer_connection: &str) -> Result<Vec<RawRecord>> {
        self(peer_connection)
    }
}

/// Drives a [`StatsCapture`] to build snapshots, time series and stat maps.
pub struct StatsCollector<C> {
    capture: C,
    capture_cost: Duration,
    cancellation: Option<CancellationToken>,
}

impl<C: StatsCapture> StatsCollector<C> {
    pub fn new(capture: C) -> Self {
        Self {
            capture,
            capture_cost: DEFAULT_CAPTURE_COST,
            cancellation: None,
        }
    }

    /// Overrides the assumed duration of one capture.
    pub fn with_capture_cost(mut self, capture_cost: Duration) -> Self {
        self.capture_cost = capture_cost;
        self
    }

    /// Makes waits between ticks interruptible through `token`.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Returns the wrapped capture.
    pub fn into_inner(self) -> C {
        self.capture
    }

    /// Captures `peer_connection` once.
    ///
    /// Capture failures are returned as is and never retried.
    pub fn capture_once(
        &mut self,
        peer_connection: &str,
        selected_stats: &[String],
    ) -> Result<RTCStatsSnapshot> {
        let records = self.capture.capture(peer_connection).map_err(|err| {
            log::error!("{peer_connection}: getStats capture failed: {err}");
            err
        })?;
        Ok(RTCStatsSnapshot::build(
            peer_connection,
            &records,
            selected_stats,
        ))
    }

    /// Captures `peer_connection` every `interval` for `duration`.
    ///
    /// That is `ceil(duration / interval) + 1` captures, the first one
    /// immediately. Between two captures the collector waits `interval` minus
    /// the capture cost, or not at all when the capture cost is larger.
    pub fn collect_over_time(
        &mut self,
        peer_connection: &str,
        duration: Duration,
        interval: Duration,
        selected_stats: &[String],
    ) -> Result<RTCStatsTimeSeries> {
        let mut series = RTCStatsTimeSeries::new(peer_connection);
        self.collect_into(&mut series, duration, interval, selected_stats)?;
        Ok(series)
    }

    fn collect_into(
        &mut self,
        series: &mut RTCStatsTimeSeries,
        duration: Duration,
        interval: Duration,
        selected_stats: &[String],
    ) -> Result<()> {
        if interval.is_zero() {
            return Err(Error::ErrZeroCollectionInterval);
        }

        let peer_connection = series.peer_connection().to_owned();
        let ticks = tick_count(duration, interval);
        let wait = interval.saturating_sub(self.capture_cost);
        log::info!(
            "{peer_connection}: collecting {ticks} stats snapshots every {}ms",
            interval.as_millis()
        );

        for tick in 0..ticks {
            if tick > 0 {
                self.wait(wait)?;
            }
            let snapshot = self.capture_once(&peer_connection, selected_stats)?;
            log::trace!(
                "{peer_connection}: tick {}/{ticks}, {} stats",
                tick + 1,
                snapshot.len()
            );
            series.push(snapshot);
        }

        log::info!(
            "{peer_connection}: collected {} stats snapshots",
            series.len()
        );
        Ok(())
    }

    /// Collects every peer connection of `config`, one after the other.
    pub fn collect_map(&mut self, config: &GetStatsConfig) -> Result<RTCStatMap> {
        config.validate()?;

        let mut map = RTCStatMap::new()
            .with_region_id(config.region_id.clone())
            .with_network_profile(config.network_profile.clone());

        for peer_connection in &config.peer_connections {
            let mut series = RTCStatsTimeSeries::new(peer_connection.as_str())
                .with_region_id(config.region_id.clone())
                .with_network_profile(config.network_profile.clone());
            self.collect_into(
                &mut series,
                config.collection_time(),
                config.collection_interval(),
                &config.selected_stats,
            )?;
            map.insert(series);
        }

        Ok(map)
    }

    fn wait(&self, wait: Duration) -> Result<()> {
        match &self.cancellation {
            Some(token) => {
                if token.wait_timeout(wait) {
                    log::info!("stats collection cancelled");
                    return Err(Error::ErrCollectionCancelled);
                }
            }
            None => {
                if !wait.is_zero() {
                    std::thread::sleep(wait);
                }
            }
        }
        Ok(())
    }
}

/// Number of captures for a collection of `duration` at `interval`.
pub fn tick_count(duration: Duration, interval: Duration) -> u64 {
    if interval.is_zero() {
        return 1;
    }
    let ticks = duration.as_millis().div_ceil(interval.as_millis()) + 1;
    u64::try_from(ticks).unwrap_or(u64::MAX)
}
