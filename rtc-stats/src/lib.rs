//! # RTC Stats - getStats() collection and summarization
//!
//! This crate turns the raw `RTCPeerConnection.getStats()` reports a browser
//! automation harness captures into typed statistics, time series and a
//! summary of derived metrics (bitrate, packet loss, jitter, frame rate and
//! round trip time) for interoperability test reports.
//!
//! The crate never talks to a browser. Running `getStats()` is left to a
//! [`StatsCapture`](collector::StatsCapture) implementation, any
//! `FnMut(&str) -> Result<Vec<RawRecord>>` closure included, that returns the
//! raw records of one peer connection.
//!
//! ## Quick Start
//!
//! ```
//! use rtc_stats::collector::StatsCollector;
//! use rtc_stats::stats::RawRecord;
//! use rtc_stats::summary::summarize;
//! use serde_json::json;
//! use std::time::Duration;
//!
//! # fn example() -> rtc_stats::shared::error::Result<()> {
//! let mut bytes_sent = 0u64;
//! let mut now = 1536834943000u64;
//! let capture = move |_pc: &str| -> rtc_stats::shared::error::Result<Vec<RawRecord>> {
//!     bytes_sent += 125_000;
//!     now += 1000;
//!     let record = json!({
//!         "id": "RTCOutboundRTPVideoStream_1",
//!         "type": "outbound-rtp",
//!         "kind": "video",
//!         "timestamp": now,
//!         "bytesSent": bytes_sent
//!     });
//!     Ok(record.as_object().into_iter().cloned().collect())
//! };
//!
//! let mut collector = StatsCollector::new(capture);
//! let series = collector.collect_over_time(
//!     "window.pc",
//!     Duration::from_secs(2),
//!     Duration::from_secs(1),
//!     &[],
//! )?;
//!
//! let summary = summarize(&series, false);
//! println!("{}", summary.to_json()?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`stats`] - Typed W3C statistics
//! - [`classifier`] - Raw record to typed statistic
//! - [`snapshot`] - One capture, with candidate pair and track lookups
//! - [`series`] / [`stat_map`] - Captures over time, per peer connection
//! - [`collector`] - Capture scheduling and configuration
//! - [`summary`] - Derived metrics

#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub use shared;

pub mod classifier;
pub mod collector;
pub mod series;
pub mod snapshot;
pub mod stat_map;
pub mod stats;
pub mod summary;
