// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The transport seam between the pipeline and a collector.
//!
//! The pipeline is agnostic to how events reach a backend: anything
//! implementing [`Transport`] can be wired into the client, and multiple
//! transports receive every permitted event. Delivery guarantees, retries
//! and batching are a transport concern, not a pipeline one.

use std::sync::Arc;

use async_trait::async_trait;

use beacon_analytics_core::Properties;

use crate::error::Result;

/// Delivers enriched events to a collector.
#[async_trait]
pub trait Transport: Send + Sync {
	/// Delivers a page-view event.
	async fn page(&self, properties: Properties) -> Result<()>;

	/// Delivers a named event.
	async fn track(&self, event_name: &str, properties: Properties) -> Result<()>;
}

/// Type alias for a shared transport.
pub type SharedTransport = Arc<dyn Transport>;

/// A transport that discards every event.
///
/// Used when no collector is configured; also handy in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTransport;

#[async_trait]
impl Transport for NoOpTransport {
	async fn page(&self, _properties: Properties) -> Result<()> {
		Ok(())
	}

	async fn track(&self, _event_name: &str, _properties: Properties) -> Result<()> {
		Ok(())
	}
}
