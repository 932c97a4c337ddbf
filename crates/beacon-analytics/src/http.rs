// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP transport posting events to a collector.
//!
//! Sends one JSON envelope per event to `{api_host}/api/event`. Fire and
//! forget from the pipeline's point of view: a failed POST is reported as
//! an error to the dispatcher, which logs and drops it. No retries.

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use beacon_analytics_core::{Properties, EVENT_PAGE_VIEW};

use crate::error::{AnalyticsError, Result};
use crate::transport::Transport;

/// JSON envelope for a single event.
#[derive(Debug, Serialize)]
struct EventEnvelope<'a> {
	event_id: Uuid,
	name: &'a str,
	domain: &'a str,
	timestamp: chrono::DateTime<Utc>,
	props: Properties,
}

/// Transport that POSTs events to an HTTP collector.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: reqwest::Client,
	endpoint: String,
	site_domain: String,
}

impl HttpTransport {
	/// Creates a transport targeting `{api_host}/api/event`.
	pub fn new(api_host: impl Into<String>, site_domain: impl Into<String>) -> Self {
		let api_host = api_host.into();
		Self {
			client: reqwest::Client::new(),
			endpoint: format!("{}/api/event", api_host.trim_end_matches('/')),
			site_domain: site_domain.into(),
		}
	}

	/// The endpoint events are posted to.
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	async fn post(&self, name: &str, props: Properties) -> Result<()> {
		let envelope = EventEnvelope {
			event_id: Uuid::new_v4(),
			name,
			domain: &self.site_domain,
			timestamp: Utc::now(),
			props,
		};

		let response = self.client.post(&self.endpoint).json(&envelope).send().await?;

		let status = response.status();
		if !status.is_success() {
			let message = response.text().await.unwrap_or_default();
			return Err(AnalyticsError::ServerError {
				status: status.as_u16(),
				message,
			});
		}

		Ok(())
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn page(&self, properties: Properties) -> Result<()> {
		self.post(EVENT_PAGE_VIEW, properties).await
	}

	async fn track(&self, event_name: &str, properties: Properties) -> Result<()> {
		self.post(event_name, properties).await
	}
}
