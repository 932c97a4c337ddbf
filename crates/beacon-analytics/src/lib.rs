// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Beacon analytics SDK: a consent-aware event tracking client.
//!
//! Every tracking call flows through the same pipeline: the caller's
//! property bag is stripped of sensitive fields, the current global
//! context is merged on top, consent is checked at the moment of
//! dispatch, and transport failures are logged and swallowed. No tracking
//! operation can throw or block the host application.
//!
//! # Example
//!
//! ```no_run
//! use beacon_analytics::{AnalyticsClient, ConsentState, Properties};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AnalyticsClient::builder()
//!         .enabled(true)
//!         .site_domain("app.example.com")
//!         .api_host("https://collect.example.com")
//!         .build();
//!
//!     client.set_context(Properties::new().insert("user_id", "u1"));
//!
//!     client.page(None).await;
//!     client.track_search("global_search", "rust analytics").await;
//!
//!     // The user withdraws consent; everything below is suppressed.
//!     client.set_consent(Some(ConsentState::withdrawn()));
//!     client.track("hidden", None).await;
//! }
//! ```

mod client;
mod config;
mod dispatch;
mod enrich;
mod error;
mod http;
mod transport;

pub use client::{AnalyticsClient, AnalyticsClientBuilder};
pub use config::{AnalyticsConfig, ENV_API_HOST, ENV_SITE_DOMAIN, ENV_TRACKING_ENABLED};
pub use dispatch::{DispatchGuard, Dispatcher};
pub use enrich::Enricher;
pub use error::{AnalyticsError, Result};
pub use http::HttpTransport;
pub use transport::{NoOpTransport, SharedTransport, Transport};

// Re-export core types for convenience
pub use beacon_analytics_core::{
	truncate_chars, CanonicalEvent, ConsentGate, ConsentState, ContextStore, DenyList, Properties,
	DEFAULT_DENIED_KEYS, EVENT_ITEM_OPENED, EVENT_PAGE_VIEW, EVENT_SEARCH, ITEM_LABEL_MAX_CHARS,
	SEARCH_LABEL_MAX_CHARS,
};
