// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The analytics client facade.
//!
//! Four tracking operations, all infallible: they normalize their
//! arguments into a canonical event, enrich it, and hand it to the
//! guarded dispatcher. Under withdrawn consent they are silent no-ops;
//! under transport failure they log and return normally. Host code never
//! needs to branch on whether tracking is active.

use std::sync::Arc;

use tracing::debug;

use beacon_analytics_core::{
	truncate_chars, CanonicalEvent, ConsentGate, ConsentState, ContextStore, DenyList, Properties,
	EVENT_ITEM_OPENED, EVENT_SEARCH, ITEM_LABEL_MAX_CHARS, SEARCH_LABEL_MAX_CHARS,
};

use crate::config::AnalyticsConfig;
use crate::dispatch::{DispatchGuard, Dispatcher};
use crate::enrich::Enricher;
use crate::http::HttpTransport;
use crate::transport::SharedTransport;

/// An analytics client bound to shared consent and context state.
///
/// # Example
///
/// ```no_run
/// use beacon_analytics::{AnalyticsClient, Properties};
///
/// # async fn run() {
/// let client = AnalyticsClient::builder()
///     .enabled(true)
///     .site_domain("app.example.com")
///     .api_host("https://collect.example.com")
///     .build();
///
/// client.set_context(Properties::new().insert("user_id", "u1"));
/// client.track_search("global_search", "rust analytics").await;
/// # }
/// ```
pub struct AnalyticsClient {
	consent: Arc<ConsentGate>,
	context: Arc<ContextStore>,
	// None when tracking is disabled at configuration time; the four
	// tracking operations then return before touching the pipeline.
	pipeline: Option<Pipeline>,
}

struct Pipeline {
	enricher: Enricher,
	dispatcher: Dispatcher,
}

impl AnalyticsClient {
	/// Starts building a client.
	pub fn builder() -> AnalyticsClientBuilder {
		AnalyticsClientBuilder::default()
	}

	/// Builds a client from the process environment with no overrides.
	pub fn from_env() -> Self {
		Self::builder().build()
	}

	// Consent passthroughs.

	/// Replaces consent wholesale; `None` resolves to withdrawn.
	pub fn set_consent(&self, next: Option<ConsentState>) {
		self.consent.set_consent(next);
	}

	/// Returns the current consent snapshot.
	pub fn get_consent(&self) -> ConsentState {
		self.consent.get_consent()
	}

	/// Grants analytics consent.
	pub fn enable_analytics(&self) {
		self.consent.enable();
	}

	/// Withdraws analytics consent.
	pub fn disable_analytics(&self) {
		self.consent.disable();
	}

	// Context passthroughs.

	/// Shallow-merges `partial` into the global context.
	pub fn set_context(&self, partial: Properties) {
		self.context.set(partial);
	}

	/// Clears the global context.
	pub fn clear_context(&self) {
		self.context.clear();
	}

	/// The consent gate shared with this client.
	pub fn consent_gate(&self) -> Arc<ConsentGate> {
		Arc::clone(&self.consent)
	}

	/// The context store shared with this client.
	pub fn context_store(&self) -> Arc<ContextStore> {
		Arc::clone(&self.context)
	}

	// Tracking operations.

	/// Tracks a page view.
	pub async fn page(&self, data: Option<Properties>) {
		self
			.dispatch(CanonicalEvent::page_view(data.unwrap_or_default()))
			.await;
	}

	/// Tracks a custom named event.
	pub async fn track(&self, name: &str, props: Option<Properties>) {
		self
			.dispatch(CanonicalEvent::new(name, props.unwrap_or_default()))
			.await;
	}

	/// Tracks a search, truncating the term to 256 characters.
	pub async fn track_search(&self, feature: &str, term: impl ToString) {
		let label = truncate_chars(&term.to_string(), SEARCH_LABEL_MAX_CHARS);
		let props = Properties::new().insert("feature", feature).insert("label", label);
		self.dispatch(CanonicalEvent::new(EVENT_SEARCH, props)).await;
	}

	/// Tracks an item being opened, truncating its name to 128 characters.
	pub async fn track_item_opened(&self, feature: &str, id: impl ToString, name: impl ToString) {
		let props = Properties::new()
			.insert("feature", feature)
			.insert("id", id.to_string())
			.insert("label", truncate_chars(&name.to_string(), ITEM_LABEL_MAX_CHARS));
		self.dispatch(CanonicalEvent::new(EVENT_ITEM_OPENED, props)).await;
	}

	async fn dispatch(&self, event: CanonicalEvent) {
		let Some(pipeline) = &self.pipeline else {
			return;
		};
		let event = CanonicalEvent::new(event.name, pipeline.enricher.enrich(event.properties));
		pipeline.dispatcher.dispatch(event).await;
	}
}

/// Builder for [`AnalyticsClient`].
///
/// Overrides take precedence over environment-sourced defaults; anything
/// left unset falls back to [`AnalyticsConfig::from_env`].
#[derive(Default)]
pub struct AnalyticsClientBuilder {
	enabled: Option<bool>,
	site_domain: Option<String>,
	api_host: Option<String>,
	deny_list: Option<DenyList>,
	consent: Option<Arc<ConsentGate>>,
	context: Option<Arc<ContextStore>>,
	primary_transport: Option<SharedTransport>,
	plugins: Vec<SharedTransport>,
	extra_guards: Vec<Arc<dyn DispatchGuard>>,
}

impl AnalyticsClientBuilder {
	/// Overrides the environment tracking toggle.
	pub fn enabled(mut self, enabled: bool) -> Self {
		self.enabled = Some(enabled);
		self
	}

	/// Overrides the destination site domain.
	pub fn site_domain(mut self, domain: impl Into<String>) -> Self {
		self.site_domain = Some(domain.into());
		self
	}

	/// Overrides the collector API host.
	pub fn api_host(mut self, host: impl Into<String>) -> Self {
		self.api_host = Some(host.into());
		self
	}

	/// Replaces the default deny list.
	pub fn deny_list(mut self, deny_list: DenyList) -> Self {
		self.deny_list = Some(deny_list);
		self
	}

	/// Shares an existing consent gate instead of creating one.
	pub fn consent_gate(mut self, gate: Arc<ConsentGate>) -> Self {
		self.consent = Some(gate);
		self
	}

	/// Shares an existing context store instead of creating one.
	pub fn context_store(mut self, store: Arc<ContextStore>) -> Self {
		self.context = Some(store);
		self
	}

	/// Replaces the default HTTP transport with a custom one.
	pub fn transport(mut self, transport: SharedTransport) -> Self {
		self.primary_transport = Some(transport);
		self
	}

	/// Appends an additional transport; all transports receive every
	/// permitted event.
	pub fn plugin(mut self, transport: SharedTransport) -> Self {
		self.plugins.push(transport);
		self
	}

	/// Appends a guard after the consent gate in the dispatch chain.
	pub fn guard(mut self, guard: Arc<dyn DispatchGuard>) -> Self {
		self.extra_guards.push(guard);
		self
	}

	/// Builds the client. Never fails: missing configuration resolves to
	/// a disabled client whose tracking operations are no-ops.
	pub fn build(self) -> AnalyticsClient {
		let env = AnalyticsConfig::from_env();
		let enabled = self.enabled.unwrap_or(env.enabled);
		let site_domain = self.site_domain.unwrap_or(env.site_domain);
		let api_host = self.api_host.unwrap_or(env.api_host);

		let consent = self.consent.unwrap_or_default();
		let context = self.context.unwrap_or_default();

		if !enabled {
			debug!("Analytics tracking disabled; client will no-op");
			return AnalyticsClient {
				consent,
				context,
				pipeline: None,
			};
		}

		let primary = self
			.primary_transport
			.unwrap_or_else(|| Arc::new(HttpTransport::new(api_host, site_domain)));
		let mut transports = vec![primary];
		transports.extend(self.plugins);

		let mut guards: Vec<Arc<dyn DispatchGuard>> = vec![Arc::clone(&consent) as _];
		guards.extend(self.extra_guards);

		let enricher = Enricher::new(Arc::clone(&context), self.deny_list.unwrap_or_default());

		AnalyticsClient {
			consent,
			context,
			pipeline: Some(Pipeline {
				enricher,
				dispatcher: Dispatcher::new(guards, transports),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::transport::testing::RecordingTransport;
	use serde_json::Value;

	fn client_with(transport: Arc<RecordingTransport>) -> AnalyticsClient {
		AnalyticsClient::builder()
			.enabled(true)
			.transport(transport)
			.build()
	}

	#[tokio::test]
	async fn test_track_item_opened_end_to_end() {
		let transport = Arc::new(RecordingTransport::new());
		let client = client_with(transport.clone());
		client.set_context(Properties::new().insert("user_id", "u1"));

		client.track_item_opened("product", "prod_001", "MacBook Pro").await;

		let calls = transport.recorded().await;
		assert_eq!(calls.len(), 1);
		let (name, props) = &calls[0];
		assert_eq!(name, "ItemOpened");
		assert_eq!(props.get("user_id"), Some(&Value::String("u1".to_string())));
		assert_eq!(props.get("feature"), Some(&Value::String("product".to_string())));
		assert_eq!(props.get("id"), Some(&Value::String("prod_001".to_string())));
		assert_eq!(props.get("label"), Some(&Value::String("MacBook Pro".to_string())));
	}

	#[tokio::test]
	async fn test_track_item_opened_coerces_numeric_id() {
		let transport = Arc::new(RecordingTransport::new());
		let client = client_with(transport.clone());

		client.track_item_opened("product", 42, "Widget").await;

		let calls = transport.recorded().await;
		assert_eq!(calls[0].1.get("id"), Some(&Value::String("42".to_string())));
	}

	#[tokio::test]
	async fn test_track_search_truncates_label_to_256() {
		let transport = Arc::new(RecordingTransport::new());
		let client = client_with(transport.clone());

		client.track_search("demo_search", "x".repeat(1000)).await;

		let calls = transport.recorded().await;
		let (name, props) = &calls[0];
		assert_eq!(name, "Search");
		let label = props.get("label").unwrap().as_str().unwrap();
		assert_eq!(label.chars().count(), 256);
		assert_eq!(props.get("feature"), Some(&Value::String("demo_search".to_string())));
	}

	#[tokio::test]
	async fn test_item_label_truncates_to_128() {
		let transport = Arc::new(RecordingTransport::new());
		let client = client_with(transport.clone());

		client.track_item_opened("product", "p1", "y".repeat(500)).await;

		let calls = transport.recorded().await;
		let label = calls[0].1.get("label").unwrap().as_str().unwrap();
		assert_eq!(label.chars().count(), 128);
	}

	#[tokio::test]
	async fn test_page_routes_to_page_with_enriched_context() {
		let transport = Arc::new(RecordingTransport::new());
		let client = client_with(transport.clone());
		client.set_context(Properties::new().insert("session", "s1"));

		client.page(None).await;

		let calls = transport.recorded().await;
		assert_eq!(calls[0].0, "$pageview");
		assert_eq!(calls[0].1.get("session"), Some(&Value::String("s1".to_string())));
	}

	#[tokio::test]
	async fn test_track_strips_sensitive_fields() {
		let transport = Arc::new(RecordingTransport::new());
		let client = client_with(transport.clone());

		client
			.track(
				"signup_completed",
				Some(
					Properties::new()
						.insert("email", "user@example.com")
						.insert("credit_card", "4111")
						.insert("plan", "pro"),
				),
			)
			.await;

		let calls = transport.recorded().await;
		let props = &calls[0].1;
		assert!(!props.contains_key("email"));
		assert!(!props.contains_key("credit_card"));
		assert_eq!(props.get("plan"), Some(&Value::String("pro".to_string())));
	}

	#[tokio::test]
	async fn test_withdrawn_consent_suppresses_all_operations() {
		let transport = Arc::new(RecordingTransport::new());
		let client = client_with(transport.clone());

		client.set_consent(Some(ConsentState::withdrawn()));
		client.page(None).await;
		client.track("event", None).await;
		client.track_search("f", "term").await;
		client.track_item_opened("f", "id", "name").await;

		assert!(transport.recorded().await.is_empty());

		client.enable_analytics();
		client.track("event", None).await;
		assert_eq!(transport.recorded().await.len(), 1);
	}

	#[tokio::test]
	async fn test_set_consent_none_withdraws() {
		let client = client_with(Arc::new(RecordingTransport::new()));
		client.set_consent(None);
		assert!(!client.get_consent().analytics_enabled);
	}

	#[tokio::test]
	async fn test_disabled_client_is_a_noop_but_callable() {
		let transport = Arc::new(RecordingTransport::new());
		let client = AnalyticsClient::builder()
			.enabled(false)
			.transport(transport.clone())
			.build();

		client.page(None).await;
		client.track("event", Some(Properties::new().insert("k", "v"))).await;
		client.track_search("f", "term").await;
		client.track_item_opened("f", "id", "name").await;

		assert!(transport.recorded().await.is_empty());

		// Consent and context remain usable on a disabled client.
		client.disable_analytics();
		assert!(!client.get_consent().analytics_enabled);
		client.set_context(Properties::new().insert("user_id", "u1"));
		client.clear_context();
	}

	#[tokio::test]
	async fn test_failing_transport_never_propagates() {
		let client = client_with(Arc::new(RecordingTransport::failing()));

		// All four operations must return normally.
		client.page(None).await;
		client.track("event", None).await;
		client.track_search("f", "term").await;
		client.track_item_opened("f", "id", "name").await;
	}

	#[tokio::test]
	async fn test_plugins_receive_every_event() {
		let primary = Arc::new(RecordingTransport::new());
		let plugin = Arc::new(RecordingTransport::new());
		let client = AnalyticsClient::builder()
			.enabled(true)
			.transport(primary.clone())
			.plugin(plugin.clone())
			.build();

		client.track("event", None).await;

		assert_eq!(primary.recorded().await.len(), 1);
		assert_eq!(plugin.recorded().await.len(), 1);
	}

	#[tokio::test]
	async fn test_context_changes_between_calls_are_visible() {
		let transport = Arc::new(RecordingTransport::new());
		let client = client_with(transport.clone());

		client.set_context(Properties::new().insert("step", "one"));
		client.track("first", None).await;

		client.set_context(Properties::new().insert("step", "two"));
		client.track("second", None).await;

		let calls = transport.recorded().await;
		assert_eq!(calls[0].1.get("step"), Some(&Value::String("one".to_string())));
		assert_eq!(calls[1].1.get("step"), Some(&Value::String("two".to_string())));
	}

	#[tokio::test]
	async fn test_shared_state_across_clients() {
		let gate = Arc::new(ConsentGate::default());
		let transport_a = Arc::new(RecordingTransport::new());
		let transport_b = Arc::new(RecordingTransport::new());

		let a = AnalyticsClient::builder()
			.enabled(true)
			.consent_gate(gate.clone())
			.transport(transport_a.clone())
			.build();
		let b = AnalyticsClient::builder()
			.enabled(true)
			.consent_gate(gate)
			.transport(transport_b.clone())
			.build();

		a.disable_analytics();
		b.track("event", None).await;

		assert!(transport_b.recorded().await.is_empty());
	}

	#[tokio::test]
	async fn test_custom_deny_list_key_is_stripped() {
		let transport = Arc::new(RecordingTransport::new());
		let client = AnalyticsClient::builder()
			.enabled(true)
			.deny_list(DenyList::new().with_key("internal_token"))
			.transport(transport.clone())
			.build();

		client
			.track("export", Some(Properties::new().insert("internal_token", "tok")))
			.await;

		assert!(!transport.recorded().await[0].1.contains_key("internal_token"));
	}
}
