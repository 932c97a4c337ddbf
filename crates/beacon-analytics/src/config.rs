// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client configuration.
//!
//! Read once at construction, never on the hot path. Missing environment
//! values fall back to safe defaults — tracking disabled, localhost
//! destination — rather than failing. Builder overrides take precedence
//! over environment values.

use serde::{Deserialize, Serialize};

/// Enables tracking when set to `"true"`.
pub const ENV_TRACKING_ENABLED: &str = "BEACON_TRACKING_ENABLED";

/// Destination site domain reported with every event.
pub const ENV_SITE_DOMAIN: &str = "BEACON_SITE_DOMAIN";

/// Base URL of the collector API.
pub const ENV_API_HOST: &str = "BEACON_API_HOST";

const DEFAULT_SITE_DOMAIN: &str = "localhost";
const DEFAULT_API_HOST: &str = "http://localhost:8000";

/// Static configuration for an analytics client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
	/// Build-time/environment toggle, distinct from user consent. When
	/// false the client is constructed with all tracking operations as
	/// no-ops.
	pub enabled: bool,
	/// Site domain reported to the collector.
	pub site_domain: String,
	/// Base URL of the collector API.
	pub api_host: String,
}

impl Default for AnalyticsConfig {
	fn default() -> Self {
		Self {
			enabled: false,
			site_domain: DEFAULT_SITE_DOMAIN.to_string(),
			api_host: DEFAULT_API_HOST.to_string(),
		}
	}
}

impl AnalyticsConfig {
	/// Loads configuration from the process environment.
	///
	/// Absent or unparseable values resolve to the defaults; this never
	/// fails.
	pub fn from_env() -> Self {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		Self {
			enabled: lookup(ENV_TRACKING_ENABLED).as_deref() == Some("true"),
			site_domain: lookup(ENV_SITE_DOMAIN).unwrap_or_else(|| DEFAULT_SITE_DOMAIN.to_string()),
			api_host: lookup(ENV_API_HOST).unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_are_safe() {
		let config = AnalyticsConfig::default();
		assert!(!config.enabled);
		assert_eq!(config.site_domain, "localhost");
		assert_eq!(config.api_host, "http://localhost:8000");
	}

	#[test]
	fn test_enabled_requires_exact_true() {
		for v in ["TRUE", "1", "yes", ""] {
			let config = AnalyticsConfig::from_lookup(|name| {
				(name == ENV_TRACKING_ENABLED).then(|| v.to_string())
			});
			assert!(!config.enabled, "{v:?} must not enable tracking");
		}

		let config =
			AnalyticsConfig::from_lookup(|name| (name == ENV_TRACKING_ENABLED).then(|| "true".to_string()));
		assert!(config.enabled);
	}

	#[test]
	fn test_missing_vars_fall_back_to_defaults() {
		let config = AnalyticsConfig::from_lookup(|_| None);
		assert_eq!(config, AnalyticsConfig::default());
	}

	#[test]
	fn test_env_values_are_used_when_present() {
		let config = AnalyticsConfig::from_lookup(|name| match name {
			ENV_TRACKING_ENABLED => Some("true".to_string()),
			ENV_SITE_DOMAIN => Some("app.example.com".to_string()),
			ENV_API_HOST => Some("https://collect.example.com".to_string()),
			_ => None,
		});

		assert!(config.enabled);
		assert_eq!(config.site_domain, "app.example.com");
		assert_eq!(config.api_host, "https://collect.example.com");
	}
}
