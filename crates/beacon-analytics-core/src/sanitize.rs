// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sensitive-field sanitization.
//!
//! Caller-supplied property bags pass through a deny list before they are
//! merged with context or handed to any transport. The list is data held
//! by [`DenyList`], not literals scattered through the pipeline, so hosts
//! can extend it at client construction time.
//!
//! This is a deny list, not an allow list: any key not on the list is
//! assumed safe. Callers who invent new sensitive field names outside the
//! default set must register them via [`DenyList::with_key`]. That is a
//! documented limitation of the design, not a bug.

use crate::Properties;

/// Field names stripped from every caller-supplied property bag.
pub const DEFAULT_DENIED_KEYS: [&str; 6] = [
	"email",
	"phone",
	"password",
	"ssn",
	"credit_card",
	"sensitive_data",
];

/// A set of property keys that must never leave the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyList {
	keys: Vec<String>,
}

impl Default for DenyList {
	fn default() -> Self {
		Self {
			keys: DEFAULT_DENIED_KEYS.iter().map(|k| k.to_string()).collect(),
		}
	}
}

impl DenyList {
	/// Creates the default deny list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty deny list. Useful only in tests; production
	/// pipelines should start from [`DenyList::new`].
	pub fn empty() -> Self {
		Self { keys: Vec::new() }
	}

	/// Returns a deny list with one extra key registered.
	pub fn with_key(mut self, key: impl Into<String>) -> Self {
		let key = key.into();
		if !self.keys.contains(&key) {
			self.keys.push(key);
		}
		self
	}

	/// Returns true if the key is denied.
	pub fn denies(&self, key: &str) -> bool {
		self.keys.iter().any(|k| k == key)
	}

	/// Iterates over the denied keys.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.keys.iter().map(String::as_str)
	}

	/// Returns a new bag with every denied key removed.
	///
	/// The input is not consumed or mutated; unknown keys pass through
	/// unchanged.
	pub fn sanitize(&self, props: &Properties) -> Properties {
		let mut clean = props.clone();
		for key in &self.keys {
			clean = clean.without(key);
		}
		clean
	}
}
