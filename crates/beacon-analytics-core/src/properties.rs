// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Property bags carried by analytics events.
//!
//! Every pipeline stage that transforms a bag (sanitization, enrichment)
//! produces a new [`Properties`] value; bags are never mutated in place
//! once handed to the pipeline.
//!
//! # Example
//!
//! ```
//! use beacon_analytics_core::Properties;
//!
//! let props = Properties::new()
//!     .insert("feature", "global_search")
//!     .insert("result_count", 12)
//!     .insert("from_cache", false);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A builder for event properties and global context entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
	inner: Map<String, Value>,
}

impl Properties {
	/// Creates an empty property bag.
	pub fn new() -> Self {
		Self { inner: Map::new() }
	}

	/// Inserts a key-value pair, replacing any existing value for the key.
	///
	/// Accepts any value convertible into `serde_json::Value`: strings,
	/// numbers, booleans, arrays, and nested objects.
	pub fn insert<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.inner.insert(key.into(), value.into());
		self
	}

	/// Merges `other` into this bag and returns the result.
	///
	/// On key collision the value from `other` wins. The enricher depends
	/// on this: merging the context snapshot last is what gives context
	/// precedence over caller-supplied properties.
	pub fn merge(mut self, other: Properties) -> Self {
		for (k, v) in other.inner {
			self.inner.insert(k, v);
		}
		self
	}

	/// Returns a copy of this bag without the named key.
	pub fn without(&self, key: &str) -> Self {
		let mut inner = self.inner.clone();
		inner.remove(key);
		Self { inner }
	}

	/// Returns true if the bag contains the key.
	pub fn contains_key(&self, key: &str) -> bool {
		self.inner.contains_key(key)
	}

	/// Gets a value by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.inner.get(key)
	}

	/// Iterates over the keys in the bag.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.inner.keys().map(String::as_str)
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns true if the bag has no entries.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Converts the bag into a `serde_json::Value` object.
	pub fn into_value(self) -> Value {
		Value::Object(self.inner)
	}
}

impl From<Properties> for Value {
	fn from(props: Properties) -> Self {
		props.into_value()
	}
}

impl From<Value> for Properties {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(map) => Self { inner: map },
			_ => Self::new(),
		}
	}
}

impl From<Map<String, Value>> for Properties {
	fn from(map: Map<String, Value>) -> Self {
		Self { inner: map }
	}
}

impl FromIterator<(String, Value)> for Properties {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self {
			inner: iter.into_iter().collect(),
		}
	}
}
