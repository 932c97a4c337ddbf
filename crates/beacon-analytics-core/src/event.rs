// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The canonical event form all tracking operations converge to.

use serde::{Deserialize, Serialize};

use crate::Properties;

/// Reserved event name for page views.
pub const EVENT_PAGE_VIEW: &str = "$pageview";

/// Reserved event name for search events.
pub const EVENT_SEARCH: &str = "Search";

/// Reserved event name for item-opened events.
pub const EVENT_ITEM_OPENED: &str = "ItemOpened";

/// Maximum label length for search events, in characters.
pub const SEARCH_LABEL_MAX_CHARS: usize = 256;

/// Maximum label length for item-opened events, in characters.
pub const ITEM_LABEL_MAX_CHARS: usize = 128;

/// A normalized analytics event: a name plus its property bag.
///
/// Transient by design — built per tracking call, enriched, dispatched,
/// and discarded. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalEvent {
	pub name: String,
	pub properties: Properties,
}

impl CanonicalEvent {
	/// Creates an event with the given name and properties.
	pub fn new(name: impl Into<String>, properties: Properties) -> Self {
		Self {
			name: name.into(),
			properties,
		}
	}

	/// Creates a page-view event.
	pub fn page_view(properties: Properties) -> Self {
		Self::new(EVENT_PAGE_VIEW, properties)
	}

	/// Returns true if this is the reserved page-view event.
	pub fn is_page_view(&self) -> bool {
		self.name == EVENT_PAGE_VIEW
	}
}

/// Cuts `value` down to at most `max_chars` characters.
///
/// A hard cutoff: not word-boundary aware, counted in characters rather
/// than bytes so multibyte input can never be split mid-codepoint.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
	value.chars().take(max_chars).collect()
}
