// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide global context merged into every outgoing event.
//!
//! The store owns its map exclusively; the rest of the pipeline only ever
//! sees snapshots taken via [`ContextStore::snapshot`], so a concurrent
//! `set`/`clear` can never produce a torn read inside an enrichment.

use std::sync::RwLock;

use crate::Properties;

/// Mutable key/value bag shared by all events until cleared.
///
/// Starts empty; survives only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct ContextStore {
	context: RwLock<Properties>,
}

impl ContextStore {
	/// Creates an empty context store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Shallow-merges `partial` into the stored context.
	///
	/// New keys overwrite same-named existing keys; unrelated keys
	/// survive. Nested objects are replaced wholesale, not deep-merged —
	/// deep merging would hide silent key collisions.
	pub fn set(&self, partial: Properties) {
		let mut guard = self.context.write().unwrap_or_else(|e| e.into_inner());
		let current = std::mem::take(&mut *guard);
		*guard = current.merge(partial);
	}

	/// Resets the context to an empty mapping.
	pub fn clear(&self) {
		*self.context.write().unwrap_or_else(|e| e.into_inner()) = Properties::new();
	}

	/// Returns a copy of the current context.
	pub fn snapshot(&self) -> Properties {
		self
			.context
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}
}
