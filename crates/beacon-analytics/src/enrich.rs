// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Enrichment: composing the deny list with the global context.
//!
//! Ordering is load-bearing. Caller properties are sanitized *before* the
//! context merge, so a denied key can never ride in under any name, and
//! the context itself (trusted, set internally by the host) is never
//! subject to sanitization. The context snapshot is merged last, so on a
//! key collision the context value wins — callers cannot shadow context.
//!
//! The snapshot is taken per enrichment, never cached: `set_context`
//! between two tracking calls is visible in the second event.

use std::sync::Arc;

use beacon_analytics_core::{ContextStore, DenyList, Properties};

/// Builds the final property bag for an outgoing event.
#[derive(Debug, Clone)]
pub struct Enricher {
	context: Arc<ContextStore>,
	deny_list: DenyList,
}

impl Enricher {
	/// Creates an enricher over the shared context store.
	pub fn new(context: Arc<ContextStore>, deny_list: DenyList) -> Self {
		Self { context, deny_list }
	}

	/// Sanitizes `props` and merges the current context on top.
	pub fn enrich(&self, props: Properties) -> Properties {
		self.deny_list.sanitize(&props).merge(self.context.snapshot())
	}
}
