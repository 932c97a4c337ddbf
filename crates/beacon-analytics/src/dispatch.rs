// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Guarded dispatch: the safe-invocation boundary around transports.
//!
//! Every event passes an ordered list of guards before any transport is
//! invoked; the consent gate is the first and, by default, only guard.
//! Guard order is plain data on the [`Dispatcher`], which makes the
//! consent-before-invocation contract an explicit, testable one rather
//! than a property of closure nesting.
//!
//! Transport failures stop here. An `Err` from a transport is logged and
//! swallowed; it never reaches the host application. One transport
//! failing does not keep the remaining transports from being attempted.

use std::sync::Arc;

use tracing::{debug, warn};

use beacon_analytics_core::{CanonicalEvent, ConsentGate};

use crate::transport::SharedTransport;

/// A veto point consulted, in order, before each transport invocation.
pub trait DispatchGuard: Send + Sync {
	/// Short name used in suppression diagnostics.
	fn name(&self) -> &str;

	/// Returns false to suppress the event. Must not block.
	fn allow(&self, event: &CanonicalEvent) -> bool;
}

impl DispatchGuard for ConsentGate {
	fn name(&self) -> &str {
		"consent"
	}

	fn allow(&self, _event: &CanonicalEvent) -> bool {
		self.is_enabled()
	}
}

/// Routes permitted events to every configured transport.
pub struct Dispatcher {
	guards: Vec<Arc<dyn DispatchGuard>>,
	transports: Vec<SharedTransport>,
}

impl Dispatcher {
	/// Creates a dispatcher with the given guard chain and transports.
	pub fn new(guards: Vec<Arc<dyn DispatchGuard>>, transports: Vec<SharedTransport>) -> Self {
		Self { guards, transports }
	}

	/// Returns the guard names in evaluation order.
	pub fn guard_names(&self) -> Vec<&str> {
		self.guards.iter().map(|g| g.name()).collect()
	}

	/// Dispatches one event. Infallible by contract: suppression is a
	/// silent no-op and transport errors are logged, never propagated.
	pub async fn dispatch(&self, event: CanonicalEvent) {
		for guard in &self.guards {
			if !guard.allow(&event) {
				debug!(event = %event.name, guard = guard.name(), "Event suppressed");
				return;
			}
		}

		for transport in &self.transports {
			let result = if event.is_page_view() {
				transport.page(event.properties.clone()).await
			} else {
				transport.track(&event.name, event.properties.clone()).await
			};

			if let Err(e) = result {
				warn!(event = %event.name, error = %e, "Analytics transport failed");
			}
		}
	}
}
