// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Consent state shared between the host application and the pipeline.
//!
//! Consent is read at dispatch time, never captured at client
//! construction, so flipping it takes effect immediately for every
//! already-bound tracking call. State is in-memory only and resets on
//! process restart.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Snapshot of the host user's analytics consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentState {
	/// Whether analytics events may leave the process.
	pub analytics_enabled: bool,
}

impl ConsentState {
	/// Consent granted.
	pub fn granted() -> Self {
		Self {
			analytics_enabled: true,
		}
	}

	/// Consent withdrawn.
	pub fn withdrawn() -> Self {
		Self {
			analytics_enabled: false,
		}
	}
}

impl Default for ConsentState {
	fn default() -> Self {
		Self::granted()
	}
}

/// Process-wide consent gate consulted before every transport call.
///
/// All operations are total: there are no error conditions, and every
/// read observes the most recently written value.
#[derive(Debug)]
pub struct ConsentGate {
	state: RwLock<ConsentState>,
}

impl Default for ConsentGate {
	fn default() -> Self {
		Self::new(ConsentState::default())
	}
}

impl ConsentGate {
	/// Creates a gate with the given initial state.
	pub fn new(initial: ConsentState) -> Self {
		Self {
			state: RwLock::new(initial),
		}
	}

	/// Replaces consent wholesale.
	///
	/// `None` resolves to withdrawn consent rather than erroring, so a
	/// host clearing its consent record fails closed.
	pub fn set_consent(&self, next: Option<ConsentState>) {
		let next = next.unwrap_or_else(ConsentState::withdrawn);
		*self.state.write().unwrap_or_else(|e| e.into_inner()) = next;
	}

	/// Returns a read-only snapshot of the current state.
	pub fn get_consent(&self) -> ConsentState {
		*self.state.read().unwrap_or_else(|e| e.into_inner())
	}

	/// Grants analytics consent in place.
	pub fn enable(&self) {
		self
			.state
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.analytics_enabled = true;
	}

	/// Withdraws analytics consent in place.
	pub fn disable(&self) {
		self
			.state
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.analytics_enabled = false;
	}

	/// Returns true if events are currently permitted to leave.
	pub fn is_enabled(&self) -> bool {
		self.get_consent().analytics_enabled
	}
}
