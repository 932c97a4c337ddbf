// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Beacon analytics pipeline.
//!
//! This crate is runtime-free: property bags, the sensitive-field deny
//! list, consent state, the global context store, and the canonical event
//! form. The SDK client in `beacon-analytics` composes these into the
//! full tracking pipeline.

mod consent;
mod context;
mod event;
mod properties;
mod sanitize;

pub use consent::{ConsentGate, ConsentState};
pub use context::ContextStore;
pub use event::{
	truncate_chars, CanonicalEvent, EVENT_ITEM_OPENED, EVENT_PAGE_VIEW, EVENT_SEARCH,
	ITEM_LABEL_MAX_CHARS, SEARCH_LABEL_MAX_CHARS,
};
pub use properties::Properties;
pub use sanitize::{DenyList, DEFAULT_DENIED_KEYS};
