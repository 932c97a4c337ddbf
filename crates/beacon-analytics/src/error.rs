// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the analytics SDK.
//!
//! Errors exist only below the safe-invocation boundary. Transports
//! return them; the dispatcher logs and swallows them; no public tracking
//! operation ever surfaces one to the host application.

use thiserror::Error;

/// Analytics SDK errors.
#[derive(Debug, Error)]
pub enum AnalyticsError {
	/// HTTP request failed before a response was received.
	#[error("HTTP request failed: {0}")]
	RequestFailed(#[from] reqwest::Error),

	/// Collector returned an error response.
	#[error("collector error ({status}): {message}")]
	ServerError { status: u16, message: String },

	/// Event payload could not be serialized.
	#[error("serialization error: {0}")]
	SerializationError(String),

	/// Transport-specific failure that fits no other variant.
	#[error("transport error: {0}")]
	TransportError(String),
}

/// Result type alias for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
