//! Composed base fields shared by every issued token.

// self
use crate::{_prelude::*, token::value::TokenValue};

/// Credential material plus its validity window, embedded by concrete token kinds.
///
/// Both instants are stored exactly as supplied; their ordering is not checked because validity
/// rules belong to the issuing collaborator. [`is_expired_at`](Self::is_expired_at) is an
/// advisory query for consumers, never an enforcement point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseToken {
	value: TokenValue,
	#[serde(with = "time::serde::rfc3339")]
	issued_at: OffsetDateTime,
	#[serde(with = "time::serde::rfc3339")]
	expires_at: OffsetDateTime,
}
impl BaseToken {
	/// Builds the base fields from credential material and its validity window.
	pub fn new(
		value: impl Into<TokenValue>,
		issued_at: OffsetDateTime,
		expires_at: OffsetDateTime,
	) -> Self {
		Self { value: value.into(), issued_at, expires_at }
	}

	/// The credential material.
	pub fn value(&self) -> &TokenValue {
		&self.value
	}

	/// Instant the token was issued.
	pub fn issued_at(&self) -> OffsetDateTime {
		self.issued_at
	}

	/// Instant the token ceases to be valid.
	pub fn expires_at(&self) -> OffsetDateTime {
		self.expires_at
	}

	/// Span between issuance and expiry.
	pub fn lifetime(&self) -> Duration {
		self.expires_at - self.issued_at
	}

	/// Returns `true` once the given instant has reached the expiry instant.
	pub fn is_expired_at(&self, at: OffsetDateTime) -> bool {
		at >= self.expires_at
	}
}
