//! The frozen access-token record and its builder.

// self
use crate::{
	_prelude::*,
	params::AdditionalParameters,
	scope::ScopeSet,
	token::{base::BaseToken, token_type::TokenType, value::TokenValue},
};

/// Errors produced by [`AccessTokenBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum AccessTokenBuilderError {
	/// Issued when no token type was provided.
	#[error("Token type is required.")]
	MissingTokenType,
	/// Issued when no token value was provided.
	#[error("Token value is required.")]
	MissingTokenValue,
	/// Issued when no expiry (absolute or relative) was configured.
	#[error("Expiry must be supplied via expires_at or expires_in.")]
	MissingExpiry,
}

/// An OAuth 2.0 access token: the credential a client presents to reach protected resources.
///
/// The record is frozen from construction to drop. Scopes and additional parameters are copied
/// into immutable snapshots at the construction boundary, so nothing the producer does with its
/// own containers afterwards is observable here, and every accessor is a pure read. A built token
/// is therefore safe to share across threads without synchronization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
	token_type: TokenType,
	#[serde(flatten)]
	base: BaseToken,
	#[serde(default, skip_serializing_if = "ScopeSet::is_empty")]
	scopes: ScopeSet,
	#[serde(default, skip_serializing_if = "AdditionalParameters::is_empty")]
	additional_parameters: AdditionalParameters,
}
impl AccessToken {
	/// Returns a builder; the canonical construction path all forms converge on.
	pub fn builder() -> AccessTokenBuilder {
		AccessTokenBuilder::default()
	}

	/// Builds a bearer token with no scopes and no additional parameters.
	pub fn bearer(
		value: impl Into<TokenValue>,
		issued_at: OffsetDateTime,
		expires_at: OffsetDateTime,
	) -> Self {
		Self {
			token_type: TokenType::Bearer,
			base: BaseToken::new(value, issued_at, expires_at),
			scopes: ScopeSet::default(),
			additional_parameters: AdditionalParameters::default(),
		}
	}

	/// The credential scheme of this token.
	pub fn token_type(&self) -> TokenType {
		self.token_type
	}

	/// The embedded base fields (credential material and validity window).
	pub fn base(&self) -> &BaseToken {
		&self.base
	}

	/// The credential material.
	pub fn value(&self) -> &TokenValue {
		self.base.value()
	}

	/// Instant the token was issued.
	pub fn issued_at(&self) -> OffsetDateTime {
		self.base.issued_at()
	}

	/// Instant the token ceases to be valid.
	pub fn expires_at(&self) -> OffsetDateTime {
		self.base.expires_at()
	}

	/// The scopes granted to this token.
	pub fn scopes(&self) -> &ScopeSet {
		&self.scopes
	}

	/// Protocol-extension parameters returned alongside the core fields.
	pub fn additional_parameters(&self) -> &AdditionalParameters {
		&self.additional_parameters
	}

	/// Renders the `Authorization` header value, `<wire-type> <credential>`.
	///
	/// The result embeds the raw credential; treat it with the same care as the secret itself.
	pub fn authorization_header(&self) -> String {
		format!("{} {}", self.token_type.as_str(), self.base.value().secret())
	}
}

/// Builder for [`AccessToken`].
#[derive(Clone, Debug, Default)]
pub struct AccessTokenBuilder {
	token_type: Option<TokenType>,
	value: Option<TokenValue>,
	issued_at: Option<OffsetDateTime>,
	expires_at: Option<OffsetDateTime>,
	expires_in: Option<Duration>,
	scopes: Option<ScopeSet>,
	additional_parameters: Option<AdditionalParameters>,
}
impl AccessTokenBuilder {
	/// Sets the credential scheme.
	pub fn token_type(mut self, token_type: TokenType) -> Self {
		self.token_type = Some(token_type);

		self
	}

	/// Provides the credential material.
	pub fn value(mut self, value: impl Into<TokenValue>) -> Self {
		self.value = Some(value.into());

		self
	}

	/// Sets the issued-at instant.
	pub fn issued_at(mut self, instant: OffsetDateTime) -> Self {
		self.issued_at = Some(instant);

		self
	}

	/// Convenience helper that stamps `issued_at` with the current clock.
	pub fn issued_now(self) -> Self {
		self.issued_at(OffsetDateTime::now_utc())
	}

	/// Sets an absolute expiry instant.
	pub fn expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.expires_at = Some(instant);

		self
	}

	/// Sets a relative expiry duration from the issued instant.
	pub fn expires_in(mut self, duration: Duration) -> Self {
		self.expires_in = Some(duration);

		self
	}

	/// Provides the granted scopes; absent scopes normalize to the empty set.
	pub fn scopes(mut self, scopes: ScopeSet) -> Self {
		self.scopes = Some(scopes);

		self
	}

	/// Provides the extension parameters; absent parameters normalize to the empty map.
	pub fn additional_parameters(mut self, parameters: AdditionalParameters) -> Self {
		self.additional_parameters = Some(parameters);

		self
	}

	/// Consumes the builder and produces an [`AccessToken`].
	pub fn build(self) -> Result<AccessToken, AccessTokenBuilderError> {
		let token_type = self.token_type.ok_or(AccessTokenBuilderError::MissingTokenType)?;
		let value = self.value.ok_or(AccessTokenBuilderError::MissingTokenValue)?;
		let issued_at = self.issued_at.unwrap_or_else(OffsetDateTime::now_utc);
		let expires_at = match (self.expires_at, self.expires_in) {
			(Some(instant), _) => instant,
			(None, Some(delta)) => issued_at + delta,
			(None, None) => return Err(AccessTokenBuilderError::MissingExpiry),
		};

		Ok(AccessToken {
			token_type,
			base: BaseToken::new(value, issued_at, expires_at),
			scopes: self.scopes.unwrap_or_default(),
			additional_parameters: self.additional_parameters.unwrap_or_default(),
		})
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	use time::macros;
	// self
	use super::*;

	#[test]
	fn bearer_form_defaults_to_empty_collections() {
		let issued = macros::datetime!(2025-01-01 00:00 UTC);
		let token = AccessToken::bearer("abc123", issued, issued + Duration::seconds(3_600));

		assert_eq!(token.token_type(), TokenType::Bearer);
		assert!(token.scopes().is_empty());
		assert!(token.additional_parameters().is_empty());
		assert_eq!(token.value().secret(), "abc123");
		assert_eq!(token.expires_at(), macros::datetime!(2025-01-01 01:00 UTC));
	}

	#[test]
	fn missing_token_type_fails_regardless_of_other_fields() {
		let err = AccessToken::builder()
			.value("abc123")
			.issued_at(macros::datetime!(2025-01-01 00:00 UTC))
			.expires_in(Duration::hours(1))
			.scopes(ScopeSet::new(["read"]).expect("Scope fixture should be valid."))
			.build()
			.expect_err("Building without a token type must fail.");

		assert_eq!(err, AccessTokenBuilderError::MissingTokenType);
	}

	#[test]
	fn missing_value_and_expiry_have_distinct_errors() {
		let no_value = AccessToken::builder()
			.token_type(TokenType::Bearer)
			.expires_in(Duration::hours(1))
			.build()
			.expect_err("Building without a value must fail.");

		assert_eq!(no_value, AccessTokenBuilderError::MissingTokenValue);

		let no_expiry = AccessToken::builder()
			.token_type(TokenType::Bearer)
			.value("abc123")
			.build()
			.expect_err("Building without an expiry must fail.");

		assert_eq!(no_expiry, AccessTokenBuilderError::MissingExpiry);
	}

	#[test]
	fn builder_handles_relative_expiry() {
		let token = AccessToken::builder()
			.token_type(TokenType::Bearer)
			.value("abc123")
			.issued_at(macros::datetime!(2025-01-01 00:00 UTC))
			.expires_in(Duration::minutes(30))
			.build()
			.expect("Relative-expiry builder should succeed.");

		assert_eq!(token.expires_at(), macros::datetime!(2025-01-01 00:30 UTC));
	}

	#[test]
	fn full_form_carries_scopes_and_parameters() {
		let token = AccessToken::builder()
			.token_type(TokenType::Bearer)
			.value("abc123")
			.issued_at(macros::datetime!(2025-01-01 00:00 UTC))
			.expires_at(macros::datetime!(2025-01-01 01:00 UTC))
			.scopes(ScopeSet::new(["read", "write"]).expect("Scope fixture should be valid."))
			.additional_parameters(AdditionalParameters::new([("refresh_token", json!("xyz"))]))
			.build()
			.expect("Full-form builder should succeed.");

		assert!(token.scopes().contains("read"));
		assert!(token.scopes().contains("write"));
		assert_eq!(token.scopes().len(), 2);
		assert_eq!(token.additional_parameters().get_str("refresh_token"), Some("xyz"));
	}

	#[test]
	fn authorization_header_uses_the_wire_form() {
		let issued = macros::datetime!(2025-01-01 00:00 UTC);
		let token = AccessToken::bearer("abc123", issued, issued + Duration::hours(1));

		assert_eq!(token.authorization_header(), "Bearer abc123");
	}

	#[test]
	fn issued_at_defaults_to_the_current_clock() {
		let before = OffsetDateTime::now_utc();
		let token = AccessToken::builder()
			.token_type(TokenType::Bearer)
			.value("abc123")
			.expires_in(Duration::hours(1))
			.build()
			.expect("Builder with defaulted issued_at should succeed.");
		let after = OffsetDateTime::now_utc();

		assert!(token.issued_at() >= before && token.issued_at() <= after);
		assert_eq!(token.base().lifetime(), Duration::hours(1));
	}
}
