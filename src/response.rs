//! Token-endpoint response parsing, the producer side of the access-token contract.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	params::AdditionalParameters,
	scope::{ScopeSet, ScopeValidationError},
	token::{AccessToken, AccessTokenBuilderError, TokenType, TokenTypeParseError},
};

/// Failures raised while turning a token-endpoint response body into an access token.
#[derive(Debug, ThisError)]
pub enum ResponseParseError {
	/// Token endpoint responded with malformed JSON.
	#[error("Token endpoint returned malformed JSON.")]
	Json {
		/// Structured parsing failure carrying the failing path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Token endpoint returned an unrecognized `token_type`.
	#[error(transparent)]
	UnknownTokenType(#[from] TokenTypeParseError),
	/// Token endpoint response omitted `expires_in`.
	#[error("Token endpoint response is missing expires_in.")]
	MissingExpiresIn,
	/// Token endpoint returned a non-positive `expires_in`.
	#[error("The expires_in value must be positive.")]
	NonPositiveExpiresIn,
	/// Token endpoint returned an `expires_in` outside the representable window.
	#[error("The expires_in value exceeds the supported range.")]
	ExpiresInOutOfRange,
	/// Token endpoint returned a malformed `scope` field.
	#[error("Token endpoint returned invalid scopes.")]
	InvalidScope(#[from] ScopeValidationError),
	/// Access-token assembly failed after parsing.
	#[error("Unable to build the access token.")]
	TokenBuild(#[from] AccessTokenBuilderError),
}

/// Raw token-endpoint response body, as defined by RFC 6749 §5.1.
///
/// The named fields cover the core response parameters; everything else the endpoint returned
/// (`refresh_token`, `id_token`, vendor claims) is captured verbatim and folded into the token's
/// additional parameters during conversion.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
	access_token: String,
	token_type: String,
	#[serde(default)]
	expires_in: Option<u64>,
	#[serde(default)]
	scope: Option<String>,
	#[serde(flatten)]
	extra: BTreeMap<String, Value>,
}
impl TokenResponse {
	/// Deserializes a JSON response body, reporting the failing path on malformed input.
	pub fn from_json_slice(body: &[u8]) -> Result<Self, ResponseParseError> {
		let mut deserializer = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| ResponseParseError::Json { source })
	}

	/// Converts the response into an [`AccessToken`] issued at the given instant.
	///
	/// The clock is the caller's: token endpoints report a relative `expires_in`, and whoever
	/// received the response knows when that was. Scope strings are split on whitespace per the
	/// wire format; an absent `scope` field yields the empty set.
	pub fn into_access_token(
		self,
		issued_at: OffsetDateTime,
	) -> Result<AccessToken, ResponseParseError> {
		let token_type = self.token_type.parse::<TokenType>()?;
		let expires_in = self.expires_in.ok_or(ResponseParseError::MissingExpiresIn)?;

		if expires_in == 0 {
			return Err(ResponseParseError::NonPositiveExpiresIn);
		}

		let expires_in =
			i64::try_from(expires_in).map_err(|_| ResponseParseError::ExpiresInOutOfRange)?;
		let expires_at = issued_at
			.checked_add(Duration::seconds(expires_in))
			.ok_or(ResponseParseError::ExpiresInOutOfRange)?;
		let scopes = match self.scope.as_deref() {
			Some(wire) => ScopeSet::from_wire(wire)?,
			None => ScopeSet::default(),
		};
		let additional_parameters = AdditionalParameters::new(self.extra);

		#[cfg(feature = "tracing")]
		tracing::debug!(
			scopes = scopes.len(),
			parameters = additional_parameters.len(),
			"Parsed token endpoint response."
		);

		Ok(AccessToken::builder()
			.token_type(token_type)
			.value(self.access_token)
			.issued_at(issued_at)
			.expires_at(expires_at)
			.scopes(scopes)
			.additional_parameters(additional_parameters)
			.build()?)
	}
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenResponse")
			.field("access_token", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("expires_in", &self.expires_in)
			.field("scope", &self.scope)
			.field("extra", &self.extra.keys())
			.finish()
	}
}

/// One-call producer helper: parses a response body and stamps it into an access token.
pub fn parse_token_response(body: &[u8], issued_at: OffsetDateTime) -> Result<AccessToken> {
	let response = TokenResponse::from_json_slice(body)?;

	Ok(response.into_access_token(issued_at)?)
}
