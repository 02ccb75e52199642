//! Credential scheme tags and their canonical wire forms.

// self
use crate::_prelude::*;

/// Error returned when a token-type wire form is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum TokenTypeParseError {
	/// The wire form matches no known scheme.
	#[error("Unknown token type: {value}.")]
	Unknown {
		/// The unrecognized wire form.
		value: String,
	},
}

/// Credential scheme governing how the token value must be presented on the wire.
///
/// The symbolic variant name and the wire form are deliberately distinct: future schemes may need
/// multi-word or differently-cased wire forms, and [`as_str`](Self::as_str) is the single place
/// that mapping lives. Parsing accepts any ASCII casing, since RFC 6749 treats the `token_type`
/// response parameter as case-insensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(try_from = "String", into = "String")]
pub enum TokenType {
	/// Bearer scheme ([RFC 6750](https://www.rfc-editor.org/rfc/rfc6750)); wire form `Bearer`.
	Bearer,
}
impl TokenType {
	/// Returns the canonical wire form used in `Authorization` headers and JSON bodies.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenType::Bearer => "Bearer",
		}
	}
}
impl Display for TokenType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for TokenType {
	type Err = TokenTypeParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("bearer") {
			return Ok(TokenType::Bearer);
		}

		Err(TokenTypeParseError::Unknown { value: s.to_owned() })
	}
}
impl TryFrom<String> for TokenType {
	type Error = TokenTypeParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}
impl From<TokenType> for String {
	fn from(value: TokenType) -> Self {
		value.as_str().to_owned()
	}
}
