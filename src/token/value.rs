//! Opaque credential wrapper that keeps token material out of logs.

// self
use crate::_prelude::*;

/// The opaque credential string of a token, redacted in diagnostic output.
///
/// The wrapper performs no content validation; whoever mints the token owns its format. Both
/// formatter implementations redact, so the material only leaves through [`secret`](Self::secret)
/// or [`into_inner`](Self::into_inner).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValue(String);
impl TokenValue {
	/// Wraps a credential string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw credential. Callers must avoid logging it.
	pub fn secret(&self) -> &str {
		&self.0
	}

	/// Consumes the wrapper and returns the raw credential.
	pub fn into_inner(self) -> String {
		self.0
	}
}
impl AsRef<str> for TokenValue {
	fn as_ref(&self) -> &str {
		self.secret()
	}
}
impl From<String> for TokenValue {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for TokenValue {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for TokenValue {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenValue").field(&"<redacted>").finish()
	}
}
impl Display for TokenValue {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
