//! Crate-level error types aggregating the per-module failure modes.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical crate error exposed by the high-level helpers.
///
/// Each module also exposes its own narrow error enum; this type is the `?`-friendly fan-in for
/// callers that do not care which stage failed.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Scope identifier validation failed.
	#[error(transparent)]
	Scope(#[from] crate::scope::ScopeValidationError),
	/// Token-type wire form was not recognized.
	#[error(transparent)]
	TokenType(#[from] crate::token::TokenTypeParseError),
	/// Access-token assembly failed.
	#[error(transparent)]
	TokenBuild(#[from] crate::token::AccessTokenBuilderError),
	/// Token-endpoint response could not be parsed.
	#[error(transparent)]
	Response(#[from] crate::response::ResponseParseError),
}
