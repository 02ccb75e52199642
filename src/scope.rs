//! Normalized scope-set modeling for access tokens.

// std
use std::collections::BTreeSet;
// crates.io
use serde::{Deserializer, Serializer, de::Error as DeError};
// self
use crate::_prelude::*;

/// Errors emitted when validating scope identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ScopeValidationError {
	/// Empty scope identifiers are not allowed.
	#[error("Scope identifiers cannot be empty.")]
	Empty,
	/// Scope identifiers cannot contain embedded whitespace.
	#[error("Scope identifier contains whitespace: {scope}.")]
	ContainsWhitespace {
		/// The offending scope string.
		scope: String,
	},
}

/// Immutable, normalized set of scope identifiers granted to a token.
///
/// Scopes are deduplicated and sorted at construction, so equality, ordering, and hashing are
/// independent of input order. The stored snapshot is frozen: nothing the caller does with its
/// original container afterwards is observable here, and no mutating accessor exists.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeSet {
	scopes: Arc<[String]>,
}
impl ScopeSet {
	/// Builds a normalized scope set from any iterator of scope strings.
	pub fn new<I, S>(scopes: I) -> Result<Self, ScopeValidationError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut normalized = BTreeSet::new();

		for scope in scopes {
			let scope: String = scope.into();

			if scope.is_empty() {
				return Err(ScopeValidationError::Empty);
			}
			if scope.chars().any(char::is_whitespace) {
				return Err(ScopeValidationError::ContainsWhitespace { scope });
			}

			normalized.insert(scope);
		}

		Ok(Self { scopes: normalized.into_iter().collect() })
	}

	/// Parses the space-delimited wire form used by the `scope` response field.
	///
	/// An empty string denotes the empty set; whitespace-only input is rejected because it claims
	/// to carry scopes but delivers none.
	pub fn from_wire(wire: &str) -> Result<Self, ScopeValidationError> {
		if wire.is_empty() {
			return Ok(Self::default());
		}
		if wire.chars().all(char::is_whitespace) {
			return Err(ScopeValidationError::Empty);
		}

		Self::new(wire.split_whitespace())
	}

	/// Renders the space-delimited wire form.
	pub fn to_wire(&self) -> String {
		self.scopes.join(" ")
	}

	/// Number of distinct scopes.
	pub fn len(&self) -> usize {
		self.scopes.len()
	}

	/// Returns `true` when no scopes were granted.
	pub fn is_empty(&self) -> bool {
		self.scopes.is_empty()
	}

	/// Returns `true` when the set contains the given scope.
	pub fn contains(&self, scope: &str) -> bool {
		self.scopes.binary_search_by(|candidate| candidate.as_str().cmp(scope)).is_ok()
	}

	/// Returns `true` when every scope of `required` is present in this set.
	///
	/// This is the authorization check consumers run before attaching the token to an operation.
	pub fn contains_all(&self, required: &Self) -> bool {
		required.iter().all(|scope| self.contains(scope))
	}

	/// Iterator over the normalized scopes, in sorted order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.scopes.iter().map(String::as_str)
	}

	/// Returns the underlying slice of scope strings.
	pub fn as_slice(&self) -> &[String] {
		&self.scopes
	}
}
impl TryFrom<Vec<String>> for ScopeSet {
	type Error = ScopeValidationError;

	fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for ScopeSet {
	type Err = ScopeValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_wire(s)
	}
}
impl Debug for ScopeSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ScopeSet").field(&self.scopes).finish()
	}
}
impl Display for ScopeSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.to_wire())
	}
}
impl Serialize for ScopeSet {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_seq(self.scopes.iter())
	}
}
impl<'de> Deserialize<'de> for ScopeSet {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let scopes = <Vec<String>>::deserialize(deserializer)?;

		Self::new(scopes).map_err(DeError::custom)
	}
}
