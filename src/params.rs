//! Protocol-extension parameter maps carried alongside core token fields.

// crates.io
use serde_json::Value;
// self
use crate::_prelude::*;

/// Immutable mapping of protocol-extension fields returned with a token.
///
/// Token endpoints may return fields beyond the core response parameters (`refresh_token`,
/// `id_token`, vendor claims, and so on). Those land here as arbitrary JSON values keyed by the
/// wire field name. The map is frozen at construction: entries are copied out of whatever
/// container the caller supplied, and no mutating accessor is exported. Cloning shares the
/// snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdditionalParameters(Arc<BTreeMap<String, Value>>);
impl AdditionalParameters {
	/// Builds a parameter map from any iterator of key/value pairs.
	///
	/// Later duplicates of a key win, matching JSON object semantics.
	pub fn new<I, K, V>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<Value>,
	{
		Self(Arc::new(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()))
	}

	/// Looks up a parameter by its wire field name.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Looks up a string-valued parameter, such as a forwarded `refresh_token`.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(Value::as_str)
	}

	/// Returns `true` when the parameter is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Iterator over the parameter names, in sorted order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Iterator over the parameter entries, in sorted key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no parameters were returned.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<BTreeMap<String, Value>> for AdditionalParameters {
	fn from(entries: BTreeMap<String, Value>) -> Self {
		Self(Arc::new(entries))
	}
}
impl<K, V> FromIterator<(K, V)> for AdditionalParameters
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
		Self::new(entries)
	}
}
