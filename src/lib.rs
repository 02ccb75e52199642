//! Rust’s no-frills OAuth 2.0 token core—immutable access-token values, normalized scope sets,
//! and spec-faithful response parsing in one dependency-light crate.
//!
//! The crate models the access token as a frozen value: once built, a token carries its scheme,
//! credential material, issuance/expiry instants, granted scopes, and any protocol-extension
//! parameters, and never changes again. Issuance, signature verification, expiry enforcement,
//! storage, and transport all belong to the collaborators that produce or consume these values.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod params;
pub mod response;
pub mod scope;
pub mod token;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::{Error, Result};
}

pub use serde_json;
