// crates.io
use time::macros;
// self
use oauth2_token_core::{
	error::Error,
	response::{ResponseParseError, TokenResponse, parse_token_response},
	scope::ScopeSet,
	token::TokenType,
};

const ISSUED: time::OffsetDateTime = macros::datetime!(2025-11-10 12:00 UTC);

#[test]
fn provider_response_becomes_a_usable_token() {
	let body = br#"{
		"access_token": "ya29.a0AfH6SMC",
		"token_type": "Bearer",
		"expires_in": 3599,
		"scope": "openid email profile",
		"refresh_token": "1//0gKx",
		"id_token": "header.payload.sig"
	}"#;
	let token = parse_token_response(body, ISSUED)
		.expect("Provider-shaped response should parse successfully.");

	assert_eq!(token.token_type(), TokenType::Bearer);
	assert_eq!(token.authorization_header(), "Bearer ya29.a0AfH6SMC");
	assert_eq!(token.expires_at() - token.issued_at(), time::Duration::seconds(3_599));

	let required = ScopeSet::new(["email", "openid"])
		.expect("Required scope set should build successfully.");

	assert!(token.scopes().contains_all(&required), "Granted scopes must cover the request.");
	assert_eq!(token.additional_parameters().get_str("refresh_token"), Some("1//0gKx"));
	assert_eq!(token.additional_parameters().get_str("id_token"), Some("header.payload.sig"));
}

#[test]
fn lowercase_token_type_is_accepted() {
	let body = br#"{"access_token":"abc123","token_type":"bearer","expires_in":60}"#;
	let token =
		parse_token_response(body, ISSUED).expect("Lowercase token_type should be accepted.");

	assert_eq!(token.token_type(), TokenType::Bearer);
}

#[test]
fn absent_scope_field_yields_the_empty_set() {
	let body = br#"{"access_token":"abc123","token_type":"Bearer","expires_in":60}"#;
	let token = parse_token_response(body, ISSUED).expect("Scopeless response should parse.");

	assert!(token.scopes().is_empty());
	assert!(token.additional_parameters().is_empty());
}

#[test]
fn two_step_parsing_matches_the_one_call_helper() {
	let body = br#"{"access_token":"abc123","token_type":"Bearer","expires_in":60,"scope":"read"}"#;
	let via_helper = parse_token_response(body, ISSUED).expect("Helper parse should succeed.");
	let via_steps = TokenResponse::from_json_slice(body)
		.expect("Raw response should deserialize.")
		.into_access_token(ISSUED)
		.expect("Conversion should succeed.");

	assert_eq!(via_helper, via_steps);
}

#[test]
fn error_taxonomy_distinguishes_the_failure_stages() {
	let malformed = br#"{"access_token":"abc123""#;
	let unknown = br#"{"access_token":"abc123","token_type":"dpop","expires_in":60}"#;
	let missing = br#"{"access_token":"abc123","token_type":"Bearer"}"#;
	let bad_scope = br#"{"access_token":"a","token_type":"Bearer","expires_in":60,"scope":"   "}"#;

	assert!(matches!(
		parse_token_response(malformed, ISSUED),
		Err(Error::Response(ResponseParseError::Json { .. }))
	));
	assert!(matches!(
		parse_token_response(unknown, ISSUED),
		Err(Error::Response(ResponseParseError::UnknownTokenType(_)))
	));
	assert!(matches!(
		parse_token_response(missing, ISSUED),
		Err(Error::Response(ResponseParseError::MissingExpiresIn))
	));
	assert!(matches!(
		parse_token_response(bad_scope, ISSUED),
		Err(Error::Response(ResponseParseError::InvalidScope(_)))
	));
}
