//! Role claim extraction from an opaque bearer token.

use super::Role;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Derives the caller role from a bearer token.
///
/// Decodes the second `.`-delimited segment of the token as base64url JSON
/// and reads its `role` field. Any failure (missing segment, undecodable
/// base64, malformed JSON, absent or unknown role) degrades to `None`
/// rather than an error: a caller without a readable role simply gets no
/// role-gated UI.
///
/// The claim is unverified; the server re-validates every mutating action
/// regardless of what the client believes.
#[must_use]
pub fn role_from_token(token: &str) -> Option<Role> {
    let payload = token.split('.').nth(1)?;
    let decoded = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
    let role = claims.get("role")?.as_str()?;
    Role::try_from(role).ok()
}
