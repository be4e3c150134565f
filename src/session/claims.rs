//! Access-token claim decoding.
//!
//! Tokens are issued and verified by the service. The console only reads the
//! payload segment to learn who is signed in; no signature check happens here.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::{ConsoleError, ConsoleResult};
use crate::models::User;

/// Decodes the user claims from a JWT access token.
///
/// # Example
///
/// ```
/// use base64::Engine;
/// use base64::engine::general_purpose::URL_SAFE_NO_PAD;
/// use fund_disbursement::models::Role;
/// use fund_disbursement::session::decode_claims;
///
/// let payload = URL_SAFE_NO_PAD.encode(
///     r#"{"id":1,"role":"ADMIN","sub":"admin@example.com","iat":1,"exp":2}"#,
/// );
/// let token = format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", payload);
/// let user = decode_claims(&token).unwrap();
/// assert_eq!(user.role, Role::Admin);
/// ```
pub fn decode_claims(token: &str) -> ConsoleResult<User> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) if !payload.is_empty() => payload,
        _ => {
            return Err(ConsoleError::InvalidToken {
                message: "expected three dot-separated segments".to_string(),
            });
        }
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ConsoleError::InvalidToken {
            message: format!("payload is not base64url: {}", e),
        })?;

    serde_json::from_slice(&bytes).map_err(|e| ConsoleError::InvalidToken {
        message: format!("payload is not a claim set: {}", e),
    })
}

#[cfg(test)]
pub(crate) fn encode_unsigned_token(user: &User) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(user).expect("user serialises"));
    format!("{}.{}.", header, payload)
}
