use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Response from the OAuth token endpoint
///
/// This enum handles both a successful token grant and an MFA challenge
/// using serde's untagged feature.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LoginResponse {
    /// Tokens were issued
    Tokens(TokenResponse),
    /// The upstream requires a multi-factor code before issuing tokens
    Challenge(MfaChallenge),
}

/// Issued OAuth tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Bearer access token for authenticated requests
    pub access_token: String,
    /// Refresh token used to obtain a new access token
    pub refresh_token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    /// Token type (typically "Bearer")
    pub token_type: String,
    /// Granted scope
    #[serde(default)]
    pub scope: String,
}

impl TokenResponse {
    /// Computes the Unix timestamp at which the access token expires
    pub fn expires_at(&self) -> u64 {
        Utc::now().timestamp() as u64 + self.expires_in
    }
}

/// MFA challenge returned instead of tokens when the account requires it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MfaChallenge {
    /// Always true in a challenge response
    pub mfa_required: bool,
    /// Delivery mechanism for the code (e.g. "sms", "app")
    #[serde(default)]
    pub mfa_type: String,
}

/// Request body for the OAuth revoke endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RevokeTokenRequest {
    /// OAuth client identifier
    pub client_id: String,
    /// The refresh token being revoked
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_tokens() {
        let json = r#"{
            "access_token": "at-123",
            "refresh_token": "rt-456",
            "expires_in": 86400,
            "token_type": "Bearer",
            "scope": "internal"
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        match response {
            LoginResponse::Tokens(tokens) => {
                assert_eq!(tokens.access_token, "at-123");
                assert!(tokens.expires_at() > Utc::now().timestamp() as u64);
            }
            LoginResponse::Challenge(_) => panic!("expected tokens"),
        }
    }

    #[test]
    fn test_login_response_mfa_challenge() {
        let json = r#"{"mfa_required": true, "mfa_type": "sms"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        match response {
            LoginResponse::Challenge(challenge) => {
                assert!(challenge.mfa_required);
                assert_eq!(challenge.mfa_type, "sms");
            }
            LoginResponse::Tokens(_) => panic!("expected challenge"),
        }
    }
}
