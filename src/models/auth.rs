use serde::{Deserialize, Serialize};

/// Response from the login and signup endpoints.
///
/// A present `access_token` is the caller's cue to call
/// `ApiClient::set_token`; the client itself never stores it implicitly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub success: Option<bool>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_response() {
        let json = r#"{"access_token": "tok-abc", "token_type": "bearer"}"#;
        let resp: AuthResponse = serde_json::from_str(json).expect("should parse");
        assert_eq!(resp.access_token.as_deref(), Some("tok-abc"));
        assert_eq!(resp.token_type.as_deref(), Some("bearer"));
        assert_eq!(resp.success, None);
    }

    #[test]
    fn test_parse_signup_response_without_token() {
        let json = r#"{"success": true, "message": "check your email"}"#;
        let resp: AuthResponse = serde_json::from_str(json).expect("should parse");
        assert_eq!(resp.access_token, None);
        assert_eq!(resp.success, Some(true));
    }
}
