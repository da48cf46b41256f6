use crate::constants::DEVICE_TOKEN_LENGTH;

/// Generates a device token sent with login requests.
///
/// The upstream API uses the device token to pair MFA approvals with the
/// requesting client. A fresh token is generated per [`crate::session::auth::Auth`]
/// instance so that sessions never share device identity.
pub fn generate_device_token() -> String {
    let alphabet: Vec<char> = "abcdef0123456789".chars().collect();
    nanoid::nanoid!(DEVICE_TOKEN_LENGTH, &alphabet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_token_shape() {
        let token = generate_device_token();
        assert_eq!(token.len(), DEVICE_TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_device_tokens_are_unique() {
        assert_ne!(generate_device_token(), generate_device_token());
    }
}
