use std::fmt;

/// Bearer token for the provider's management API.
///
/// Formatting never reveals the value; call [`ServiceToken::expose`] at the point of use.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceToken(String);

impl ServiceToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for ServiceToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Debug for ServiceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ServiceToken(<redacted>)")
    }
}

impl fmt::Display for ServiceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_redacts_value() {
        let token = ServiceToken::new("eyJhbGciOi.secret");

        assert_eq!(format!("{token}"), "<redacted>");
        assert!(!format!("{token:?}").contains("secret"));
        assert_eq!(token.expose(), "eyJhbGciOi.secret");
    }

    #[test]
    fn whitespace_token_is_blank() {
        assert!(ServiceToken::new("  \t").is_blank());
        assert!(!ServiceToken::new("t").is_blank());
    }
}
