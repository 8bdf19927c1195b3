use std::fmt::{Debug, Formatter};

/// Credential that holds the access key and secret key.
///
/// Supplied by the caller per signing call and never persisted by the
/// engine. Loading credentials from the environment or config files is the
/// caller's concern.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id for aws services.
    pub access_key_id: String,
    /// Secret access key for aws services.
    pub secret_access_key: String,
}

impl Credential {
    /// Build a credential from an access key id and secret access key.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }

    /// Check whether this credential can sign at all.
    pub fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &redact(&self.access_key_id))
            .field("secret_access_key", &redact(&self.secret_access_key))
            .finish()
    }
}

// Keep the first and last three characters so users can tell two redacted
// keys apart without leaking either.
fn redact(s: &str) -> String {
    let length = s.len();
    if length == 0 {
        "EMPTY".to_string()
    } else if length < 12 {
        "***".to_string()
    } else {
        format!("{}***{}", &s[..3], &s[length - 3..])
    }
}
