use awssign_core::hash::base64_hmac_sha256;
use awssign_core::time::{format_rfc3339, now, DateTime};
use awssign_core::{Error, ParamSet, SignParams, SigningContext};
use log::debug;

use crate::canonical::{canonical_query_string, string_to_sign};
use crate::constants::{
    AWS_ACCESS_KEY_ID, SIGNATURE, SIGNATURE_METHOD, SIGNATURE_VERSION, TIMESTAMP,
};
use crate::Credential;

/// Signer that implements the query-string signature version 2 protocol.
///
/// - [Signature Version 2 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-2.html)
///
/// Ensures `SignatureVersion`, `SignatureMethod`, `AWSAccessKeyId` and
/// `Timestamp` are present, canonicalizes every parameter in query form and
/// writes the computed `Signature` into the returned set. A caller-supplied
/// `Timestamp` is preserved verbatim.
#[derive(Debug, Default)]
pub struct QuerySigner {
    time: Option<DateTime>,
}

impl QuerySigner {
    /// Create a new query/V2 signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub(crate) fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

impl SignParams for QuerySigner {
    type Credential = Credential;

    fn sign_params(
        &self,
        req: &SigningContext,
        credential: &Self::Credential,
    ) -> awssign_core::Result<ParamSet> {
        if !credential.is_valid() {
            return Err(Error::credential_invalid(
                "access key id and secret access key must both be set",
            ));
        }

        let mut params = req.params.clone();
        // A prior signature never participates in the new one.
        params.remove(SIGNATURE);

        params.insert(SIGNATURE_VERSION, "2");
        params.insert(SIGNATURE_METHOD, "HmacSHA256");
        params.insert(AWS_ACCESS_KEY_ID, credential.access_key_id.clone());
        if !params.contains(TIMESTAMP) {
            let now = self.time.unwrap_or_else(now);
            params.insert(TIMESTAMP, format_rfc3339(now));
        }

        let canonical = canonical_query_string(&params);
        let string_to_sign = string_to_sign(&req.method, &req.host, &req.uri, &canonical);
        debug!("calculated string to sign: {string_to_sign}");

        let signature = base64_hmac_sha256(
            credential.secret_access_key.as_bytes(),
            string_to_sign.as_bytes(),
        );
        params.insert(SIGNATURE, signature);

        Ok(params)
    }
}
