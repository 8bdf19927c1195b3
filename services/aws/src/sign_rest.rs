use awssign_core::hash::base64_hmac_sha256;
use awssign_core::time::{format_rfc3339, now, DateTime};
use awssign_core::{Error, ParamSet, SignParams, SigningContext};
use log::debug;

use crate::canonical::{canonical_query_string, rest_extract, string_to_sign};
use crate::constants::{DATE, SIGNATURE};
use crate::Credential;

/// Signer that implements the header-based REST signature protocol.
///
/// - [Signing and authenticating REST requests](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html)
///
/// Classifies `content-md5`, `content-type` and `x-amz*` parameters as
/// headers (case-insensitively), defaults a `date` header when neither
/// `date` nor `x-amz-date` is present, and signs the query-form
/// canonicalization of the full parameter set. Callers must use one
/// canonical case per header name; the same logical header under two cases
/// is not merged.
#[derive(Debug, Default)]
pub struct RestSigner {
    time: Option<DateTime>,
}

impl RestSigner {
    /// Create a new REST signer.
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

impl SignParams for RestSigner {
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
        params.remove(SIGNATURE);

        let extracted = rest_extract(&params);
        if !extracted.has_date {
            let now = self.time.unwrap_or_else(now);
            params.insert(DATE, format_rfc3339(now));
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
