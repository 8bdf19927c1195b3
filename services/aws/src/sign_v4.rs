use awssign_core::hash::base64_hmac_sha256;
use awssign_core::time::{format_rfc3339, now, DateTime};
use awssign_core::{Error, ParamSet, SignParams, SigningContext};
use http::Method;
use log::debug;

use crate::canonical::{canonical_header_block, string_to_sign};
use crate::constants::{DATE_V4, EMPTY_PAYLOAD_SHA256, SIGNATURE, X_AMZ_CONTENT_SHA_256};
use crate::Credential;

/// Signer that implements the partial signature version 4 protocol.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Partial on purpose: only the canonical-request and string-to-sign
/// construction for the header-based variant is implemented. The canonical
/// query string line stays empty, and the payload hash is the caller's
/// `x-amz-content-sha256` parameter or the fixed empty-body digest -
/// completing either without verifying against the authoritative
/// specification would produce signatures that pass local tests and fail
/// real verification.
///
/// Two consumption paths exist: [`SignParams::sign_params`] returns the
/// augmented set for header-oriented requests (the caller pulls `Signature`
/// out), and [`V4Signer::presigned_url`] renders a ready-to-share URL with
/// the signature embedded in its query string.
#[derive(Debug, Default)]
pub struct V4Signer {
    time: Option<DateTime>,
}

impl V4Signer {
    /// Create a new V4 signer.
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

    /// Produce a pre-signed URL: the signed parameters, signature included,
    /// rendered as an `https` query string.
    ///
    /// Useful as a client-side link to a resource that must stay valid
    /// without further secret exchange, e.g. a download URL for one object.
    pub fn presigned_url(
        &self,
        req: &SigningContext,
        credential: &Credential,
    ) -> awssign_core::Result<String> {
        let params = self.sign_params(req, credential)?;

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, values) in params.iter() {
            for v in values {
                serializer.append_pair(k, v);
            }
        }

        Ok(format!("https://{}{}?{}", req.host, req.uri, serializer.finish()))
    }
}

impl SignParams for V4Signer {
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

        // The Date parameter always reflects the signing time, overwriting
        // any caller-supplied value.
        let now = self.time.unwrap_or_else(now);
        params.insert(DATE_V4, format_rfc3339(now));

        let canonical_request = canonical_request(&req.method, &req.uri, &params);
        debug!("calculated canonical request: {canonical_request}");

        let string_to_sign = string_to_sign(&req.method, &req.host, &req.uri, &canonical_request);
        debug!("calculated string to sign: {string_to_sign}");

        let signature = base64_hmac_sha256(
            credential.secret_access_key.as_bytes(),
            string_to_sign.as_bytes(),
        );
        params.insert(SIGNATURE, signature);

        Ok(params)
    }
}

/// Assemble the canonical request.
///
/// `METHOD \n uri \n <empty query line> \n header_block \n signed_headers \n
/// payload_hash`. The header block carries its own trailing newline, which
/// yields the blank line the protocol requires before the signed-header
/// list.
fn canonical_request(method: &Method, uri: &str, params: &ParamSet) -> String {
    let (header_block, signed_headers) = canonical_header_block(params);
    let payload_hash = params
        .first_ignore_case(X_AMZ_CONTENT_SHA_256)
        .unwrap_or(EMPTY_PAYLOAD_SHA256);

    format!(
        "{}\n{}\n\n{}\n{}\n{}",
        method.as_str(),
        uri,
        header_block,
        signed_headers,
        payload_hash
    )
}
