use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Parameter names written back by the signing dialects.
pub const SIGNATURE: &str = "Signature";
pub const SIGNATURE_VERSION: &str = "SignatureVersion";
pub const SIGNATURE_METHOD: &str = "SignatureMethod";
pub const AWS_ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const TIMESTAMP: &str = "Timestamp";
pub const DATE: &str = "date";
pub const DATE_V4: &str = "Date";

// Header names the REST dialect classifies on (always compared lowercased).
pub const X_AMZ_PREFIX: &str = "x-amz";
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const CONTENT_MD5: &str = "content-md5";
pub const CONTENT_TYPE: &str = "content-type";

/// Hex SHA-256 of the empty body.
///
/// The V4 dialect substitutes this fixed value when the caller supplies no
/// payload hash. It is a documented placeholder: the engine never hashes a
/// body itself.
pub const EMPTY_PAYLOAD_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
///
/// The remote verifier recomputes signatures with exactly this set, so a
/// generic URL encoder (space as '+', '~' escaped) silently breaks
/// verification.
pub static UNRESERVED_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
