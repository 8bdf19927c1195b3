//! Canonicalization: the deterministic rendering of a parameter set into the
//! exact bytes the remote verifier recomputes.
//!
//! All three dialects share one skeleton: keys in byte-wise ascending order,
//! multiple values joined with `,` without re-escaping the separator. They
//! differ in which keys participate and how an entry is rendered:
//!
//! - query form renders `key=value` entries joined with `&`, values
//!   percent-encoded individually;
//! - header form renders `lowercase(key):value\n` lines with values left
//!   unescaped, paired with the `;`-joined signed-header-name list.
//!
//! Keys differing only by case stay distinct sort entries. The REST
//! extraction lowercases keys before classifying, so a caller supplying one
//! logical header under two cases gets whichever sorts last; one canonical
//! case per header name is a caller obligation, not something we normalize.

use std::borrow::Cow;

use awssign_core::ParamSet;
use http::Method;
use percent_encoding::utf8_percent_encode;

use crate::constants::{
    CONTENT_MD5, CONTENT_TYPE, DATE, UNRESERVED_ENCODE_SET, X_AMZ_DATE, X_AMZ_PREFIX,
};

/// Percent-encode a value per RFC 3986 unreserved-character rules.
///
/// Every byte outside `[A-Za-z0-9]` and `- _ . ~` becomes `%XX` with
/// uppercase hex; multi-byte UTF-8 sequences are escaped byte by byte. Total
/// function, space is `%20` and never `+`.
pub fn percent_encode(s: &str) -> Cow<'_, str> {
    utf8_percent_encode(s, &UNRESERVED_ENCODE_SET).into()
}

/// Render the query-form canonical string: `k=v1,v2&k2=v`.
///
/// Keys are taken verbatim; only values are encoded.
pub fn canonical_query_string(params: &ParamSet) -> String {
    let mut s = String::with_capacity(256);

    for (idx, (k, values)) in params.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        for (j, v) in values.iter().enumerate() {
            if j != 0 {
                s.push(',');
            }
            s.push_str(&percent_encode(v));
        }
    }

    s
}

/// Render the header-form canonical block plus the signed-header-name list.
///
/// Returns `("k1:v\nk2:v\n", "k1;k2")`. Entries keep the byte-wise order of
/// the original-case keys and are lowercased only at render time, so the
/// block reproduces the historical protocol even when that order differs
/// from the lowercased order.
pub fn canonical_header_block(params: &ParamSet) -> (String, String) {
    let mut block = String::with_capacity(256);
    let mut names = Vec::with_capacity(params.len());

    for (k, values) in params.iter() {
        let lower = k.to_ascii_lowercase();
        block.push_str(&lower);
        block.push(':');
        for (j, v) in values.iter().enumerate() {
            if j != 0 {
                block.push(',');
            }
            block.push_str(v);
        }
        block.push('\n');
        names.push(lower);
    }

    (block, names.join(";"))
}

/// Headers the REST dialect extracts from a parameter set.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RestHeaders {
    /// `content-md5`, `content-type` and `x-amz*` entries, keys lowercased.
    pub headers: ParamSet,
    /// Whether a `date` or `x-amz-date` header was present under any case.
    pub has_date: bool,
}

/// Classify parameters under the REST header dialect.
pub(crate) fn rest_extract(params: &ParamSet) -> RestHeaders {
    let mut out = RestHeaders::default();

    for (k, values) in params.iter() {
        let lower = k.to_ascii_lowercase();
        if lower == DATE || lower == X_AMZ_DATE {
            out.has_date = true;
        }
        if lower.starts_with(X_AMZ_PREFIX) || lower == CONTENT_MD5 || lower == CONTENT_TYPE {
            for v in values {
                out.headers.append(lower.clone(), v.clone());
            }
        }
    }

    out
}

/// Assemble the query/REST string-to-sign.
///
/// `METHOD \n lowercase(host) \n uri \n canonical_body` - the exact
/// multi-line layout the verifier rebuilds on its side.
pub fn string_to_sign(method: &Method, host: &str, uri: &str, canonical_body: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        method.as_str(),
        host.to_lowercase(),
        uri,
        canonical_body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("", ""; "empty input stays empty")]
    #[test_case("abcXYZ019", "abcXYZ019"; "alphanumerics pass through")]
    #[test_case("-_.~", "-_.~"; "unreserved marks pass through")]
    #[test_case(" ", "%20"; "space is percent twenty not plus")]
    #[test_case("/", "%2F"; "slash is escaped")]
    #[test_case("a+b=c&d", "a%2Bb%3Dc%26d"; "query metacharacters are escaped")]
    #[test_case("arn:aws:sns", "arn%3Aaws%3Asns"; "colons are escaped")]
    #[test_case("\u{65e5}", "%E6%97%A5"; "multi byte utf8 escaped byte by byte")]
    fn test_percent_encode(input: &str, expected: &str) {
        assert_eq!(percent_encode(input), expected);
    }

    #[test]
    fn test_canonical_query_string_sorts_and_joins() {
        let mut params = ParamSet::new();
        params.insert("Message", "Hi Test");
        params.insert("Action", "Publish");
        params.append("Attr", "a b");
        params.append("Attr", "c,d");

        // Multiple values join with a bare comma; the comma inside a value
        // is escaped, the separator never is.
        assert_eq!(
            canonical_query_string(&params),
            "Action=Publish&Attr=a%20b,c%2Cd&Message=Hi%20Test"
        );
    }

    #[test]
    fn test_canonical_query_string_is_insertion_order_independent() {
        let forward: ParamSet = [("A", "1"), ("B", "2"), ("C", "3")].into_iter().collect();
        let reverse: ParamSet = [("C", "3"), ("B", "2"), ("A", "1")].into_iter().collect();

        assert_eq!(
            canonical_query_string(&forward),
            canonical_query_string(&reverse)
        );
    }

    #[test]
    fn test_canonical_query_string_keeps_case_distinct_keys() {
        let params: ParamSet = [("key", "lower"), ("Key", "upper")].into_iter().collect();
        assert_eq!(canonical_query_string(&params), "Key=upper&key=lower");
    }

    #[test]
    fn test_canonical_header_block() {
        let params: ParamSet = [
            ("Host", "host.foo.com"),
            ("Date", "Mon, 09 Sep 2011 23:36:00 GMT"),
        ]
        .into_iter()
        .collect();

        let (block, names) = canonical_header_block(&params);
        assert_eq!(block, "date:Mon, 09 Sep 2011 23:36:00 GMT\nhost:host.foo.com\n");
        assert_eq!(names, "date;host");
    }

    #[test]
    fn test_rest_extract_classifies_case_insensitively() {
        let params: ParamSet = [
            ("X-Amz-Acl", "private"),
            ("Content-Type", "text/plain"),
            ("Content-MD5", "digest"),
            ("Action", "PutObject"),
        ]
        .into_iter()
        .collect();

        let extracted = rest_extract(&params);
        assert!(!extracted.has_date);
        assert_eq!(extracted.headers.len(), 3);
        assert_eq!(extracted.headers.first("x-amz-acl"), Some("private"));
        assert_eq!(extracted.headers.first("content-type"), Some("text/plain"));
        assert_eq!(extracted.headers.first("content-md5"), Some("digest"));
        assert!(!extracted.headers.contains("Action"));
    }

    #[test_case("date"; "lowercase date")]
    #[test_case("Date"; "capitalized date")]
    #[test_case("X-Amz-Date"; "amz date header")]
    fn test_rest_extract_detects_date(key: &str) {
        let params: ParamSet = [(key, "2012-05-21T21:16:38Z")].into_iter().collect();
        assert!(rest_extract(&params).has_date);
    }

    #[test]
    fn test_string_to_sign_lowercases_host_only() {
        let sts = string_to_sign(&Method::GET, "SNS.US-EAST-1.Amazonaws.Com", "/Path", "A=1");
        assert_eq!(sts, "GET\nsns.us-east-1.amazonaws.com\n/Path\nA=1");
    }
}
