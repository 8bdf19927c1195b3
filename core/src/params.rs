use std::collections::BTreeMap;

use http::Method;

use crate::Error;

/// An order-irrelevant multimap from parameter name to one or more values.
///
/// The map is backed by a `BTreeMap`, so iteration always yields keys in
/// byte-wise ascending order regardless of insertion order. Canonicalization
/// builds directly on this: determinism is a property of the container, not
/// of a sort step that could drift between call sites.
///
/// Keys are compared case-sensitively. `Key` and `key` are two distinct
/// entries; dialects that classify keys case-insensitively do so on top of
/// this container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet {
    inner: BTreeMap<String, Vec<String>>,
}

impl ParamSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to a single `value`, replacing any existing values.
    ///
    /// Replacement is what makes re-signing idempotent: a second signing pass
    /// overwrites `Signature` and friends instead of accumulating them.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), vec![value.into()]);
    }

    /// Add one more `value` under `key`, keeping existing values.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Get all values for `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.inner.get(key).map(|v| v.as_slice())
    }

    /// Get the first value for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.inner.get(key).and_then(|v| v.first()).map(|v| v.as_str())
    }

    /// Check whether `key` is present (case-sensitive).
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Check whether any key matches `key` case-insensitively.
    pub fn contains_ignore_case(&self, key: &str) -> bool {
        self.inner.keys().any(|k| k.eq_ignore_ascii_case(key))
    }

    /// Find the first value for `key` compared case-insensitively.
    ///
    /// When a caller supplies the same logical name under two cases the
    /// byte-wise smallest key wins; callers are expected to use one canonical
    /// case per name.
    pub fn first_ignore_case(&self, key: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .and_then(|(_, v)| v.first())
            .map(|v| v.as_str())
    }

    /// Remove `key` and its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.inner.remove(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the set holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate entries in byte-wise ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ParamSet::new();
        for (k, v) in iter {
            set.append(k, v);
        }
        set
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ParamSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.append(k, v);
        }
    }
}

/// The complete input to one signing operation.
///
/// Constructed fresh per call and consumed once. Adapters never mutate the
/// context; they clone [`ParamSet`] and augment the clone, so one context may
/// be shared across concurrent signings.
#[derive(Debug, Clone)]
pub struct SigningContext {
    /// HTTP method.
    pub method: Method,
    /// Host, e.g. "sns.us-east-1.amazonaws.com". Lowercased in every
    /// string-to-sign, kept verbatim here.
    pub host: String,
    /// Request path starting with "/", e.g. "/" or "/bucket/object".
    pub uri: String,
    /// Request parameters to sign.
    pub params: ParamSet,
}

impl SigningContext {
    /// Build a signing context, validating the request shape.
    pub fn new(
        method: Method,
        host: impl Into<String>,
        uri: impl Into<String>,
        params: ParamSet,
    ) -> crate::Result<Self> {
        let host = host.into();
        let uri = uri.into();

        if host.is_empty() {
            return Err(Error::request_invalid("host must not be empty"));
        }
        if !uri.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "uri must start with '/', got {uri:?}"
            )));
        }

        Ok(Self {
            method,
            host,
            uri,
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_iteration_is_sorted() {
        let mut set = ParamSet::new();
        set.insert("Zulu", "1");
        set.insert("alpha", "2");
        set.insert("Alpha", "3");
        set.insert("AWSAccessKeyId", "4");
        set.insert("Action", "5");

        let keys: Vec<_> = set.iter().map(|(k, _)| k).collect();
        // Byte-wise ordinal order: uppercase sorts before lowercase,
        // and "AW" sorts before "Ac".
        assert_eq!(keys, vec!["AWSAccessKeyId", "Action", "Alpha", "Zulu", "alpha"]);
    }

    #[test]
    fn test_insert_replaces_append_accumulates() {
        let mut set = ParamSet::new();
        set.append("k", "a");
        set.append("k", "b");
        assert_eq!(set.get("k"), Some(&["a".to_string(), "b".to_string()][..]));

        set.insert("k", "c");
        assert_eq!(set.get("k"), Some(&["c".to_string()][..]));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let set: ParamSet = [("X-Amz-Date", "20120521")].into_iter().collect();
        assert!(set.contains_ignore_case("x-amz-date"));
        assert!(!set.contains("x-amz-date"));
        assert_eq!(set.first_ignore_case("X-AMZ-DATE"), Some("20120521"));
    }

    #[test]
    fn test_context_rejects_bad_shape() {
        let err = SigningContext::new(Method::GET, "", "/", ParamSet::new())
            .expect_err("empty host must be rejected");
        assert_eq!(err.kind(), crate::ErrorKind::RequestInvalid);

        let err = SigningContext::new(Method::GET, "example.com", "no-slash", ParamSet::new())
            .expect_err("relative uri must be rejected");
        assert_eq!(err.kind(), crate::ErrorKind::RequestInvalid);
    }
}
