//! Time related utils.

use chrono::SecondsFormat;
use chrono::Utc;

use crate::Error;

/// DateTime in UTC, the only zone signing ever deals with.
pub type DateTime = chrono::DateTime<Utc>;

/// Return the current UTC time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a time as RFC 3339 without sub-second digits: "2012-05-21T21:16:38Z".
///
/// This is the timestamp format the legacy query and REST protocols expect,
/// and the one the remote verifier reproduces.
pub fn format_rfc3339(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC 3339 timestamp back into a [`DateTime`].
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::request_invalid(format!("invalid rfc3339 timestamp: {s}")).with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_rfc3339() {
        let t = parse_rfc3339("2012-05-21T21:16:38Z").expect("must parse");
        assert_eq!(format_rfc3339(t), "2012-05-21T21:16:38Z");
    }

    #[test]
    fn test_parse_rfc3339_invalid() {
        assert!(parse_rfc3339("Mon, 09 Sep 2011 23:36:00 GMT").is_err());
    }
}
