//! Vector tokenization, version detection, and the per-version parsers.
//!
//! Parsing is strict and total: every token is validated before any
//! arithmetic runs, and the first violation aborts with a [`CvssError`].

pub mod v2;
pub mod v3;
pub mod v4;

use std::collections::HashMap;

use crate::errors::CvssError;

/// Metric tokens extracted from a vector string.
///
/// Keys are case-sensitive and order-independent. Duplicate keys resolve to
/// the last occurrence.
#[derive(Debug)]
pub struct TokenMap<'a> {
    tokens: HashMap<&'a str, &'a str>,
}

impl<'a> TokenMap<'a> {
    /// Value of an optional metric, if present.
    pub fn optional(&self, metric: &str) -> Option<&'a str> {
        self.tokens.get(metric).copied()
    }

    /// Value of a required metric.
    pub fn require(&self, metric: &'static str) -> Result<&'a str, CvssError> {
        self.optional(metric).ok_or(CvssError::MissingMetric(metric))
    }
}

/// Split a vector string into metric tokens.
///
/// Every `/`-delimited segment must be `KEY:VALUE` with a non-empty key and
/// value; a trailing slash or a doubled slash therefore fails as malformed.
/// A leading `CVSS:<version>` segment belongs to version detection and is
/// not stored as a token.
pub fn tokenize(vector: &str) -> Result<TokenMap<'_>, CvssError> {
    let mut tokens = HashMap::new();

    for (index, segment) in vector.split('/').enumerate() {
        if index == 0 && segment.starts_with("CVSS:") {
            continue;
        }

        let (key, value) = segment.split_once(':').ok_or(CvssError::MalformedVector)?;
        if key.is_empty() || value.is_empty() || value.contains(':') {
            return Err(CvssError::MalformedVector);
        }
        tokens.insert(key, value);
    }

    Ok(TokenMap { tokens })
}

/// Supported CVSS specification versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V2,
    V30,
    V31,
    V40,
}

impl Version {
    /// Detect the version from the vector's `CVSS:` prefix.
    ///
    /// A bare vector with no prefix is a legacy 2.0 vector. The accepted
    /// tags are exact and case-sensitive; anything else under a `CVSS:`
    /// prefix is unsupported.
    pub fn detect(vector: &str) -> Result<Self, CvssError> {
        let Some(rest) = vector.strip_prefix("CVSS:") else {
            return Ok(Self::V2);
        };

        match rest.split('/').next().unwrap_or("") {
            "2" => Ok(Self::V2),
            "3.0" => Ok(Self::V30),
            "3.1" => Ok(Self::V31),
            "4.0" => Ok(Self::V40),
            _ => Err(CvssError::UnsupportedVersion),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "2.0",
            Self::V30 => "3.0",
            Self::V31 => "3.1",
            Self::V40 => "4.0",
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_key_value_pairs() {
        let map = tokenize("AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap();
        assert_eq!(map.optional("AV"), Some("N"));
        assert_eq!(map.optional("Au"), Some("N"));
        assert_eq!(map.optional("E"), None);
    }

    #[test]
    fn tokenize_skips_the_version_prefix() {
        let map = tokenize("CVSS:3.1/AV:N/AC:L").unwrap();
        assert_eq!(map.optional("CVSS"), None);
        assert_eq!(map.optional("AV"), Some("N"));
    }

    #[test]
    fn tokenize_keeps_multi_character_values() {
        let map = tokenize("AV:N/E:POC/RL:OF/U:Green").unwrap();
        assert_eq!(map.optional("E"), Some("POC"));
        assert_eq!(map.optional("U"), Some("Green"));
    }

    #[test]
    fn tokenize_rejects_trailing_slash() {
        let err = tokenize("CVSS:3.1/AV:A/AC:L/PR:L/UI:N/S:U/").unwrap_err();
        assert_eq!(err, CvssError::MalformedVector);
    }

    #[test]
    fn tokenize_rejects_empty_key_or_value() {
        assert_eq!(tokenize("AV:/AC:L").unwrap_err(), CvssError::MalformedVector);
        assert_eq!(tokenize(":N/AC:L").unwrap_err(), CvssError::MalformedVector);
        assert_eq!(tokenize("AV:N//AC:L").unwrap_err(), CvssError::MalformedVector);
        assert_eq!(tokenize("AVN/AC:L").unwrap_err(), CvssError::MalformedVector);
    }

    #[test]
    fn tokenize_last_duplicate_wins() {
        let map = tokenize("AV:N/AV:L").unwrap();
        assert_eq!(map.optional("AV"), Some("L"));
    }

    #[test]
    fn require_reports_the_missing_metric() {
        let map = tokenize("AV:N").unwrap();
        assert_eq!(map.require("AC").unwrap_err(), CvssError::MissingMetric("AC"));
    }

    #[test]
    fn detect_known_versions() {
        assert_eq!(Version::detect("CVSS:4.0/AV:N").unwrap(), Version::V40);
        assert_eq!(Version::detect("CVSS:3.1/AV:N").unwrap(), Version::V31);
        assert_eq!(Version::detect("CVSS:3.0/AV:N").unwrap(), Version::V30);
        assert_eq!(Version::detect("CVSS:2/AV:N").unwrap(), Version::V2);
    }

    #[test]
    fn detect_defaults_bare_vectors_to_v2() {
        assert_eq!(Version::detect("AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap(), Version::V2);
    }

    #[test]
    fn detect_rejects_unknown_tags() {
        for vector in ["CVSS:3/AV:N", "CVSS:1/AV:N", "CVSS:3.2/AV:N", "CVSS:2.0/AV:N", "CVSS:5/AV:N"] {
            assert_eq!(Version::detect(vector).unwrap_err(), CvssError::UnsupportedVersion);
        }
    }

    #[test]
    fn detect_is_case_sensitive() {
        // A lowercase prefix is not a version prefix at all; the vector is
        // treated as legacy v2 and will fail later on missing metrics.
        assert_eq!(Version::detect("cvss:3.1/AV:N").unwrap(), Version::V2);
    }
}
