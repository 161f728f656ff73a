//! CVSS vector parsing and scoring.
//!
//! Parses Common Vulnerability Scoring System vector strings across the
//! 2.0, 3.0, 3.1 and 4.0 specification versions and computes the Base,
//! Temporal and Environmental scores with reference-exact rounding.
//!
//! ```
//! use cvss_engine::generate_scores;
//!
//! let result = generate_scores("CVSS:3.1/AV:A/AC:L/PR:L/UI:N/S:U/C:H/I:H/A:H").unwrap();
//! assert_eq!(result.base_score, 8.0);
//! ```
//!
//! The engine is a pure function of the vector string: no I/O, no shared
//! state, safe to call concurrently. Invalid input is the only failure
//! mode, reported as [`CvssError`].

pub mod calculators;
pub mod errors;
pub mod models;
pub mod parsers;

pub use errors::CvssError;
pub use models::score::{ScoreResult, SeverityRating};
pub use parsers::Version;

use models::v3::Revision;

/// Parse a CVSS vector string and compute its scores.
///
/// This is the validated entry point composing tokenization, version
/// detection, the version's parser and its calculator. A vector with no
/// `CVSS:` prefix is scored as a legacy 2.0 vector.
pub fn generate_scores(vector: &str) -> Result<ScoreResult, CvssError> {
    let version = Version::detect(vector)?;
    let tokens = parsers::tokenize(vector)?;
    tracing::debug!(%version, "scoring CVSS vector");

    match version {
        Version::V2 => {
            let metrics = parsers::v2::parse(&tokens)?;
            Ok(calculators::v2::score(&metrics))
        }
        Version::V30 => {
            let metrics = parsers::v3::parse(&tokens, Revision::V30)?;
            Ok(calculators::v3::score(&metrics))
        }
        Version::V31 => {
            let metrics = parsers::v3::parse(&tokens, Revision::V31)?;
            Ok(calculators::v3::score(&metrics))
        }
        Version::V40 => {
            let metrics = parsers::v4::parse(&tokens)?;
            Ok(calculators::v4::score(&metrics))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_the_version_prefix() {
        assert_eq!(
            generate_scores("CVSS:3.1/AV:A/AC:L/PR:L/UI:N/S:U/C:H/I:H/A:H")
                .unwrap()
                .base_score,
            8.0
        );
        assert_eq!(
            generate_scores("CVSS:2/AV:N/AC:L/Au:N/C:C/I:C/A:C")
                .unwrap()
                .base_score,
            10.0
        );
    }

    #[test]
    fn bare_vectors_score_as_v2() {
        let bare = generate_scores("AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap();
        let tagged = generate_scores("CVSS:2/AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap();
        assert_eq!(bare, tagged);
    }

    #[test]
    fn scoring_is_deterministic() {
        let vector = "CVSS:4.0/AV:L/AC:L/AT:P/PR:L/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N";
        assert_eq!(generate_scores(vector).unwrap(), generate_scores(vector).unwrap());
    }

    #[test]
    fn unsupported_version_is_rejected_before_parsing() {
        let err = generate_scores("CVSS:3/AV:P/AC:H/PR:H/UI:R/S:U/C:N/I:N/A:N").unwrap_err();
        assert_eq!(err, CvssError::UnsupportedVersion);
    }
}
