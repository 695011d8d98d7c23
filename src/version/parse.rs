//! Raw string -> `Version`

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::version::error::ParseError;
use crate::version::part::VersionPart;
use crate::version::types::Version;

/// Runs of anything that is neither a letter, a digit nor `_`.
/// `_` stays inside tokens so `release_candidate` resolves as one alias.
static DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}_]+").unwrap());

/// Split `raw` on delimiter runs, dropping empty tokens
pub fn tokenize(raw: &str) -> impl Iterator<Item = &str> {
    DELIMITERS.split(raw).filter(|token| !token.is_empty())
}

/// Parse a single token; see [`VersionPart::parse`]
pub fn parse_part(token: &str) -> VersionPart {
    VersionPart::parse(token)
}

/// Parse a loosely-structured version string such as `1.2.0`, `1.2.0-BETA` or `1.2.0.1`.
///
/// Fails only when the input contains no tokens at all.
pub fn parse_version(raw: &str) -> Result<Version, ParseError> {
    let parts: Vec<VersionPart> = tokenize(raw).map(parse_part).collect();
    debug!("Parsed version '{}' into {} parts", raw, parts.len());
    Version::new(raw, parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::stage::PreReleaseType;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.0", &["1", "2", "0"])]
    #[case("1.2.0-BETA", &["1", "2", "0", "BETA"])]
    #[case("v1.2", &["v1", "2"])]
    #[case("..1--2..", &["1", "2"])]
    #[case("4.0-release_candidate", &["4", "0", "release_candidate"])]
    #[case("1, 2, 0, b", &["1", "2", "0", "b"])]
    #[case("", &[])]
    #[case(" \t", &[])]
    fn tokenize_returns_expected(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(raw).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn parse_version_collects_parts_in_order() {
        let version = parse_version("1.2.0-BETA").unwrap();

        assert_eq!(
            version.parts(),
            &[
                VersionPart::Numeric(1),
                VersionPart::Numeric(2),
                VersionPart::Numeric(0),
                VersionPart::Stage(PreReleaseType::Beta),
            ]
        );
        assert_eq!(version.original_string(), "1.2.0-BETA");
    }

    #[rstest]
    #[case("")]
    #[case("...")]
    #[case("   ")]
    #[case("-.-/")]
    fn parse_version_rejects_input_without_tokens(#[case] raw: &str) {
        assert_eq!(
            parse_version(raw).unwrap_err(),
            ParseError::EmptyVersion(raw.to_string())
        );
    }

    #[test]
    fn parse_version_resolves_underscored_alias() {
        let version = parse_version("4.0-release_candidate").unwrap();

        assert_eq!(
            version.parts(),
            &[
                VersionPart::Numeric(4),
                VersionPart::Numeric(0),
                VersionPart::Stage(PreReleaseType::ReleaseCandidate),
            ]
        );
        assert_eq!(version, parse_version("4.0-rc").unwrap());
        assert!(version.precedes(&parse_version("4.0").unwrap()));
    }

    #[test]
    fn parse_version_keeps_unknown_tokens() {
        let version = parse_version("2.0-Hotfix").unwrap();
        assert_eq!(
            version.parts().last(),
            Some(&VersionPart::Unknown("Hotfix".to_string()))
        );
    }
}
