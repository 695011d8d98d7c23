//! Comparison helpers for collaborators that hold raw version strings

use std::cmp::Ordering;

use tracing::warn;

use crate::version::parse::parse_version;
use crate::version::types::Version;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    Latest,
    Outdated,
    Newer,
    Invalid,
}

/// Compare the current version to the latest known version.
///
/// Returns `Invalid` if either string has no tokens.
pub fn compare_versions(current_version: &str, latest_version: &str) -> CompareResult {
    let Ok(current) = parse_version(current_version).inspect_err(|e| {
        warn!("Invalid version format '{}': {}", current_version, e);
    }) else {
        return CompareResult::Invalid;
    };

    let Ok(latest) = parse_version(latest_version).inspect_err(|e| {
        warn!("Invalid version format '{}': {}", latest_version, e);
    }) else {
        return CompareResult::Invalid;
    };

    match current.compare_to(&latest) {
        Ordering::Less => CompareResult::Outdated,
        Ordering::Equal => CompareResult::Latest,
        Ordering::Greater => CompareResult::Newer,
    }
}

/// Greatest parseable version. Among versions that compare equal, the first wins.
pub fn latest_version(available_versions: &[String]) -> Option<Version> {
    available_versions
        .iter()
        .filter_map(|raw| {
            parse_version(raw)
                .inspect_err(|e| warn!("Skipping invalid version '{}': {}", raw, e))
                .ok()
        })
        .reduce(|best, candidate| {
            if candidate.supersedes(&best) {
                candidate
            } else {
                best
            }
        })
}

/// Stable ascending insertion sort by [`Version::compare_to`].
///
/// `compare_to` is not transitive across `Numeric`/`Unknown` mixes, so
/// `slice::sort_by` may panic on it. Afterwards no element precedes its left neighbour.
pub fn sort_versions(versions: &mut [Version]) {
    for i in 1..versions.len() {
        let mut j = i;
        while j > 0 && versions[j].precedes(&versions[j - 1]) {
            versions.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.0", "1.2.0", CompareResult::Latest)]
    #[case("1.2.0", "1.2.0.0", CompareResult::Latest)]
    #[case("1.2.0", "1.2.0.1", CompareResult::Outdated)]
    #[case("1.2.0-BETA", "1.2.0", CompareResult::Outdated)]
    #[case("1.2.0", "1.2.0-BETA", CompareResult::Newer)]
    #[case("2.0", "1.9", CompareResult::Newer)]
    #[case("", "1.0", CompareResult::Invalid)]
    #[case("1.0", "...", CompareResult::Invalid)]
    fn compare_versions_returns_expected(
        #[case] current: &str,
        #[case] latest: &str,
        #[case] expected: CompareResult,
    ) {
        assert_eq!(compare_versions(current, latest), expected);
    }

    #[rstest]
    #[case(&["1.0", "1.2.0-rc", "1.1"], Some("1.2.0-rc"))]
    #[case(&["1.2.0-rc", "1.2.0", "1.2.0-beta"], Some("1.2.0"))]
    #[case(&["1.2.0", "1.2.0.0"], Some("1.2.0"))]
    #[case(&["...", "0.1"], Some("0.1"))]
    #[case(&["", "---"], None)]
    #[case(&[], None)]
    fn latest_version_returns_expected(#[case] available: &[&str], #[case] expected: Option<&str>) {
        let available: Vec<String> = available.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            latest_version(&available).map(|v| v.original_string().to_string()),
            expected.map(|s| s.to_string())
        );
    }

    #[test]
    fn sort_versions_orders_ascending() {
        let mut versions: Vec<Version> = ["1.2.0", "1.2.0-beta", "1.10", "1.2.0.1", "1.2.0-alpha"]
            .iter()
            .map(|raw| raw.parse().unwrap())
            .collect();

        sort_versions(&mut versions);

        let sorted: Vec<&str> = versions.iter().map(Version::original_string).collect();
        assert_eq!(
            sorted,
            vec!["1.2.0-alpha", "1.2.0-beta", "1.2.0", "1.2.0.1", "1.10"]
        );
    }

    #[test]
    fn sort_versions_handles_mixed_numeric_and_unknown_tokens() {
        let raw: Vec<String> = (0..64u32)
            .map(|i| {
                let n = (i * 37) % 23;
                if i % 3 == 0 {
                    format!("u{n}")
                } else {
                    n.to_string()
                }
            })
            .collect();
        let mut versions: Vec<Version> = raw.iter().map(|r| r.parse().unwrap()).collect();

        sort_versions(&mut versions);

        assert_eq!(versions.len(), raw.len());
        let mut sorted: Vec<&str> = versions.iter().map(Version::original_string).collect();
        let mut expected: Vec<&str> = raw.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        expected.sort_unstable();
        assert_eq!(sorted, expected);

        for pair in versions.windows(2) {
            assert!(!pair[1].precedes(&pair[0]));
        }
    }
}
