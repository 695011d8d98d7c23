//! Typed version components and the token parser that produces them

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::version::stage::{self, PreReleaseType};

/// One parsed unit of a version string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum VersionPart {
    Numeric(u64),
    Stage(PreReleaseType),
    Unknown(String),
}

impl VersionPart {
    /// Parse a single token. Never fails.
    ///
    /// - non-negative base-10 integer -> `Numeric`
    /// - known stage alias (any case) -> `Stage`
    /// - anything else -> `Unknown`, case preserved
    pub fn parse(token: &str) -> VersionPart {
        if let Ok(number @ 0..) = token.parse::<i64>() {
            return VersionPart::Numeric(number as u64);
        }

        if let Some(ty) = stage::resolve(token) {
            return VersionPart::Stage(ty);
        }

        VersionPart::Unknown(token.to_string())
    }

    /// Whether both parts are the same variant
    pub fn can_be_compared_to(&self, other: &VersionPart) -> bool {
        matches!(
            (self, other),
            (VersionPart::Numeric(_), VersionPart::Numeric(_))
                | (VersionPart::Stage(_), VersionPart::Stage(_))
                | (VersionPart::Unknown(_), VersionPart::Unknown(_))
        )
    }

    /// Positional comparison.
    ///
    /// `Numeric` always outranks `Stage`. Every other cross-variant pair compares equal.
    pub fn compare_to(&self, other: &VersionPart) -> Ordering {
        match (self, other) {
            (VersionPart::Numeric(a), VersionPart::Numeric(b)) => a.cmp(b),
            (VersionPart::Numeric(_), VersionPart::Stage(_)) => Ordering::Greater,
            (VersionPart::Stage(_), VersionPart::Numeric(_)) => Ordering::Less,
            (VersionPart::Stage(a), VersionPart::Stage(b)) => a.cmp(b),
            (VersionPart::Unknown(a), VersionPart::Unknown(b)) => a.cmp(b),
            (VersionPart::Numeric(_), VersionPart::Unknown(_))
            | (VersionPart::Stage(_), VersionPart::Unknown(_))
            | (VersionPart::Unknown(_), VersionPart::Numeric(_))
            | (VersionPart::Unknown(_), VersionPart::Stage(_)) => Ordering::Equal,
        }
    }

    /// What this part contributes when the other version has no part at its position.
    ///
    /// - `1.2.0 = 1.2.0.0`
    /// - `1.2.0 < 1.2.0.1`
    /// - `1.2.0 > 1.2.0-BETA`
    pub fn compare_when_not_specified(&self) -> Ordering {
        match self {
            VersionPart::Numeric(n) => n.cmp(&0),
            VersionPart::Stage(ty) if ty.is_unstable() => Ordering::Less,
            VersionPart::Stage(_) => Ordering::Greater,
            VersionPart::Unknown(_) => Ordering::Greater,
        }
    }

    /// Canonical persisted token. A bare release carries no marker.
    ///
    /// The empty `Release` token does not survive re-parsing, so a version
    /// ending in a release stage orders below itself after a round trip.
    pub fn data_string(&self) -> String {
        match self {
            VersionPart::Numeric(n) => n.to_string(),
            VersionPart::Stage(PreReleaseType::Release) => String::new(),
            VersionPart::Stage(ty) => ty.shortest_alias().to_string(),
            VersionPart::Unknown(token) => token.clone(),
        }
    }

    /// Display token. `short` is accepted for API parity; parts render the same either way.
    pub fn friendly_string(&self, _short: bool) -> String {
        match self {
            VersionPart::Numeric(n) => n.to_string(),
            VersionPart::Stage(ty) => ty.friendly_name(),
            VersionPart::Unknown(token) => token.clone(),
        }
    }

    /// Stable per-part hash, consistent with `==`
    pub fn hash_code(&self) -> u64 {
        match self {
            VersionPart::Numeric(n) => *n,
            VersionPart::Stage(ty) => ty.rank() as u64,
            VersionPart::Unknown(token) => token
                .chars()
                .fold(0u64, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u64)),
        }
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.friendly_string(false))
    }
}
