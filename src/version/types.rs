//! The `Version` aggregate: ordering, equality, hashing and renderings

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::ParseError;
use crate::version::parse::parse_version;
use crate::version::part::VersionPart;

/// Separator used by [`Version::data_string`]
pub const DEFAULT_DATA_SEPARATOR: &str = ", ";

const HASH_SEED: u64 = 17;
const HASH_PRIME: u64 = 31;

/// An immutable, non-empty sequence of parts plus the string it was parsed from.
///
/// Equality and hashing consider only the parts. `compare_to` may report
/// `Ordering::Equal` for versions that are not `==` (e.g. `1.2.0` and `1.2.0.0`),
/// which is why `Ord` is not implemented.
#[derive(Debug, Clone)]
pub struct Version {
    original: String,
    parts: Vec<VersionPart>,
}

impl Version {
    pub fn new(original: impl Into<String>, parts: Vec<VersionPart>) -> Result<Self, ParseError> {
        let original = original.into();
        if parts.is_empty() {
            return Err(ParseError::EmptyVersion(original));
        }
        Ok(Self { original, parts })
    }

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        parse_version(raw)
    }

    pub fn parts(&self) -> &[VersionPart] {
        &self.parts
    }

    /// The exact input this version was parsed from
    pub fn original_string(&self) -> &str {
        &self.original
    }

    /// Total comparison over part sequences.
    ///
    /// Parts are compared pairwise over the common prefix. When one side is
    /// longer, its first extra part decides via
    /// [`VersionPart::compare_when_not_specified`], negated if it belongs to `other`.
    pub fn compare_to(&self, other: &Version) -> Ordering {
        for (part, other_part) in self.parts.iter().zip(&other.parts) {
            match part.compare_to(other_part) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }

        let common = self.parts.len().min(other.parts.len());
        match self.parts.len().cmp(&other.parts.len()) {
            Ordering::Equal => Ordering::Equal,
            Ordering::Greater => self.parts[common].compare_when_not_specified(),
            Ordering::Less => other.parts[common].compare_when_not_specified().reverse(),
        }
    }

    pub fn supersedes(&self, other: &Version) -> bool {
        self.compare_to(other) == Ordering::Greater
    }

    pub fn precedes(&self, other: &Version) -> bool {
        self.compare_to(other) == Ordering::Less
    }

    /// Any two versions can be ordered
    pub fn can_be_compared_to(&self, _other: &Version) -> bool {
        true
    }

    /// Human-facing rendering: friendly part strings joined by [`DEFAULT_DATA_SEPARATOR`].
    ///
    /// Parts render the same in short and long form.
    pub fn as_string(&self, prefix: bool, short: bool) -> String {
        let joined = self
            .parts
            .iter()
            .map(|part| part.friendly_string(short))
            .collect::<Vec<_>>()
            .join(DEFAULT_DATA_SEPARATOR);

        if prefix { format!("v{joined}") } else { joined }
    }

    /// `as_string` with the `v` prefix
    pub fn friendly_string(&self, short: bool) -> String {
        self.as_string(true, short)
    }

    /// Canonical persisted form joined by [`DEFAULT_DATA_SEPARATOR`].
    ///
    /// Re-parsing preserves variant and rank of every part except a
    /// `Release` stage, whose empty token is dropped.
    pub fn data_string(&self) -> String {
        self.data_string_with(DEFAULT_DATA_SEPARATOR)
    }

    pub fn data_string_with(&self, separator: &str) -> String {
        self.parts
            .iter()
            .map(VersionPart::data_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Order-sensitive accumulator over part hashes
    pub fn hash_code(&self) -> u64 {
        self.parts.iter().fold(HASH_SEED, |acc, part| {
            acc.wrapping_mul(HASH_PRIME).wrapping_add(part.hash_code())
        })
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.friendly_string(false))
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.data_string())
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_version(&raw).map_err(serde::de::Error::custom)
    }
}
