//! Release-stability tags and the alias registry used to recognize them in text

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::version::error::RegistryError;

/// Release stage, declared in rank order: `Alpha < Beta < ReleaseCandidate < Release`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PreReleaseType {
    Alpha,
    Beta,
    ReleaseCandidate,
    Release,
}

impl PreReleaseType {
    /// All members in rank order
    pub const ALL: [PreReleaseType; 4] = [
        PreReleaseType::Alpha,
        PreReleaseType::Beta,
        PreReleaseType::ReleaseCandidate,
        PreReleaseType::Release,
    ];

    /// Position in [`PreReleaseType::ALL`]
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Whether this stage marks a development release
    pub fn is_unstable(self) -> bool {
        !matches!(self, PreReleaseType::Release)
    }

    /// Upper-snake identifier, e.g. `RELEASE_CANDIDATE`
    pub fn name(self) -> &'static str {
        match self {
            PreReleaseType::Alpha => "ALPHA",
            PreReleaseType::Beta => "BETA",
            PreReleaseType::ReleaseCandidate => "RELEASE_CANDIDATE",
            PreReleaseType::Release => "RELEASE",
        }
    }

    /// Lower-cased aliases recognized for this stage; the first entry is the lower-cased name.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            PreReleaseType::Alpha => &["alpha", "a", "unstable"],
            PreReleaseType::Beta => &["beta", "b", "dev", "prerelease", "snapshot"],
            PreReleaseType::ReleaseCandidate => &["release_candidate", "rc"],
            PreReleaseType::Release => &["release", "distribution", "dist", "stable"],
        }
    }

    /// Lexicographically smallest alias
    pub fn shortest_alias(self) -> &'static str {
        self.aliases()
            .iter()
            .copied()
            .min()
            .unwrap_or_else(|| self.aliases()[0])
    }

    /// Human-facing name: `Alpha`, `Beta`, `Release-candidate`, `Release`
    pub fn friendly_name(self) -> String {
        let name = self.name().to_lowercase().replace('_', "-");
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => name,
        }
    }
}

/// Immutable alias -> stage mapping, validated for alias disjointness on construction
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    mapping: HashMap<String, PreReleaseType>,
}

impl AliasRegistry {
    /// Build a registry from the declared aliases of `types`
    pub fn new(types: &[PreReleaseType]) -> Result<Self, RegistryError> {
        Self::from_entries(
            types
                .iter()
                .flat_map(|ty| ty.aliases().iter().map(move |alias| (*ty, *alias))),
        )
    }

    /// Build a registry from explicit `(stage, alias)` pairs.
    ///
    /// Aliases are lower-cased. An alias repeated for the same stage is accepted;
    /// an alias claimed by two different stages is an error.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (PreReleaseType, S)>,
        S: AsRef<str>,
    {
        let mut mapping = HashMap::new();

        for (ty, alias) in entries {
            let alias = alias.as_ref().to_lowercase();
            match mapping.entry(alias) {
                Entry::Vacant(slot) => {
                    slot.insert(ty);
                }
                Entry::Occupied(slot) if *slot.get() == ty => {}
                Entry::Occupied(slot) => {
                    return Err(RegistryError::AliasConflict {
                        alias: slot.key().clone(),
                        first: *slot.get(),
                        second: ty,
                    });
                }
            }
        }

        debug!("Built stage alias registry with {} aliases", mapping.len());
        Ok(Self { mapping })
    }

    /// Case-insensitive lookup
    pub fn resolve(&self, token: &str) -> Option<PreReleaseType> {
        self.mapping.get(&token.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

static REGISTRY: Lazy<AliasRegistry> = Lazy::new(|| {
    AliasRegistry::new(&PreReleaseType::ALL)
        .unwrap_or_else(|e| panic!("invalid built-in stage aliases: {e}"))
});

/// Resolve `token` against the process-wide registry of built-in stages
pub fn resolve(token: &str) -> Option<PreReleaseType> {
    REGISTRY.resolve(token)
}

/// The process-wide registry of built-in stages
pub fn registry() -> &'static AliasRegistry {
    &REGISTRY
}
