use thiserror::Error;

use crate::version::stage::PreReleaseType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Version is empty: {0:?}")]
    EmptyVersion(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Alias '{alias}' is claimed by both {first:?} and {second:?}")]
    AliasConflict {
        alias: String,
        first: PreReleaseType,
        second: PreReleaseType,
    },
}
