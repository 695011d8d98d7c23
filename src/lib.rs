pub mod config;
pub mod version;

pub use version::{ParseError, PreReleaseType, Version, VersionPart, parse_part, parse_version};
