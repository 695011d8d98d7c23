//! Version string parsing and ordering
//!
//! Turns loosely-structured version strings (`1.2.0`, `1.2.0-BETA`, `1.2.0.1`)
//! into ordered sequences of typed parts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Parse    │────▶│    Part     │────▶│    Stage    │
//! │ (tokenize)  │     │ (per token) │     │  (aliases)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Version   │◀────│   Checker   │
//! │  (compare)  │     │  (helpers)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`stage`]: Pre-release stages and the alias registry
//! - [`part`]: `VersionPart` variants, their ordering and renderings
//! - [`parse`]: Tokenizer and `parse_version`
//! - [`types`]: The `Version` aggregate
//! - [`checker`]: Comparison helpers over raw strings
//! - [`error`]: Error types for parsing and registry construction

pub mod checker;
pub mod error;
pub mod parse;
pub mod part;
pub mod stage;
pub mod types;

pub use error::{ParseError, RegistryError};
pub use parse::{parse_part, parse_version};
pub use part::VersionPart;
pub use stage::PreReleaseType;
pub use types::Version;
