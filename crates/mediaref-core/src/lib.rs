//! mediaref-core: shared types, ids, errors, and configuration.
//!
//! This crate is the foundational dependency for the other mediaref crates:
//!
//! - **Typed ids**: [`ProviderId`] (a sum type: IMDb strings vs positive
//!   integers), [`ProviderRef`], [`ExternalIds`], [`EpisodeSuffix`]
//! - **Media enums**: [`ProviderName`], [`ProviderKind`], [`MediaType`]
//! - **Media records**: [`MediaDetails`] as returned by enrichers
//! - **Configuration**: [`ParseOptions`] and [`NumericIdAssumption`]
//! - **Error handling**: [`Error`] and the [`Result`] alias
//!
//! # Examples
//!
//! ```
//! use mediaref_core::{ProviderKind, ProviderName, ProviderRef};
//!
//! let r = ProviderRef::numeric(ProviderName::Tmdb, ProviderKind::Movie, 550).unwrap();
//! assert_eq!(r.to_string(), "tmdb:movie:550");
//! assert_eq!(r.id.to_string(), "tmdb:550");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod media;

pub use config::{NumericIdAssumption, ParseOptions, ParseOptionsBuilder};
pub use error::{Error, Result};
pub use ids::*;
pub use media::*;
