//! # mediaref
//!
//! Canonical media identifiers and inter-provider id resolution.
//!
//! This facade re-exports the workspace crates:
//!
//! - `mediaref-core`: typed ids, media records, errors, and [`ParseOptions`]
//! - `mediaref-ids`: id grammar, extraction, canonicalization, and coercion
//! - `mediaref-router`: breadth-first resolution and enrichment across providers
//!
//! ```
//! use mediaref::{coerce_provider_ref, parse_media_id_input, NumericIdAssumption, ParseOptions, ProviderKind};
//!
//! let parsed = parse_media_id_input("tmdb:movie:550", &ParseOptions::default());
//! assert_eq!(parsed.canonical_id.as_deref(), Some("tmdb:550"));
//!
//! let r = coerce_provider_ref("tt0137523", ProviderKind::Movie, NumericIdAssumption::None).unwrap();
//! assert_eq!(r.to_string(), "imdb:movie:tt0137523");
//! ```

pub mod telemetry;

pub use mediaref_core::{
    EpisodeSuffix, Error, ExternalIds, ImdbId, LooseProviderRef, MediaDetails, MediaType,
    NumericIdAssumption, ParseOptions, ProviderId, ProviderKind, ProviderName, ProviderRef, Result,
};
pub use mediaref_ids::{
    build_canonical_id, build_canonical_media_id, build_episode_id, coerce_provider_ref,
    coerce_provider_ref_for_media_type, format_id_for_id_prefixes, normalize_addon_id,
    normalize_id_for_key, parse_episode_id_suffix, parse_external_id, parse_media_id_input,
    parse_provider_ref_loose, parse_provider_ref_strict, MediaIdInput, ParsedMediaId,
};
pub use mediaref_router::{
    enricher_fn, resolver_fn, MediaRouter, ProviderEnricher, ProviderResolver, ResolveContext,
    RouterError, RouterErrorCode, RouterResult,
};
