//! # mediaref-ids
//!
//! Parsing and normalization of media ids across TMDB, Trakt, TVDB, Simkl,
//! and IMDb.
//!
//! Every function here is total: malformed input yields `None` or an empty
//! [`ExternalIds`](mediaref_core::ExternalIds), never an error or a panic.
//!
//! ## Quick Start
//!
//! ```
//! use mediaref_core::ParseOptions;
//! use mediaref_ids::parse_media_id_input;
//!
//! let parsed = parse_media_id_input("tmdb:show:1399:1:2", &ParseOptions::default());
//! assert_eq!(parsed.canonical_id.as_deref(), Some("tmdb:1399:1:2"));
//! assert_eq!(parsed.season(), Some(1));
//! ```
//!
//! ## Bare numbers
//!
//! A bare `550` could be a TMDB, Trakt, TVDB, or Simkl id. It is attributed
//! only under an explicit [`NumericIdAssumption`](mediaref_core::NumericIdAssumption):
//!
//! ```
//! use mediaref_core::ParseOptions;
//! use mediaref_ids::normalize_id_for_key_with_options;
//!
//! assert_eq!(normalize_id_for_key_with_options(550, &ParseOptions::strict()), "550");
//! assert_eq!(normalize_id_for_key_with_options(550, &ParseOptions::legacy()), "tmdb:550");
//! ```

pub mod addon;
pub mod canonical;
pub mod coerce;
pub mod external;
pub mod grammar;
pub mod media_id;
pub mod suffix;

pub use addon::{format_id_for_id_prefixes, normalize_addon_id};
pub use canonical::{
    build_canonical_id, build_canonical_media_id, build_canonical_media_id_for_media_type,
    preferred_id, provider_ref_from_external_ids, CANONICAL_PRECEDENCE,
};
pub use coerce::{coerce_provider_ref, coerce_provider_ref_for_media_type};
pub use external::{
    merge_external_ids, parse_external_id, parse_external_id_legacy, MediaIdInput,
};
pub use grammar::{
    normalize_imdb_id, normalize_media_type, parse_provider_ref_loose, parse_provider_ref_strict,
};
pub use media_id::{
    normalize_id_for_key, normalize_id_for_key_with_options, normalize_imdb_id_loose,
    parse_media_id_input, ParsedMediaId,
};
pub use suffix::{build_episode_id, parse_episode_id_suffix, EpisodeIdParts};
