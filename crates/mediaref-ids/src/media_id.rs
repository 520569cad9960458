//! Unified id parsing.
//!
//! [`parse_media_id_input`] accepts any legacy, loose, strict, or numeric id
//! and returns one consistent record. Steps run in a fixed order:
//!
//! 1. strip the episode suffix, so season/episode tokens never leak into ids
//! 2. strict provider-prefixed extraction on the base id
//! 3. permissive IMDb heuristic, only if enabled and step 2 found no IMDb id
//! 4. merge (step 2 wins per field)
//! 5. a fully strict `provider:kind:id` parse pins provider, kind, and the
//!    canonical id to that ref

use mediaref_core::{
    EpisodeSuffix, ExternalIds, ImdbId, ParseOptions, ProviderId, ProviderKind, ProviderName,
};

use crate::canonical::build_canonical_id;
use crate::external::{merge_external_ids, parse_external_id, parse_external_id_str, MediaIdInput};
use crate::grammar::{parse_provider_ref_loose, parse_provider_ref_strict};
use crate::suffix::{append_suffix, parse_episode_id_suffix};

/// The result of [`parse_media_id_input`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMediaId {
    /// Input as received.
    pub raw: MediaIdInput,
    /// Input without the episode suffix.
    pub base_id: String,
    /// Every provider id recognized in the base id.
    pub ids: ExternalIds,
    /// Untyped canonical id (bare IMDb id or `provider:id`), with suffix.
    pub canonical_id: Option<String>,
    /// `provider:kind:id` with suffix, when the base id was a strict ref.
    pub typed_id: Option<String>,
    pub episode: Option<EpisodeSuffix>,
    /// Provider named by the input's prefix, if any.
    pub provider: Option<ProviderName>,
    /// Kind named by the input, if any.
    pub kind: Option<ProviderKind>,
}

impl ParsedMediaId {
    pub fn season(&self) -> Option<u64> {
        self.episode.map(|e| e.season())
    }

    pub fn episode_number(&self) -> Option<u64> {
        self.episode.map(|e| e.episode())
    }

    /// The canonical id, or the base id when none could be derived.
    pub fn key(&self) -> &str {
        self.canonical_id.as_deref().unwrap_or(&self.base_id)
    }
}

/// Permissive IMDb normalization for messy inputs.
///
/// Strips an optional `imdb:` prefix and looks at the first remaining token:
/// `tt\d+` is lowercased, bare digits become `tt<digits>`.
pub fn normalize_imdb_id_loose(value: &str) -> Option<ImdbId> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let no_prefix = match trimmed.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("imdb:") => &trimmed[5..],
        _ => trimmed,
    };
    let token = no_prefix.split(':').next().unwrap_or_default().trim();
    if token.is_empty() {
        return None;
    }

    ImdbId::parse(token).or_else(|| ImdbId::from_digits(token))
}

/// Parse any id input into a [`ParsedMediaId`].
///
/// ```
/// use mediaref_core::ParseOptions;
/// use mediaref_ids::parse_media_id_input;
///
/// let parsed = parse_media_id_input("imdb:show:tt0944947:1:1", &ParseOptions::default());
/// assert_eq!(parsed.canonical_id.as_deref(), Some("tt0944947:1:1"));
/// assert_eq!(parsed.typed_id.as_deref(), Some("imdb:show:tt0944947:1:1"));
/// ```
pub fn parse_media_id_input(input: impl Into<MediaIdInput>, options: &ParseOptions) -> ParsedMediaId {
    let raw = input.into();
    let text = match &raw {
        MediaIdInput::Text(text) => Some(text.clone()),
        MediaIdInput::Number(_) => None,
    };
    match text {
        Some(text) => parse_text(raw, &text, options),
        None => parse_numeric(raw, options),
    }
}

fn parse_numeric(raw: MediaIdInput, options: &ParseOptions) -> ParsedMediaId {
    let base_id = raw.to_string();
    let ids = parse_external_id(raw.clone(), options.assume_numeric);
    let canonical_id = build_canonical_id(&ids, Some(&base_id));

    ParsedMediaId {
        raw,
        base_id,
        ids,
        canonical_id,
        typed_id: None,
        episode: None,
        provider: None,
        kind: None,
    }
}

fn parse_text(raw: MediaIdInput, text: &str, options: &ParseOptions) -> ParsedMediaId {
    let parts = parse_episode_id_suffix(text.trim());
    let base_id = parts.base_id.trim().to_string();
    let episode = parts.suffix;

    let strict_ids = parse_external_id_str(&base_id, options.assume_numeric);
    let loose_imdb = if options.loose_imdb && strict_ids.imdb.is_none() {
        normalize_imdb_id_loose(&base_id)
    } else {
        None
    };
    let ids = match loose_imdb {
        Some(imdb) => {
            let loose_ids = ExternalIds::from(ProviderId::Imdb(imdb));
            merge_external_ids([&strict_ids, &loose_ids])
        }
        None => strict_ids,
    };

    let mut canonical_id = build_canonical_id(&ids, Some(&base_id)).map(|id| append_suffix(id, episode));
    let mut typed_id = None;
    let mut provider = None;
    let mut kind = None;

    if let Some(strict) = parse_provider_ref_strict(&base_id) {
        canonical_id = Some(append_suffix(strict.id.to_string(), episode));
        typed_id = Some(strict.clone().with_episode(episode).to_episode_id());
        provider = Some(strict.provider());
        kind = Some(strict.kind);
    } else if let Some(loose) = parse_provider_ref_loose(&base_id) {
        provider = Some(loose.provider());
        kind = loose.kind;
    }

    ParsedMediaId {
        raw,
        base_id,
        ids,
        canonical_id,
        typed_id,
        episode,
        provider,
        kind,
    }
}

/// Normalize an id into a stable key for in-memory maps (strict options).
pub fn normalize_id_for_key(id: impl Into<MediaIdInput>) -> String {
    normalize_id_for_key_with_options(id, &ParseOptions::default())
}

pub fn normalize_id_for_key_with_options(id: impl Into<MediaIdInput>, options: &ParseOptions) -> String {
    parse_media_id_input(id, options).key().to_string()
}
