//! Provider-ref grammar.
//!
//! - strict: `provider:kind:id`
//! - loose:  `provider:id` or `provider:kind:id`
//!
//! Tokens are trimmed and empty tokens dropped before matching. None of these
//! functions fail loudly; malformed input yields `None`.

use mediaref_core::{
    ImdbId, LooseProviderRef, MediaType, ProviderId, ProviderKind, ProviderName, ProviderRef,
};

fn split_tokens(input: &str) -> Vec<&str> {
    input
        .trim()
        .split(':')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Strict parser: exactly `provider:kind:id`.
///
/// The provider is case-insensitive, `tv`/`series` fold to `show`, and the id
/// must be `tt\d+` for IMDb and a positive integer for every other provider.
///
/// ```
/// use mediaref_ids::parse_provider_ref_strict;
///
/// let r = parse_provider_ref_strict("TMDB:tv:1399").unwrap();
/// assert_eq!(r.to_string(), "tmdb:show:1399");
/// assert!(parse_provider_ref_strict("tmdb:1399").is_none());
/// ```
pub fn parse_provider_ref_strict(input: &str) -> Option<ProviderRef> {
    let parts = split_tokens(input);
    let [provider, kind, id] = parts.as_slice() else {
        return None;
    };

    let provider: ProviderName = provider.parse().ok()?;
    let kind: ProviderKind = kind.parse().ok()?;
    let id = ProviderId::parse_for(provider, id)?;

    Some(ProviderRef::new(id, kind))
}

/// Loose parser kept for inputs that predate the typed grammar.
///
/// Accepts `provider:id` (no kind) as well as `provider:kind:id`. Trailing
/// tokens beyond the id are ignored.
pub fn parse_provider_ref_loose(input: &str) -> Option<LooseProviderRef> {
    let parts = split_tokens(input);
    if parts.len() < 2 {
        return None;
    }

    let provider: ProviderName = parts[0].parse().ok()?;

    if parts.len() >= 3 {
        if let Ok(kind) = parts[1].parse::<ProviderKind>() {
            let id = ProviderId::parse_for(provider, parts[2])?;
            return Some(LooseProviderRef {
                id,
                kind: Some(kind),
            });
        }
    }

    let id = ProviderId::parse_for(provider, parts[1])?;
    Some(LooseProviderRef { id, kind: None })
}

/// Normalize an IMDb id given as `tt…`, `imdb:tt…`, or `imdb:<kind>:tt…`.
///
/// Case-insensitive; the result is lowercase.
pub fn normalize_imdb_id(value: &str) -> Option<ImdbId> {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }

    if let Some(id) = ImdbId::parse(&normalized) {
        return Some(id);
    }

    let rest = normalized.strip_prefix("imdb:")?;
    match split_tokens(rest).as_slice() {
        [id] => ImdbId::parse(id),
        [kind, id] if kind.parse::<ProviderKind>().is_ok() => ImdbId::parse(id),
        _ => None,
    }
}

/// Map free-form type labels (`movie`, `film`, `show`, `tv`, `series`).
pub fn normalize_media_type(value: &str) -> Option<MediaType> {
    value.parse().ok()
}
