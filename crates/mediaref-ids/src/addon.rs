//! Addon-facing id formatting.
//!
//! Addons advertise the id shapes they accept as a list of prefixes
//! (`tt`, `tmdb:`, `tmdb:movie:` ...). These helpers produce an id in the
//! shape a given addon expects.

use mediaref_core::{
    is_all_digits, EpisodeSuffix, ExternalIds, MediaType, ParseOptions, ProviderId, ProviderName,
    ProviderRef,
};

use crate::canonical::CANONICAL_PRECEDENCE;
use crate::external::{numeric_id, MediaIdInput};
use crate::media_id::parse_media_id_input;
use crate::suffix::{append_suffix, parse_episode_id_suffix};

/// Normalize any id into an addon content id (`tt…`, `tmdb:1399:1:2`, ...).
///
/// Returns `None` for non-finite numbers and blank strings.
pub fn normalize_addon_id(input: impl Into<MediaIdInput>, options: &ParseOptions) -> Option<String> {
    let input = input.into();
    match &input {
        MediaIdInput::Number(n) if !n.is_finite() => return None,
        MediaIdInput::Text(text) if text.trim().is_empty() => return None,
        _ => {}
    }

    parse_media_id_input(input, options).canonical_id
}

/// The single numeric provider named by `prefixes`, if exactly one is.
fn infer_numeric_provider<S: AsRef<str>>(prefixes: &[S]) -> Option<ProviderName> {
    let mut found: Option<ProviderName> = None;

    for prefix in prefixes {
        let lower = prefix.as_ref().to_ascii_lowercase();
        let provider = ProviderName::ALL
            .into_iter()
            .filter(ProviderName::is_numeric)
            .find(|p| lower.starts_with(p.as_str()));

        match (found, provider) {
            (_, None) => {}
            (None, Some(p)) => found = Some(p),
            (Some(existing), Some(p)) if existing == p => {}
            (Some(_), Some(_)) => return None,
        }
    }

    found
}

fn candidates(
    ids: &ExternalIds,
    media_type: MediaType,
    base_id: &str,
    suffix: Option<EpisodeSuffix>,
) -> Vec<String> {
    let kind = media_type.provider_kind();
    let mut out: Vec<String> = Vec::new();
    let mut push = |value: String| {
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    };

    for provider in CANONICAL_PRECEDENCE {
        let Some(id) = ids.get(provider) else {
            continue;
        };

        push(append_suffix(id.to_string(), suffix));
        if let ProviderId::Imdb(imdb) = &id {
            push(append_suffix(format!("imdb:{imdb}"), suffix));
        }
        push(ProviderRef::new(id, kind).with_episode(suffix).to_episode_id());
    }

    push(append_suffix(base_id.to_string(), suffix));
    out
}

/// Format an id into the first shape accepted by an addon's `prefixes`.
///
/// Bare numeric ids are attributed only when the prefixes name exactly one
/// numeric provider. With no prefixes the most preferred shape is returned.
///
/// ```
/// use mediaref_core::MediaType;
/// use mediaref_ids::format_id_for_id_prefixes;
///
/// assert_eq!(
///     format_id_for_id_prefixes("tmdb:show:1399:1:2", MediaType::Series, &["tmdb:"]).as_deref(),
///     Some("tmdb:1399:1:2")
/// );
/// assert_eq!(format_id_for_id_prefixes("550", MediaType::Movie, &["tt"]), None);
/// ```
pub fn format_id_for_id_prefixes<S: AsRef<str>>(
    input: impl Into<MediaIdInput>,
    media_type: MediaType,
    prefixes: &[S],
) -> Option<String> {
    let input = input.into();
    let raw = match &input {
        MediaIdInput::Text(text) => text.trim().to_string(),
        MediaIdInput::Number(n) => {
            numeric_id(*n)?;
            input.to_string()
        }
    };
    if raw.is_empty() {
        return None;
    }

    let parts = parse_episode_id_suffix(&raw);
    let base_id = parts.base_id.trim();

    if is_all_digits(base_id) {
        let provider = infer_numeric_provider(prefixes)?;
        return Some(append_suffix(format!("{provider}:{base_id}"), parts.suffix));
    }

    let parsed = parse_media_id_input(raw.as_str(), &ParseOptions::strict());
    let candidates = candidates(&parsed.ids, media_type, base_id, parts.suffix);

    if prefixes.is_empty() {
        return candidates.into_iter().next();
    }

    candidates.into_iter().find(|candidate| {
        prefixes
            .iter()
            .any(|prefix| candidate.starts_with(prefix.as_ref()))
    })
}
