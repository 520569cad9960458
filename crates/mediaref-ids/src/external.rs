//! External-id extraction.
//!
//! Recognizes provider-prefixed ids and IMDb ids unconditionally. A bare
//! number is ambiguous across the numeric-id providers, so it is attributed
//! only when [`NumericIdAssumption`] names a provider explicitly; otherwise it
//! yields an empty id set.

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use mediaref_core::{
    is_all_digits, parse_positive_int, ExternalIds, NumericIdAssumption, ProviderId,
    ProviderKind, ProviderName,
};

use crate::grammar::normalize_imdb_id;

/// A raw id as received from callers: a string or a number.
///
/// Deserializes from either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaIdInput {
    Text(String),
    Number(f64),
}

impl fmt::Display for MediaIdInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) if n.is_nan() => f.write_str("NaN"),
            Self::Number(n) if n.is_infinite() => {
                f.write_str(if n.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for MediaIdInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MediaIdInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for MediaIdInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for MediaIdInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for MediaIdInput {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for MediaIdInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for MediaIdInput {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u64> for MediaIdInput {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

/// Finite, positive, truncated to an integer >= 1.
pub(crate) fn numeric_id(value: f64) -> Option<NonZeroU64> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let truncated = value.trunc();
    if truncated < 1.0 || truncated > u64::MAX as f64 {
        return None;
    }
    NonZeroU64::new(truncated as u64)
}

fn assumed(assume: NumericIdAssumption, id: NonZeroU64) -> ExternalIds {
    assume
        .provider()
        .and_then(|provider| ProviderId::numeric(provider, id))
        .map(ExternalIds::from)
        .unwrap_or_default()
}

/// Extract provider ids from a single raw id.
///
/// ```
/// use mediaref_core::NumericIdAssumption;
/// use mediaref_ids::parse_external_id;
///
/// assert!(parse_external_id("550", NumericIdAssumption::None).is_empty());
/// assert_eq!(
///     parse_external_id("550", NumericIdAssumption::Tmdb).tmdb.map(|n| n.get()),
///     Some(550)
/// );
/// assert_eq!(
///     parse_external_id("trakt:show:1", NumericIdAssumption::None).trakt.map(|n| n.get()),
///     Some(1)
/// );
/// ```
pub fn parse_external_id(input: impl Into<MediaIdInput>, assume: NumericIdAssumption) -> ExternalIds {
    match input.into() {
        MediaIdInput::Number(n) => numeric_id(n)
            .map(|id| assumed(assume, id))
            .unwrap_or_default(),
        MediaIdInput::Text(text) => parse_external_id_str(&text, assume),
    }
}

/// Legacy extraction: bare numbers are TMDB ids.
pub fn parse_external_id_legacy(input: impl Into<MediaIdInput>) -> ExternalIds {
    parse_external_id(input, NumericIdAssumption::Tmdb)
}

pub(crate) fn parse_external_id_str(input: &str, assume: NumericIdAssumption) -> ExternalIds {
    let lowered = input.trim().to_ascii_lowercase();
    if lowered.is_empty() {
        return ExternalIds::default();
    }

    if let Some((prefix, rest)) = lowered.split_once(':') {
        if let Ok(provider) = prefix.parse::<ProviderName>() {
            if provider.is_numeric() {
                return parse_prefixed_numeric(provider, rest);
            }
        }
    }

    if let Some(imdb) = normalize_imdb_id(&lowered) {
        return ProviderId::Imdb(imdb).into();
    }

    if is_all_digits(&lowered) {
        if let Some(id) = parse_positive_int(&lowered) {
            if assume == NumericIdAssumption::None {
                tracing::trace!(id = %lowered, "bare numeric id left unattributed");
            }
            return assumed(assume, id);
        }
    }

    ExternalIds::default()
}

/// `<id>` or `<kind>:<id>` after a numeric provider's prefix.
fn parse_prefixed_numeric(provider: ProviderName, rest: &str) -> ExternalIds {
    let mut tokens = rest.split(':').map(str::trim);
    let first = tokens.next().unwrap_or_default();
    let token = if first.parse::<ProviderKind>().is_ok() {
        tokens.next().unwrap_or_default()
    } else {
        first
    };

    parse_positive_int(token)
        .and_then(|n| ProviderId::numeric(provider, n))
        .map(ExternalIds::from)
        .unwrap_or_default()
}

/// Merge id sets left to right; the first non-empty value per field wins.
///
/// Used to combine ids found at different nesting levels (episode vs show)
/// without clobbering a value that was already found.
pub fn merge_external_ids<'a, I>(sources: I) -> ExternalIds
where
    I: IntoIterator<Item = &'a ExternalIds>,
{
    let mut merged = ExternalIds::default();

    for ids in sources {
        if merged.trakt.is_none() {
            merged.trakt = ids.trakt;
        }
        if merged.tmdb.is_none() {
            merged.tmdb = ids.tmdb;
        }
        if merged.tvdb.is_none() {
            merged.tvdb = ids.tvdb;
        }
        if merged.simkl.is_none() {
            merged.simkl = ids.simkl;
        }
        if merged.imdb.is_none() {
            merged.imdb.clone_from(&ids.imdb);
        }
        if merged.slug.as_deref().map_or(true, str::is_empty) {
            if let Some(slug) = ids.slug.as_deref().filter(|s| !s.is_empty()) {
                merged.slug = Some(slug.to_string());
            }
        }
    }

    merged
}
