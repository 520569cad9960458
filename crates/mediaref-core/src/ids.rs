//! Typed provider identifiers.
//!
//! A provider id is a sum type: IMDb carries a validated `tt…` string, every
//! other provider carries a positive integer. Mixing the two under one field
//! is unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

use crate::error::Error;
use crate::media::{ProviderKind, ProviderName};

// ---------------------------------------------------------------------------
// ImdbId
// ---------------------------------------------------------------------------

/// A lowercase IMDb id matching `tt\d+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImdbId(String);

impl ImdbId {
    /// Parse a bare IMDb id, case-insensitively. Surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let digits = normalized.strip_prefix("tt")?;
        if is_all_digits(digits) {
            Some(Self(normalized))
        } else {
            None
        }
    }

    /// Build `tt<digits>` from a bare digit string.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if is_all_digits(digits) {
            Some(Self(format!("tt{digits}")))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ImdbId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImdbId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| Error::validation(format!("invalid imdb id: {value}")))
    }
}

impl From<ImdbId> for String {
    fn from(id: ImdbId) -> Self {
        id.0
    }
}

/// Non-empty and ASCII digits only.
pub fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Strict positive-integer parse: all ASCII digits, value >= 1.
pub fn parse_positive_int(value: &str) -> Option<NonZeroU64> {
    if !is_all_digits(value) {
        return None;
    }
    value.parse::<u64>().ok().and_then(NonZeroU64::new)
}

// ---------------------------------------------------------------------------
// ProviderId
// ---------------------------------------------------------------------------

/// A native id in one provider's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Imdb(ImdbId),
    Tmdb(NonZeroU64),
    Trakt(NonZeroU64),
    Tvdb(NonZeroU64),
    Simkl(NonZeroU64),
}

impl ProviderId {
    /// Build a numeric-provider id. Returns `None` for IMDb.
    pub fn numeric(provider: ProviderName, id: NonZeroU64) -> Option<Self> {
        match provider {
            ProviderName::Tmdb => Some(Self::Tmdb(id)),
            ProviderName::Trakt => Some(Self::Trakt(id)),
            ProviderName::Tvdb => Some(Self::Tvdb(id)),
            ProviderName::Simkl => Some(Self::Simkl(id)),
            ProviderName::Imdb => None,
        }
    }

    /// Parse the id token for `provider`: `tt\d+` for IMDb, a strict positive
    /// integer otherwise.
    pub fn parse_for(provider: ProviderName, token: &str) -> Option<Self> {
        match provider {
            ProviderName::Imdb => ImdbId::parse(token).map(Self::Imdb),
            _ => parse_positive_int(token.trim()).and_then(|n| Self::numeric(provider, n)),
        }
    }

    pub fn provider(&self) -> ProviderName {
        match self {
            Self::Imdb(_) => ProviderName::Imdb,
            Self::Tmdb(_) => ProviderName::Tmdb,
            Self::Trakt(_) => ProviderName::Trakt,
            Self::Tvdb(_) => ProviderName::Tvdb,
            Self::Simkl(_) => ProviderName::Simkl,
        }
    }

    pub fn as_numeric(&self) -> Option<NonZeroU64> {
        match self {
            Self::Imdb(_) => None,
            Self::Tmdb(n) | Self::Trakt(n) | Self::Tvdb(n) | Self::Simkl(n) => Some(*n),
        }
    }

    pub fn as_imdb(&self) -> Option<&ImdbId> {
        match self {
            Self::Imdb(id) => Some(id),
            _ => None,
        }
    }

    /// The bare native value (`tt0137523`, `550`).
    pub fn value(&self) -> String {
        match self {
            Self::Imdb(id) => id.to_string(),
            Self::Tmdb(n) | Self::Trakt(n) | Self::Tvdb(n) | Self::Simkl(n) => n.to_string(),
        }
    }
}

/// Untyped canonical spelling: a bare IMDb id, otherwise `provider:id`.
impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imdb(id) => write!(f, "{id}"),
            other => write!(f, "{}:{}", other.provider(), other.value()),
        }
    }
}

// ---------------------------------------------------------------------------
// EpisodeSuffix
// ---------------------------------------------------------------------------

/// Trailing `:season:episode` scope of an id. Both numbers are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EpisodeSuffix {
    season: u64,
    episode: u64,
}

impl EpisodeSuffix {
    pub fn new(season: u64, episode: u64) -> Option<Self> {
        if season == 0 || episode == 0 {
            return None;
        }
        Some(Self { season, episode })
    }

    pub fn season(&self) -> u64 {
        self.season
    }

    pub fn episode(&self) -> u64 {
        self.episode
    }

    /// Append `:season:episode` to `base`.
    pub fn append_to(&self, base: &str) -> String {
        format!("{base}:{}:{}", self.season, self.episode)
    }
}

// ---------------------------------------------------------------------------
// ProviderRef
// ---------------------------------------------------------------------------

/// A typed reference into one provider's namespace.
///
/// `Display` renders the strict `provider:kind:id` grammar; use
/// [`ProviderRef::to_episode_id`] to include the episode suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ProviderRefWire", into = "ProviderRefWire")]
pub struct ProviderRef {
    pub id: ProviderId,
    pub kind: ProviderKind,
    pub episode: Option<EpisodeSuffix>,
}

impl ProviderRef {
    pub fn new(id: ProviderId, kind: ProviderKind) -> Self {
        Self {
            id,
            kind,
            episode: None,
        }
    }

    /// Convenience constructor for an IMDb ref. Returns `None` if `id` is not `tt\d+`.
    pub fn imdb(kind: ProviderKind, id: &str) -> Option<Self> {
        ImdbId::parse(id).map(|id| Self::new(ProviderId::Imdb(id), kind))
    }

    /// Convenience constructor for a numeric-provider ref. Returns `None` for
    /// IMDb or a zero id.
    pub fn numeric(provider: ProviderName, kind: ProviderKind, id: u64) -> Option<Self> {
        let id = NonZeroU64::new(id)?;
        ProviderId::numeric(provider, id).map(|id| Self::new(id, kind))
    }

    pub fn with_episode(mut self, episode: Option<EpisodeSuffix>) -> Self {
        self.episode = episode;
        self
    }

    pub fn provider(&self) -> ProviderName {
        self.id.provider()
    }

    /// `provider:kind:id`, followed by `:season:episode` when episode-scoped.
    pub fn to_episode_id(&self) -> String {
        let base = self.to_string();
        match self.episode {
            Some(suffix) => suffix.append_to(&base),
            None => base,
        }
    }
}

impl fmt::Display for ProviderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.provider(), self.kind, self.id.value())
    }
}

/// A ref from the pre-typed grammar: the kind may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LooseProviderRef {
    pub id: ProviderId,
    pub kind: Option<ProviderKind>,
}

impl LooseProviderRef {
    pub fn provider(&self) -> ProviderName {
        self.id.provider()
    }

    /// Promote to a strict ref, using `default_kind` when none was given.
    pub fn into_strict(self, default_kind: ProviderKind) -> ProviderRef {
        ProviderRef::new(self.id, self.kind.unwrap_or(default_kind))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProviderRefWire {
    provider: ProviderName,
    kind: ProviderKind,
    id: WireId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    season: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    episode: Option<u64>,
}

impl TryFrom<ProviderRefWire> for ProviderRef {
    type Error = Error;

    fn try_from(wire: ProviderRefWire) -> Result<Self, Self::Error> {
        let id = match (wire.provider, wire.id) {
            (ProviderName::Imdb, WireId::Text(text)) => ProviderId::Imdb(ImdbId::try_from(text)?),
            (ProviderName::Imdb, WireId::Number(n)) => {
                return Err(Error::validation(format!("imdb id must be a string, got {n}")));
            }
            (provider, WireId::Number(n)) => NonZeroU64::new(n)
                .and_then(|n| ProviderId::numeric(provider, n))
                .ok_or_else(|| Error::validation(format!("{provider} id must be positive")))?,
            (provider, WireId::Text(text)) => {
                return Err(Error::validation(format!(
                    "{provider} id must be a number, got {text:?}"
                )));
            }
        };

        let episode = match (wire.season, wire.episode) {
            (Some(season), Some(episode)) => Some(
                EpisodeSuffix::new(season, episode)
                    .ok_or_else(|| Error::validation("season and episode must be positive"))?,
            ),
            (None, None) => None,
            _ => return Err(Error::validation("season and episode must be given together")),
        };

        Ok(ProviderRef {
            id,
            kind: wire.kind,
            episode,
        })
    }
}

impl From<ProviderRef> for ProviderRefWire {
    fn from(r: ProviderRef) -> Self {
        let provider = r.provider();
        let id = match r.id {
            ProviderId::Imdb(imdb) => WireId::Text(imdb.into()),
            other => WireId::Number(other.as_numeric().map_or(0, NonZeroU64::get)),
        };
        Self {
            provider,
            kind: r.kind,
            id,
            season: r.episode.map(|e| e.season()),
            episode: r.episode.map(|e| e.episode()),
        }
    }
}

// ---------------------------------------------------------------------------
// ExternalIds
// ---------------------------------------------------------------------------

/// Ids for the same media item across providers. No field implies precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trakt: Option<NonZeroU64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<NonZeroU64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb: Option<NonZeroU64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simkl: Option<NonZeroU64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<ImdbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ExternalIds {
    /// True when no provider id (and no slug) is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// The id for `provider`, if present.
    pub fn get(&self, provider: ProviderName) -> Option<ProviderId> {
        match provider {
            ProviderName::Imdb => self.imdb.clone().map(ProviderId::Imdb),
            ProviderName::Tmdb => self.tmdb.map(ProviderId::Tmdb),
            ProviderName::Trakt => self.trakt.map(ProviderId::Trakt),
            ProviderName::Tvdb => self.tvdb.map(ProviderId::Tvdb),
            ProviderName::Simkl => self.simkl.map(ProviderId::Simkl),
        }
    }

    /// Set (overwrite) the field matching the id's provider.
    pub fn set(&mut self, id: ProviderId) {
        match id {
            ProviderId::Imdb(imdb) => self.imdb = Some(imdb),
            ProviderId::Tmdb(n) => self.tmdb = Some(n),
            ProviderId::Trakt(n) => self.trakt = Some(n),
            ProviderId::Tvdb(n) => self.tvdb = Some(n),
            ProviderId::Simkl(n) => self.simkl = Some(n),
        }
    }
}

impl From<ProviderId> for ExternalIds {
    fn from(id: ProviderId) -> Self {
        let mut ids = Self::default();
        ids.set(id);
        ids
    }
}
