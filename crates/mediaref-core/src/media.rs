//! Media-domain enums and the media record shape produced by enrichers.
//!
//! All enums serialize in lowercase (via `serde(rename_all = "lowercase")`) and
//! implement `Display` manually for consistent string representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::ids::ExternalIds;

// ---------------------------------------------------------------------------
// ProviderName
// ---------------------------------------------------------------------------

/// External metadata/tracking services with their own id namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderName {
    Tmdb,
    Trakt,
    Tvdb,
    Simkl,
    Imdb,
}

impl ProviderName {
    /// Every known provider.
    pub const ALL: [ProviderName; 5] = [
        ProviderName::Tmdb,
        ProviderName::Trakt,
        ProviderName::Tvdb,
        ProviderName::Simkl,
        ProviderName::Imdb,
    ];

    /// Lowercase wire name (`"tmdb"`, `"imdb"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tmdb => "tmdb",
            Self::Trakt => "trakt",
            Self::Tvdb => "tvdb",
            Self::Simkl => "simkl",
            Self::Imdb => "imdb",
        }
    }

    /// Whether this provider uses positive-integer ids.
    ///
    /// Only IMDb uses string (`tt…`) ids.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Imdb)
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tmdb" => Ok(Self::Tmdb),
            "trakt" => Ok(Self::Trakt),
            "tvdb" => Ok(Self::Tvdb),
            "simkl" => Ok(Self::Simkl),
            "imdb" => Ok(Self::Imdb),
            _ => Err(Error::UnknownProvider(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ProviderKind
// ---------------------------------------------------------------------------

/// Provider-level content kind used to disambiguate ids across apps.
///
/// `show` is the canonical spelling; `tv` and `series` fold into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Movie,
    Show,
    Episode,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Show => "show",
            Self::Episode => "episode",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(Self::Movie),
            "show" | "tv" | "series" => Ok(Self::Show),
            "episode" => Ok(Self::Episode),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// MediaType
// ---------------------------------------------------------------------------

/// Coarse movie/series distinction used by media records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
}

impl MediaType {
    /// Map to the provider kind used in typed ids (movie→movie, series→show).
    pub fn provider_kind(&self) -> ProviderKind {
        match self {
            Self::Movie => ProviderKind::Movie,
            Self::Series => ProviderKind::Show,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "series"),
        }
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" | "film" => Ok(Self::Movie),
            "show" | "tv" | "series" => Ok(Self::Series),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// MediaDetails
// ---------------------------------------------------------------------------

/// Artwork URLs attached to a media record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageSet {
    pub poster: Option<String>,
    pub backdrop: Option<String>,
    pub logo: Option<String>,
    pub fanart: Option<String>,
    pub thumbnail: Option<String>,
    pub posters: Vec<String>,
    pub backdrops: Vec<String>,
}

/// A cast or crew credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCredit {
    pub id: Option<String>,
    pub name: String,
    pub role: Option<String>,
    pub profile: Option<String>,
    pub order: Option<u32>,
}

/// A single episode listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeInfo {
    pub season: u32,
    pub episode: u32,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub release_date: Option<String>,
    pub thumbnail: Option<String>,
}

/// Full media record returned by an enricher.
///
/// Produced by per-provider normalization outside this workspace; the router
/// only passes it through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetails {
    /// Canonical id of the record.
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub title: String,
    pub year: Option<u16>,
    pub description: Option<String>,
    /// Audience rating, typically 0.0 - 10.0.
    pub rating: Option<f64>,
    pub runtime_minutes: Option<u32>,
    /// Release or premiere date as ISO-8601 (YYYY-MM-DD).
    pub released: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub ids: ExternalIds,
    #[serde(default)]
    pub images: ImageSet,
    #[serde(default)]
    pub cast: Vec<PersonCredit>,
    pub director: Option<String>,
    pub certification: Option<String>,
    pub trailer_key: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub episode_count: Option<u32>,
    #[serde(default)]
    pub seasons: Vec<u32>,
    #[serde(default)]
    pub episodes: Vec<EpisodeInfo>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MediaDetails {
    /// Create a record with only the required fields set.
    pub fn new(id: impl Into<String>, media_type: MediaType, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            media_type,
            title: title.into(),
            year: None,
            description: None,
            rating: None,
            runtime_minutes: None,
            released: None,
            status: None,
            genres: Vec::new(),
            ids: ExternalIds::default(),
            images: ImageSet::default(),
            cast: Vec::new(),
            director: None,
            certification: None,
            trailer_key: None,
            languages: Vec::new(),
            episode_count: None,
            seasons: Vec::new(),
            episodes: Vec::new(),
            tags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_name_from_str_is_case_insensitive() {
        assert_eq!("TMDB".parse::<ProviderName>().unwrap(), ProviderName::Tmdb);
        assert_eq!(" imdb ".parse::<ProviderName>().unwrap(), ProviderName::Imdb);
        assert!("netflix".parse::<ProviderName>().is_err());
    }

    #[test]
    fn provider_name_display_roundtrip() {
        for provider in ProviderName::ALL {
            let parsed: ProviderName = provider.to_string().parse().unwrap();
            assert_eq!(parsed, provider);
        }
    }

    #[test]
    fn only_imdb_is_non_numeric() {
        let numeric: Vec<_> = ProviderName::ALL.into_iter().filter(|p| p.is_numeric()).collect();
        assert_eq!(
            numeric,
            vec![
                ProviderName::Tmdb,
                ProviderName::Trakt,
                ProviderName::Tvdb,
                ProviderName::Simkl
            ]
        );
    }

    #[test]
    fn kind_aliases_fold_to_show() {
        assert_eq!("tv".parse::<ProviderKind>().unwrap(), ProviderKind::Show);
        assert_eq!("Series".parse::<ProviderKind>().unwrap(), ProviderKind::Show);
        assert_eq!("episode".parse::<ProviderKind>().unwrap(), ProviderKind::Episode);
        assert!("anime".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn media_type_maps_to_provider_kind() {
        assert_eq!(MediaType::Movie.provider_kind(), ProviderKind::Movie);
        assert_eq!(MediaType::Series.provider_kind(), ProviderKind::Show);
        assert_eq!("film".parse::<MediaType>().unwrap(), MediaType::Movie);
        assert_eq!("tv".parse::<MediaType>().unwrap(), MediaType::Series);
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&ProviderName::Simkl).unwrap(), r#""simkl""#);
        assert_eq!(serde_json::to_string(&ProviderKind::Show).unwrap(), r#""show""#);
        assert_eq!(serde_json::to_string(&MediaType::Series).unwrap(), r#""series""#);
    }

    #[test]
    fn media_details_serializes_type_field() {
        let details = MediaDetails::new("tt0137523", MediaType::Movie, "Fight Club");
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["type"], "movie");
        assert_eq!(json["title"], "Fight Club");
    }
}
