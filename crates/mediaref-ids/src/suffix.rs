//! Episode suffix handling (`<base>:<season>:<episode>`).
//!
//! The base id may itself contain `:` (e.g. `tmdb:1399`), so only the last
//! two tokens are ever considered. Either both parse as positive integers or
//! the whole string is the base id; a partial suffix is never extracted.

use mediaref_core::{parse_positive_int, EpisodeSuffix};

/// An id split into its base and optional episode suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeIdParts {
    pub base_id: String,
    pub suffix: Option<EpisodeSuffix>,
}

impl EpisodeIdParts {
    fn base_only(base_id: &str) -> Self {
        Self {
            base_id: base_id.to_string(),
            suffix: None,
        }
    }

    pub fn season(&self) -> Option<u64> {
        self.suffix.map(|s| s.season())
    }

    pub fn episode(&self) -> Option<u64> {
        self.suffix.map(|s| s.episode())
    }
}

/// Split a trailing `:season:episode` off `id`.
///
/// ```
/// use mediaref_ids::parse_episode_id_suffix;
///
/// let parts = parse_episode_id_suffix("tt0944947:1:2");
/// assert_eq!(parts.base_id, "tt0944947");
/// assert_eq!(parts.season(), Some(1));
/// assert_eq!(parts.episode(), Some(2));
///
/// let parts = parse_episode_id_suffix("tmdb:1399");
/// assert_eq!(parts.base_id, "tmdb:1399");
/// assert!(parts.suffix.is_none());
/// ```
pub fn parse_episode_id_suffix(id: &str) -> EpisodeIdParts {
    let raw = id.trim();
    if raw.is_empty() {
        return EpisodeIdParts::base_only(id);
    }

    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() < 3 {
        return EpisodeIdParts::base_only(raw);
    }

    let season = parse_positive_int(parts[parts.len() - 2]);
    let episode = parse_positive_int(parts[parts.len() - 1]);
    let suffix = match (season, episode) {
        (Some(season), Some(episode)) => EpisodeSuffix::new(season.get(), episode.get()),
        _ => None,
    };
    let Some(suffix) = suffix else {
        return EpisodeIdParts::base_only(raw);
    };

    let base_id = parts[..parts.len() - 2].join(":");
    if base_id.is_empty() {
        return EpisodeIdParts::base_only(raw);
    }

    EpisodeIdParts {
        base_id,
        suffix: Some(suffix),
    }
}

/// Build `<base>:<season>:<episode>`.
///
/// Returns `None` for an empty base or a non-positive season/episode.
pub fn build_episode_id(base_id: &str, season: i64, episode: i64) -> Option<String> {
    let base = base_id.trim();
    if base.is_empty() {
        return None;
    }
    let season = u64::try_from(season).ok()?;
    let episode = u64::try_from(episode).ok()?;
    EpisodeSuffix::new(season, episode).map(|s| s.append_to(base))
}

/// Append the suffix to `id` when present.
pub(crate) fn append_suffix(id: String, suffix: Option<EpisodeSuffix>) -> String {
    match suffix {
        Some(s) => s.append_to(&id),
        None => id,
    }
}
