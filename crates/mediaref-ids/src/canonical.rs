//! Canonical id selection.
//!
//! Precedence is fixed: imdb > tmdb > trakt > tvdb > simkl > caller fallback.
//! A canonical id is never empty; a blank fallback yields `None`.

use mediaref_core::{ExternalIds, MediaType, ProviderId, ProviderKind, ProviderName, ProviderRef};

/// Provider order used to pick a canonical id from a multi-provider set.
pub const CANONICAL_PRECEDENCE: [ProviderName; 5] = [
    ProviderName::Imdb,
    ProviderName::Tmdb,
    ProviderName::Trakt,
    ProviderName::Tvdb,
    ProviderName::Simkl,
];

/// The highest-precedence id present in `ids`.
pub fn preferred_id(ids: &ExternalIds) -> Option<ProviderId> {
    CANONICAL_PRECEDENCE
        .iter()
        .find_map(|provider| ids.get(*provider))
}

fn trimmed_fallback(fallback: Option<&str>) -> Option<String> {
    fallback
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Untyped canonical id: a bare IMDb id, otherwise `provider:id`.
///
/// ```
/// use mediaref_core::{ExternalIds, ImdbId};
/// use mediaref_ids::build_canonical_id;
///
/// let ids = ExternalIds { imdb: ImdbId::parse("tt0137523"), ..Default::default() };
/// assert_eq!(build_canonical_id(&ids, None).as_deref(), Some("tt0137523"));
/// assert_eq!(build_canonical_id(&ExternalIds::default(), Some("  ")), None);
/// ```
pub fn build_canonical_id(ids: &ExternalIds, fallback: Option<&str>) -> Option<String> {
    preferred_id(ids)
        .map(|id| id.to_string())
        .or_else(|| trimmed_fallback(fallback))
}

/// The highest-precedence id in `ids` as a typed ref of `kind`.
pub fn provider_ref_from_external_ids(ids: &ExternalIds, kind: ProviderKind) -> Option<ProviderRef> {
    preferred_id(ids).map(|id| ProviderRef::new(id, kind))
}

/// Kind-typed canonical id: `provider:kind:id`.
pub fn build_canonical_media_id(
    ids: &ExternalIds,
    kind: ProviderKind,
    fallback: Option<&str>,
) -> Option<String> {
    provider_ref_from_external_ids(ids, kind)
        .map(|r| r.to_string())
        .or_else(|| trimmed_fallback(fallback))
}

/// [`build_canonical_media_id`] with the kind derived from a movie/series type.
pub fn build_canonical_media_id_for_media_type(
    ids: &ExternalIds,
    media_type: MediaType,
    fallback: Option<&str>,
) -> Option<String> {
    build_canonical_media_id(ids, media_type.provider_kind(), fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediaref_core::ImdbId;
    use std::num::NonZeroU64;

    fn nz(n: u64) -> Option<NonZeroU64> {
        NonZeroU64::new(n)
    }

    #[test]
    fn test_typed_precedence() {
        let ids = ExternalIds {
            tmdb: nz(1),
            ..Default::default()
        };
        assert_eq!(
            build_canonical_media_id(&ids, ProviderKind::Show, None).as_deref(),
            Some("tmdb:show:1")
        );

        let ids = ExternalIds {
            trakt: nz(2),
            tmdb: nz(1),
            ..Default::default()
        };
        assert_eq!(
            build_canonical_media_id(&ids, ProviderKind::Movie, None).as_deref(),
            Some("tmdb:movie:1")
        );

        let ids = ExternalIds {
            imdb: ImdbId::parse("tt0137523"),
            tmdb: nz(1),
            ..Default::default()
        };
        assert_eq!(
            build_canonical_media_id(&ids, ProviderKind::Movie, None).as_deref(),
            Some("imdb:movie:tt0137523")
        );
    }

    #[test]
    fn test_full_precedence_chain() {
        let mut ids = ExternalIds {
            simkl: nz(5),
            ..Default::default()
        };
        assert_eq!(build_canonical_id(&ids, None).as_deref(), Some("simkl:5"));
        ids.tvdb = nz(4);
        assert_eq!(build_canonical_id(&ids, None).as_deref(), Some("tvdb:4"));
        ids.trakt = nz(3);
        assert_eq!(build_canonical_id(&ids, None).as_deref(), Some("trakt:3"));
        ids.tmdb = nz(2);
        assert_eq!(build_canonical_id(&ids, None).as_deref(), Some("tmdb:2"));
        ids.imdb = ImdbId::parse("tt1");
        assert_eq!(build_canonical_id(&ids, None).as_deref(), Some("tt1"));
    }

    #[test]
    fn test_fallback_is_trimmed_and_never_empty() {
        let empty = ExternalIds::default();
        assert_eq!(build_canonical_id(&empty, Some("  custom-id ")).as_deref(), Some("custom-id"));
        assert_eq!(build_canonical_id(&empty, Some("   ")), None);
        assert_eq!(build_canonical_id(&empty, None), None);
        assert_eq!(build_canonical_media_id(&empty, ProviderKind::Movie, Some("")), None);
    }

    #[test]
    fn test_slug_does_not_canonicalize() {
        let ids = ExternalIds {
            slug: Some("fight-club".into()),
            ..Default::default()
        };
        assert_eq!(build_canonical_id(&ids, None), None);
    }

    #[test]
    fn test_media_type_kinds() {
        let ids = ExternalIds {
            tvdb: nz(121361),
            ..Default::default()
        };
        assert_eq!(
            build_canonical_media_id_for_media_type(&ids, MediaType::Series, None).as_deref(),
            Some("tvdb:show:121361")
        );
        assert_eq!(
            build_canonical_media_id_for_media_type(&ids, MediaType::Movie, None).as_deref(),
            Some("tvdb:movie:121361")
        );
    }

    #[test]
    fn test_provider_ref_from_ids() {
        let ids = ExternalIds {
            trakt: nz(3),
            simkl: nz(5),
            ..Default::default()
        };
        let r = provider_ref_from_external_ids(&ids, ProviderKind::Movie).unwrap();
        assert_eq!(r.provider(), ProviderName::Trakt);
        assert!(provider_ref_from_external_ids(&ExternalIds::default(), ProviderKind::Movie).is_none());
    }
}
