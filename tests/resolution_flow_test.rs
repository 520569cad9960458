//! End-to-end tests: messy input ids are parsed, coerced to typed refs, routed
//! to another provider, and enriched there.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use assert_matches::assert_matches;
use async_trait::async_trait;
use mediaref::{
    coerce_provider_ref, format_id_for_id_prefixes, normalize_addon_id, parse_media_id_input,
    ExternalIds, MediaDetails, MediaRouter, MediaType, NumericIdAssumption, ParseOptions,
    ProviderEnricher, ProviderKind, ProviderName, ProviderRef, ProviderResolver, ResolveContext,
    RouterErrorCode,
};

/// Resolver edge backed by a static lookup table keyed by untyped id.
struct TableResolver {
    from: ProviderName,
    to: ProviderName,
    table: HashMap<String, ProviderRef>,
    calls: AtomicUsize,
}

impl TableResolver {
    fn new(from: ProviderName, to: ProviderName) -> Self {
        Self {
            from,
            to,
            table: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    fn map(mut self, from_id: &str, to: ProviderRef) -> Self {
        self.table.insert(from_id.to_string(), to);
        self
    }
}

#[async_trait]
impl ProviderResolver for TableResolver {
    fn from_provider(&self) -> ProviderName {
        self.from
    }

    fn to_provider(&self) -> ProviderName {
        self.to
    }

    async fn resolve(&self, input: &ProviderRef, _ctx: &ResolveContext) -> Result<Option<ProviderRef>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .table
            .get(&input.id.to_string())
            .cloned()
            .map(|r| r.with_episode(input.episode)))
    }
}

/// Enricher returning a fixed catalog record per untyped id.
struct CatalogEnricher {
    provider: ProviderName,
    catalog: HashMap<String, MediaDetails>,
}

#[async_trait]
impl ProviderEnricher for CatalogEnricher {
    fn provider(&self) -> ProviderName {
        self.provider
    }

    async fn enrich(&self, input: &ProviderRef, _ctx: &ResolveContext) -> Result<MediaDetails> {
        self.catalog
            .get(&input.id.to_string())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("{input} not in catalog"))
    }
}

fn tmdb(kind: ProviderKind, id: u64) -> ProviderRef {
    ProviderRef::numeric(ProviderName::Tmdb, kind, id).unwrap()
}

fn trakt(kind: ProviderKind, id: u64) -> ProviderRef {
    ProviderRef::numeric(ProviderName::Trakt, kind, id).unwrap()
}

fn fight_club() -> MediaDetails {
    let mut details = MediaDetails::new("tmdb:550", MediaType::Movie, "Fight Club");
    details.year = Some(1999);
    details.ids = ExternalIds {
        tmdb: std::num::NonZeroU64::new(550),
        imdb: mediaref::ImdbId::parse("tt0137523"),
        ..Default::default()
    };
    details
}

fn build_router() -> (MediaRouter, Arc<TableResolver>) {
    let imdb_to_trakt = Arc::new(
        TableResolver::new(ProviderName::Imdb, ProviderName::Trakt)
            .map("tt0137523", trakt(ProviderKind::Movie, 432))
            .map("tt0944947", trakt(ProviderKind::Show, 1390)),
    );
    let trakt_to_tmdb = TableResolver::new(ProviderName::Trakt, ProviderName::Tmdb)
        .map("trakt:432", tmdb(ProviderKind::Movie, 550))
        .map("trakt:1390", tmdb(ProviderKind::Show, 1399));

    let enricher = CatalogEnricher {
        provider: ProviderName::Tmdb,
        catalog: HashMap::from([("tmdb:550".to_string(), fight_club())]),
    };

    let router = MediaRouter::builder()
        .shared_resolver(imdb_to_trakt.clone())
        .resolver(trakt_to_tmdb)
        .enricher(enricher)
        .build();

    (router, imdb_to_trakt)
}

#[tokio::test]
async fn test_messy_imdb_input_is_enriched_via_two_hops() {
    let (router, first_hop) = build_router();

    let parsed = parse_media_id_input("  TT0137523 ", &ParseOptions::default());
    assert_eq!(parsed.canonical_id.as_deref(), Some("tt0137523"));

    let input = coerce_provider_ref("  TT0137523 ", ProviderKind::Movie, NumericIdAssumption::None)
        .expect("imdb id should coerce");
    assert_eq!(input.to_string(), "imdb:movie:tt0137523");

    let details = router
        .enrich(ProviderName::Tmdb, input, &ResolveContext::new())
        .await
        .unwrap();
    assert_eq!(details.title, "Fight Club");
    assert_eq!(details.year, Some(1999));
    assert_eq!(first_hop.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_episode_suffix_survives_routing() {
    let (router, _) = build_router();

    let input = coerce_provider_ref("tt0944947:1:2", ProviderKind::Show, NumericIdAssumption::None)
        .unwrap();
    let out = router
        .resolve_to(ProviderName::Tmdb, &input, &ResolveContext::new())
        .await
        .unwrap();
    assert_eq!(out.to_episode_id(), "tmdb:show:1399:1:2");

    assert_eq!(
        format_id_for_id_prefixes(out.to_episode_id(), MediaType::Series, &["tmdb:"]).as_deref(),
        Some("tmdb:1399:1:2")
    );
}

#[tokio::test]
async fn test_legacy_numeric_input_needs_explicit_assumption() {
    let (router, _) = build_router();

    assert!(coerce_provider_ref(550, ProviderKind::Movie, NumericIdAssumption::None).is_none());

    let input = coerce_provider_ref(550, ProviderKind::Movie, NumericIdAssumption::Tmdb).unwrap();
    let details = router
        .enrich(ProviderName::Tmdb, input, &ResolveContext::new())
        .await
        .unwrap();
    assert_eq!(details.id, "tmdb:550");
}

#[tokio::test]
async fn test_untyped_string_is_rejected_by_router() {
    let (router, first_hop) = build_router();

    let err = router
        .resolve_to(ProviderName::Tmdb, "tt0137523", &ResolveContext::new())
        .await
        .unwrap_err();
    assert_eq!(err.code, RouterErrorCode::BadId);
    assert_eq!(first_hop.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_catalog_entry_is_provider_error() {
    let (router, _) = build_router();

    let err = router
        .enrich(ProviderName::Tmdb, "imdb:show:tt0944947", &ResolveContext::new())
        .await
        .unwrap_err();
    assert_eq!(err.code, RouterErrorCode::ProviderError);
    assert_matches!(err.cause, Some(_));
}

#[tokio::test]
async fn test_unknown_mapping_is_unresolvable() {
    let (router, _) = build_router();

    let err = router
        .resolve_to(ProviderName::Tmdb, "imdb:movie:tt9999999", &ResolveContext::new())
        .await
        .unwrap_err();
    assert_eq!(err.code, RouterErrorCode::Unresolvable);

    let err = router
        .enrich(ProviderName::Simkl, "imdb:movie:tt0137523", &ResolveContext::new())
        .await
        .unwrap_err();
    assert_eq!(err.code, RouterErrorCode::Unsupported);
}

#[test]
fn test_addon_ids_from_mixed_inputs() {
    let strict = ParseOptions::default();
    assert_eq!(normalize_addon_id("imdb:movie:tt0137523", &strict).as_deref(), Some("tt0137523"));
    assert_eq!(normalize_addon_id("trakt:show:1390:2:3", &strict).as_deref(), Some("trakt:1390:2:3"));

    let opts = ParseOptions::from_json(r#"{"assume_numeric":"tvdb"}"#).unwrap();
    assert_eq!(normalize_addon_id("121361", &opts).as_deref(), Some("tvdb:121361"));
}
