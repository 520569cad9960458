//! Breadth-first resolution across the provider graph.
//!
//! The search runs over providers, not individual refs: each provider is
//! visited at most once per call. Cycles in the resolver graph therefore
//! terminate, and a later path to an already-visited provider is never
//! explored. Edges are tried sequentially in registration order.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use mediaref_core::{MediaDetails, ProviderName, ProviderRef};
use mediaref_ids::{parse_episode_id_suffix, parse_provider_ref_strict};

use crate::error::{RouterError, RouterResult};
use crate::resolver::{ProviderEnricher, ProviderResolver, ResolveContext};

/// Input accepted by [`MediaRouter`]: a strict id string or an already typed ref.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteInput {
    /// `provider:kind:id[:season:episode]`.
    Id(String),
    Ref(ProviderRef),
}

impl From<&str> for RouteInput {
    fn from(value: &str) -> Self {
        Self::Id(value.to_string())
    }
}

impl From<String> for RouteInput {
    fn from(value: String) -> Self {
        Self::Id(value)
    }
}

impl From<ProviderRef> for RouteInput {
    fn from(value: ProviderRef) -> Self {
        Self::Ref(value)
    }
}

impl From<&ProviderRef> for RouteInput {
    fn from(value: &ProviderRef) -> Self {
        Self::Ref(value.clone())
    }
}

impl RouteInput {
    /// Strict parse; loose and untyped ids are rejected.
    fn into_provider_ref(self) -> Option<ProviderRef> {
        match self {
            Self::Ref(r) => Some(r),
            Self::Id(id) => {
                let parts = parse_episode_id_suffix(&id);
                parse_provider_ref_strict(&parts.base_id).map(|r| r.with_episode(parts.suffix))
            }
        }
    }
}

/// Routes ids between providers and dispatches enrichment.
///
/// Immutable once built; share it behind an `Arc` for concurrent use.
///
/// # Examples
///
/// ```rust,ignore
/// let router = MediaRouter::builder()
///     .resolver(imdb_to_tmdb)
///     .enricher(tmdb_enricher)
///     .build();
///
/// let details = router
///     .enrich(ProviderName::Tmdb, "imdb:movie:tt0137523", &ResolveContext::new())
///     .await?;
/// ```
pub struct MediaRouter {
    edges: HashMap<ProviderName, Vec<Arc<dyn ProviderResolver>>>,
    enrichers: HashMap<ProviderName, Arc<dyn ProviderEnricher>>,
}

impl MediaRouter {
    /// Build a router from resolver edges and enrichers.
    ///
    /// Edges keep their registration order per source provider. When two
    /// enrichers share a provider the later one wins.
    pub fn new<R, E>(resolvers: R, enrichers: E) -> Self
    where
        R: IntoIterator<Item = Arc<dyn ProviderResolver>>,
        E: IntoIterator<Item = Arc<dyn ProviderEnricher>>,
    {
        let mut edges: HashMap<ProviderName, Vec<Arc<dyn ProviderResolver>>> = HashMap::new();
        let mut edge_count = 0usize;
        for resolver in resolvers {
            edges
                .entry(resolver.from_provider())
                .or_default()
                .push(resolver);
            edge_count += 1;
        }

        let mut by_provider: HashMap<ProviderName, Arc<dyn ProviderEnricher>> = HashMap::new();
        for enricher in enrichers {
            let provider = enricher.provider();
            if by_provider.insert(provider, enricher).is_some() {
                tracing::debug!(provider = %provider, "replacing previously registered enricher");
            }
        }

        tracing::debug!(
            edges = edge_count,
            enrichers = by_provider.len(),
            "media router built"
        );

        Self {
            edges,
            enrichers: by_provider,
        }
    }

    pub fn builder() -> MediaRouterBuilder {
        MediaRouterBuilder::default()
    }

    /// Whether an enricher is registered for `provider`.
    pub fn has_enricher(&self, provider: ProviderName) -> bool {
        self.enrichers.contains_key(&provider)
    }

    /// Outgoing edges registered for `provider`, in registration order.
    pub fn edges_from(&self, provider: ProviderName) -> &[Arc<dyn ProviderResolver>] {
        self.edges
            .get(&provider)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Translate `input` into `target`'s namespace.
    ///
    /// Returns `BAD_ID` for anything but a strict ref, the input itself when it
    /// is already in `target`, `PROVIDER_ERROR` as soon as any edge fails, and
    /// `UNRESOLVABLE` when the search is exhausted.
    pub async fn resolve_to(
        &self,
        target: ProviderName,
        input: impl Into<RouteInput>,
        ctx: &ResolveContext,
    ) -> RouterResult<ProviderRef> {
        let Some(start) = input.into().into_provider_ref() else {
            return Err(RouterError::bad_id(
                "Invalid provider id; expected `provider:kind:id`.",
            ));
        };

        if start.provider() == target {
            tracing::trace!(input = %start, "already in target namespace");
            return Ok(start);
        }

        tracing::debug!(input = %start, target = %target, "resolving");

        let mut visited = HashSet::from([start.provider()]);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for resolver in self.edges_from(current.provider()) {
                let from = resolver.from_provider();
                let to = resolver.to_provider();
                if visited.contains(&to) {
                    tracing::trace!(from = %from, to = %to, "skipping edge to visited provider");
                    continue;
                }

                tracing::debug!(from = %from, to = %to, input = %current, "invoking resolver");
                let next = match resolver.resolve(&current, ctx).await {
                    Ok(Some(next)) => next,
                    Ok(None) => {
                        tracing::trace!(from = %from, to = %to, "no mapping on edge");
                        continue;
                    }
                    Err(e) => {
                        tracing::warn!(from = %from, to = %to, error = %e, "resolver failed");
                        return Err(RouterError::provider_error(
                            format!("Resolver {from} -> {to} failed."),
                            e,
                        ));
                    }
                };

                if next.provider() == target {
                    tracing::debug!(output = %next, "resolved");
                    return Ok(next);
                }

                if !visited.insert(next.provider()) {
                    tracing::trace!(from = %from, to = %to, output = %next, "resolver returned a visited provider");
                    continue;
                }
                queue.push_back(next);
            }
        }

        Err(RouterError::unresolvable(format!(
            "No resolver path found to {target}."
        )))
    }

    /// Resolve `input` into `target`'s namespace and fetch its details there.
    ///
    /// The enricher is checked before any resolver runs, so a missing
    /// enricher costs no provider calls.
    pub async fn enrich(
        &self,
        target: ProviderName,
        input: impl Into<RouteInput>,
        ctx: &ResolveContext,
    ) -> RouterResult<MediaDetails> {
        let Some(enricher) = self.enrichers.get(&target) else {
            return Err(RouterError::unsupported(format!(
                "No enricher registered for {target}."
            )));
        };

        let resolved = self.resolve_to(target, input, ctx).await?;

        enricher.enrich(&resolved, ctx).await.map_err(|e| {
            tracing::warn!(provider = %target, input = %resolved, error = %e, "enricher failed");
            RouterError::provider_error(format!("{target} enricher failed."), e)
        })
    }
}

impl std::fmt::Debug for MediaRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut providers: Vec<&ProviderName> = self.enrichers.keys().collect();
        providers.sort();
        f.debug_struct("MediaRouter")
            .field("edges", &self.edges.values().map(Vec::len).sum::<usize>())
            .field("enrichers", &providers)
            .finish()
    }
}

/// Builder for [`MediaRouter`].
#[derive(Default)]
pub struct MediaRouterBuilder {
    resolvers: Vec<Arc<dyn ProviderResolver>>,
    enrichers: Vec<Arc<dyn ProviderEnricher>>,
}

impl MediaRouterBuilder {
    /// Register a resolver edge.
    pub fn resolver<R: ProviderResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolvers.push(Arc::new(resolver));
        self
    }

    /// Register an already shared resolver edge.
    pub fn shared_resolver(mut self, resolver: Arc<dyn ProviderResolver>) -> Self {
        self.resolvers.push(resolver);
        self
    }

    /// Register an enricher. A later enricher for the same provider wins.
    pub fn enricher<E: ProviderEnricher + 'static>(mut self, enricher: E) -> Self {
        self.enrichers.push(Arc::new(enricher));
        self
    }

    pub fn shared_enricher(mut self, enricher: Arc<dyn ProviderEnricher>) -> Self {
        self.enrichers.push(enricher);
        self
    }

    pub fn build(self) -> MediaRouter {
        MediaRouter::new(self.resolvers, self.enrichers)
    }
}
