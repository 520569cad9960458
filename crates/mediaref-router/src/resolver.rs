//! Resolver and enricher collaborator traits.
//!
//! A [`ProviderResolver`] is one directed edge in the provider graph: it maps a
//! ref in one provider's namespace to the same item in another's. A
//! [`ProviderEnricher`] fetches full [`MediaDetails`] for a ref in its
//! provider's namespace.
//!
//! Callbacks return `anyhow::Result`. `Ok(None)` from a resolver means "no
//! mapping on this edge"; an `Err` aborts the whole resolution.

use async_trait::async_trait;
use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use mediaref_core::{MediaDetails, ProviderName, ProviderRef};

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Per-call context threaded through to every callback.
///
/// The router never checks the token itself; honoring it is up to the
/// callback.
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    pub cancellation: Option<CancellationToken>,
}

impl ResolveContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: attach a cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Whether a cancellation token is attached and has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A directed edge translating refs from one provider to another.
#[async_trait]
pub trait ProviderResolver: Send + Sync {
    /// Source provider of this edge.
    fn from_provider(&self) -> ProviderName;

    /// Destination provider of this edge.
    fn to_provider(&self) -> ProviderName;

    /// Map `input` into the destination namespace.
    ///
    /// Return `Ok(None)` when no mapping exists. Return `Err` only for
    /// failures (network, auth, ...); it stops the search.
    async fn resolve(
        &self,
        input: &ProviderRef,
        ctx: &ResolveContext,
    ) -> anyhow::Result<Option<ProviderRef>>;
}

/// Fetches [`MediaDetails`] for refs in one provider's namespace.
#[async_trait]
pub trait ProviderEnricher: Send + Sync {
    fn provider(&self) -> ProviderName;

    async fn enrich(&self, input: &ProviderRef, ctx: &ResolveContext) -> anyhow::Result<MediaDetails>;
}

// ---------------------------------------------------------------------------
// Closure adapters
// ---------------------------------------------------------------------------

/// A [`ProviderResolver`] backed by a closure. Built with [`resolver_fn`].
pub struct FnResolver<F> {
    from: ProviderName,
    to: ProviderName,
    resolve: F,
}

/// Build a resolver edge from a closure returning a boxed future.
///
/// ```
/// use futures::FutureExt;
/// use mediaref_core::{ProviderKind, ProviderName, ProviderRef};
/// use mediaref_router::{resolver_fn, ProviderResolver};
///
/// let edge = resolver_fn(ProviderName::Imdb, ProviderName::Tmdb, |input, _ctx| {
///     async move { Ok(ProviderRef::numeric(ProviderName::Tmdb, input.kind, 550)) }.boxed()
/// });
/// assert_eq!(edge.from_provider(), ProviderName::Imdb);
/// ```
pub fn resolver_fn<F>(from: ProviderName, to: ProviderName, resolve: F) -> FnResolver<F>
where
    F: Fn(ProviderRef, ResolveContext) -> BoxFuture<'static, anyhow::Result<Option<ProviderRef>>>
        + Send
        + Sync,
{
    FnResolver { from, to, resolve }
}

#[async_trait]
impl<F> ProviderResolver for FnResolver<F>
where
    F: Fn(ProviderRef, ResolveContext) -> BoxFuture<'static, anyhow::Result<Option<ProviderRef>>>
        + Send
        + Sync,
{
    fn from_provider(&self) -> ProviderName {
        self.from
    }

    fn to_provider(&self) -> ProviderName {
        self.to
    }

    async fn resolve(
        &self,
        input: &ProviderRef,
        ctx: &ResolveContext,
    ) -> anyhow::Result<Option<ProviderRef>> {
        (self.resolve)(input.clone(), ctx.clone()).await
    }
}

impl<F> std::fmt::Debug for FnResolver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnResolver")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

/// A [`ProviderEnricher`] backed by a closure. Built with [`enricher_fn`].
pub struct FnEnricher<F> {
    provider: ProviderName,
    enrich: F,
}

/// Build an enricher from a closure returning a boxed future.
pub fn enricher_fn<F>(provider: ProviderName, enrich: F) -> FnEnricher<F>
where
    F: Fn(ProviderRef, ResolveContext) -> BoxFuture<'static, anyhow::Result<MediaDetails>>
        + Send
        + Sync,
{
    FnEnricher { provider, enrich }
}

#[async_trait]
impl<F> ProviderEnricher for FnEnricher<F>
where
    F: Fn(ProviderRef, ResolveContext) -> BoxFuture<'static, anyhow::Result<MediaDetails>>
        + Send
        + Sync,
{
    fn provider(&self) -> ProviderName {
        self.provider
    }

    async fn enrich(&self, input: &ProviderRef, ctx: &ResolveContext) -> anyhow::Result<MediaDetails> {
        (self.enrich)(input.clone(), ctx.clone()).await
    }
}

impl<F> std::fmt::Debug for FnEnricher<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnEnricher")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use mediaref_core::{MediaType, ProviderKind};

    #[test]
    fn test_context_cancellation() {
        assert!(!ResolveContext::new().is_cancelled());

        let token = CancellationToken::new();
        let ctx = ResolveContext::new().with_cancellation(token.clone());
        assert!(!ctx.is_cancelled());
        token.cancel();
        assert!(ctx.is_cancelled());
    }

    #[tokio::test]
    async fn test_resolver_fn_forwards_input() {
        let edge = resolver_fn(ProviderName::Tmdb, ProviderName::Trakt, |input, _ctx| {
            async move {
                let id = input.id.as_numeric().map(|n| n.get() + 1).unwrap_or_default();
                Ok(ProviderRef::numeric(ProviderName::Trakt, input.kind, id))
            }
            .boxed()
        });

        assert_eq!(edge.to_provider(), ProviderName::Trakt);
        let input = ProviderRef::numeric(ProviderName::Tmdb, ProviderKind::Movie, 550).unwrap();
        let out = edge.resolve(&input, &ResolveContext::new()).await.unwrap();
        assert_eq!(out.map(|r| r.to_string()).as_deref(), Some("trakt:movie:551"));
    }

    #[tokio::test]
    async fn test_enricher_fn() {
        let enricher = enricher_fn(ProviderName::Tmdb, |input, _ctx| {
            async move { Ok(MediaDetails::new(input.id.to_string(), MediaType::Movie, "Fight Club")) }
                .boxed()
        });

        assert_eq!(enricher.provider(), ProviderName::Tmdb);
        let input = ProviderRef::numeric(ProviderName::Tmdb, ProviderKind::Movie, 550).unwrap();
        let details = enricher.enrich(&input, &ResolveContext::new()).await.unwrap();
        assert_eq!(details.id, "tmdb:550");
        assert_eq!(details.title, "Fight Club");
    }
}
