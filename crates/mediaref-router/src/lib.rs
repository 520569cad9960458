//! # mediaref-router
//!
//! Translates strict `provider:kind:id` refs between provider namespaces by
//! breadth-first search over registered resolver edges, and dispatches
//! enrichment to a per-provider [`ProviderEnricher`].
//!
//! ```
//! use futures::FutureExt;
//! use mediaref_core::{ProviderName, ProviderRef};
//! use mediaref_router::{resolver_fn, MediaRouter, ResolveContext};
//!
//! # block_on(async {
//! let router = MediaRouter::builder()
//!     .resolver(resolver_fn(ProviderName::Imdb, ProviderName::Tmdb, |input, _ctx| {
//!         async move { Ok(ProviderRef::numeric(ProviderName::Tmdb, input.kind, 550)) }.boxed()
//!     }))
//!     .build();
//!
//! let tmdb = router
//!     .resolve_to(ProviderName::Tmdb, "imdb:movie:tt0137523", &ResolveContext::new())
//!     .await
//!     .unwrap();
//! assert_eq!(tmdb.to_string(), "tmdb:movie:550");
//! # });
//! # fn block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     futures::executor::block_on(f)
//! # }
//! ```

pub mod error;
pub mod resolver;
pub mod router;

pub use error::{RouterError, RouterErrorCode, RouterResult};
pub use resolver::{
    enricher_fn, resolver_fn, FnEnricher, FnResolver, ProviderEnricher, ProviderResolver,
    ResolveContext,
};
pub use router::{MediaRouter, MediaRouterBuilder, RouteInput};
