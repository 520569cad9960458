//! Parsing configuration.
//!
//! [`ParseOptions`] controls how ambiguous inputs are interpreted by the id
//! parsers. It deserializes from JSON with every field defaulted, so an empty
//! `{}` yields the strict defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::media::ProviderName;

/// Which provider, if any, a bare numeric id is attributed to.
///
/// An un-prefixed number is ambiguous across the numeric-id providers, so the
/// default is [`NumericIdAssumption::None`]. IMDb is never a valid assumption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericIdAssumption {
    #[default]
    None,
    Tmdb,
    Trakt,
    Tvdb,
    Simkl,
}

impl NumericIdAssumption {
    /// The provider a bare numeric id should be attributed to.
    pub fn provider(&self) -> Option<ProviderName> {
        match self {
            Self::None => None,
            Self::Tmdb => Some(ProviderName::Tmdb),
            Self::Trakt => Some(ProviderName::Trakt),
            Self::Tvdb => Some(ProviderName::Tvdb),
            Self::Simkl => Some(ProviderName::Simkl),
        }
    }
}

/// Options for the unified id parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// How bare numeric inputs are interpreted. Default: none.
    pub assume_numeric: NumericIdAssumption,

    /// Permissive IMDb normalization for messy inputs (`123` → `tt123`,
    /// `imdb:123` → `tt123`). Default: false.
    pub loose_imdb: bool,
}

impl ParseOptions {
    /// Strict defaults: no numeric assumption, no loose IMDb.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Options matching pre-typed call sites, where bare numbers were TMDB ids.
    pub fn legacy() -> Self {
        Self {
            assume_numeric: NumericIdAssumption::Tmdb,
            loose_imdb: false,
        }
    }

    /// Create a builder.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::default()
    }

    /// Deserialize options from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| Error::config(format!("parse options: {e}")))
    }

    /// Deserialize options from JSON, falling back to strict defaults on error.
    pub fn from_json_or_default(json_str: &str) -> Self {
        Self::from_json(json_str).unwrap_or_else(|e| {
            tracing::warn!("Invalid parse options, using strict defaults: {e}");
            Self::default()
        })
    }
}

/// Builder for [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    assume_numeric: Option<NumericIdAssumption>,
    loose_imdb: Option<bool>,
}

impl ParseOptionsBuilder {
    /// Attribute bare numeric ids to the given provider.
    pub fn assume_numeric(mut self, assumption: NumericIdAssumption) -> Self {
        self.assume_numeric = Some(assumption);
        self
    }

    /// Enable or disable permissive IMDb normalization.
    pub fn loose_imdb(mut self, enabled: bool) -> Self {
        self.loose_imdb = Some(enabled);
        self
    }

    pub fn build(self) -> ParseOptions {
        ParseOptions {
            assume_numeric: self.assume_numeric.unwrap_or_default(),
            loose_imdb: self.loose_imdb.unwrap_or(false),
        }
    }
}
