//! Coercion of legacy and mixed inputs into a strict [`ProviderRef`].

use mediaref_core::{MediaType, NumericIdAssumption, ParseOptions, ProviderKind, ProviderRef};

use crate::canonical::provider_ref_from_external_ids;
use crate::external::MediaIdInput;
use crate::grammar::{parse_provider_ref_loose, parse_provider_ref_strict};
use crate::media_id::parse_media_id_input;
use crate::suffix::parse_episode_id_suffix;

/// Coerce any id input into a strict [`ProviderRef`].
///
/// Accepts, in order of preference:
/// - strict `provider:kind:id` (the kind in the input wins over `kind`)
/// - loose `provider:id`, which takes `kind` as its default
/// - anything [`parse_media_id_input`] recognizes (`tt…`, `imdb:tt…`, and bare
///   numbers when `assume` names a provider), picked by canonical precedence
///
/// A trailing `:season:episode` is carried onto the ref in every case.
///
/// ```
/// use mediaref_core::{NumericIdAssumption, ProviderKind};
/// use mediaref_ids::coerce_provider_ref;
///
/// let r = coerce_provider_ref("tmdb:1399:1:2", ProviderKind::Show, NumericIdAssumption::None).unwrap();
/// assert_eq!(r.to_episode_id(), "tmdb:show:1399:1:2");
/// assert!(coerce_provider_ref("550", ProviderKind::Movie, NumericIdAssumption::None).is_none());
/// ```
pub fn coerce_provider_ref(
    input: impl Into<MediaIdInput>,
    kind: ProviderKind,
    assume: NumericIdAssumption,
) -> Option<ProviderRef> {
    let input = input.into();

    if let MediaIdInput::Text(text) = &input {
        let parts = parse_episode_id_suffix(text);

        if let Some(strict) = parse_provider_ref_strict(&parts.base_id) {
            return Some(strict.with_episode(parts.suffix));
        }

        if let Some(loose) = parse_provider_ref_loose(&parts.base_id) {
            return Some(loose.into_strict(kind).with_episode(parts.suffix));
        }
    }

    let options = ParseOptions {
        assume_numeric: assume,
        loose_imdb: false,
    };
    let parsed = parse_media_id_input(input, &options);
    provider_ref_from_external_ids(&parsed.ids, kind).map(|r| r.with_episode(parsed.episode))
}

/// [`coerce_provider_ref`] with the default kind derived from a movie/series type.
pub fn coerce_provider_ref_for_media_type(
    input: impl Into<MediaIdInput>,
    media_type: MediaType,
    assume: NumericIdAssumption,
) -> Option<ProviderRef> {
    coerce_provider_ref(input, media_type.provider_kind(), assume)
}
