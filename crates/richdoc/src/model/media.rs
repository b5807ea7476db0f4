//! Media references and URL resolution.

use ecow::EcoString;
use serde_json::{Map, Value};

/// Fields of a media object tried in order when resolving its URL.
pub const MEDIA_URL_FIELDS: [&str; 3] = ["url", "fallbackUrl", "thumbnailURL"];

/// An image whose source URL is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    /// The resolved source URL.
    pub url: EcoString,
    /// Alternative text, empty when absent.
    pub alt: EcoString,
}

/// A reference to an externally stored file, as embedded by the CMS.
///
/// An unpopulated relation (a bare id) carries no fields and never resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaRef {
    /// Candidate URLs in [`MEDIA_URL_FIELDS`] order, absent ones skipped.
    urls: Vec<EcoString>,
    /// Alternative text stored on the media object.
    alt: Option<EcoString>,
}

impl MediaRef {
    /// Reads a media reference from the `value` of an upload node.
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(object) = value.and_then(Value::as_object) else {
            return Self::default();
        };

        Self {
            urls: MEDIA_URL_FIELDS
                .iter()
                .filter_map(|field| non_empty_str(object, field))
                .collect(),
            alt: non_empty_str(object, "alt"),
        }
    }

    /// The first populated URL field.
    pub fn url(&self) -> Option<&EcoString> {
        self.urls.first()
    }

    /// Resolves the reference into a displayable image.
    pub fn resolve(&self) -> Option<ResolvedImage> {
        Some(ResolvedImage {
            url: self.url()?.clone(),
            alt: self.alt.clone().unwrap_or_default(),
        })
    }
}

/// Reads a string field, treating empty and whitespace-only strings as absent.
pub(crate) fn non_empty_str(object: &Map<String, Value>, field: &str) -> Option<EcoString> {
    object
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(EcoString::from)
}

/// Reads the first present field among `fields`.
pub(crate) fn first_str(object: &Map<String, Value>, fields: &[&str]) -> Option<EcoString> {
    fields.iter().find_map(|field| non_empty_str(object, field))
}
