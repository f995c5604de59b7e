//! Media info lookup via pluggable catalog providers.

pub mod googlebooks;

use std::collections::HashMap;

use crate::error::LookupError;
use crate::record::MediaKind;

/// Normalized metadata bundle returned by a catalog provider.
///
/// Zero/empty fields mean "absent": the mapper writes no destination field
/// for them, so existing values are never cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaInfo {
    /// Ordered author list (a film provider would put the director here).
    pub authors: Vec<String>,
    /// Canonical catalog link.
    pub link: String,
    pub summary: String,
    pub categories: Vec<String>,
    /// 1.0 to 5.0; 0.0 when the catalog has no rating.
    pub rating: f64,
    /// Cover thumbnail URL; may be empty.
    pub image: String,
    /// 0 when unknown or not applicable.
    pub page_count: i64,
}

/// Connection to an external media catalog. Implementations issue a
/// title-based search and take the first ranked match only; there is no
/// disambiguation step.
pub trait MediaInfoProvider: Send + Sync {
    /// Short provider name (e.g. "googlebooks"), for logs.
    fn name(&self) -> &str;

    fn fetch(&self, title: &str) -> Result<MediaInfo, LookupError>;
}

/// Capability registry keyed by media kind, populated once at process start.
/// Unknown or unregistered kinds resolve to no capability rather than an
/// error, and adding a catalog is a pure addition here.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<MediaKind, Box<dyn MediaInfoProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: MediaKind, provider: Box<dyn MediaInfoProvider>) {
        self.providers.insert(kind, provider);
    }

    pub fn provider_for(&self, kind: MediaKind) -> Option<&dyn MediaInfoProvider> {
        self.providers.get(&kind).map(|p| p.as_ref())
    }

    /// Registry with every provider this build ships.
    pub fn with_default_providers() -> Self {
        let mut registry = Self::new();
        registry.register(
            MediaKind::Book,
            Box::new(googlebooks::GoogleBooksProvider::new()),
        );
        // TODO: MediaKind::Film (TMDB) and MediaKind::Game (Steam) providers
        registry
    }
}
