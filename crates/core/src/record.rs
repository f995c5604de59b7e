//! Records pulled from the watchlist database and their type discriminator.

/// Destination property names used by the watchlist database schema.
pub const PROP_TITLE: &str = "Title";
pub const PROP_MEDIA_TYPE: &str = "Media Type";
pub const PROP_SKIP: &str = "noauto";
pub const PROP_AUTHOR: &str = "Author/Director";
pub const PROP_SUMMARY: &str = "Summary";
pub const PROP_CATEGORY: &str = "Category";
pub const PROP_RATING: &str = "Avg. Rating";
pub const PROP_PAGES: &str = "Total Pages";

/// Media type discriminator. Each kind maps to at most one catalog provider;
/// this enumeration is intended to grow as catalogs are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Book,
    Film,
    Game,
}

impl MediaKind {
    /// Parse the raw select value; unknown tags are `None`, not an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Book" => Some(Self::Book),
            "Film" => Some(Self::Film),
            "Game" => Some(Self::Game),
            _ => None,
        }
    }
}

/// One row of the watchlist, as returned by a workspace query.
///
/// The parser keeps whatever cardinality the title property had; the batch
/// driver enforces the exactly-one rule so a malformed row becomes a logged
/// skip rather than a parse failure.
#[derive(Debug, Clone)]
pub struct Record {
    /// Opaque id assigned by the workspace (use for update).
    pub id: String,
    /// Raw object tag; only "page" records are eligible for enrichment.
    pub object: String,
    /// Elements of the title property. Exactly one is expected.
    pub titles: Vec<String>,
    /// Raw discriminator select value, if the property is set.
    pub media_type: Option<String>,
    /// The `noauto` checkbox: true means never auto-enrich this record.
    pub skip: bool,
}

impl Record {
    pub fn is_page(&self) -> bool {
        self.object == "page"
    }

    pub fn media_kind(&self) -> Option<MediaKind> {
        self.media_type.as_deref().and_then(MediaKind::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_parses_known_tags() {
        assert_eq!(MediaKind::parse("Book"), Some(MediaKind::Book));
        assert_eq!(MediaKind::parse("Film"), Some(MediaKind::Film));
        assert_eq!(MediaKind::parse("Game"), Some(MediaKind::Game));
    }

    #[test]
    fn media_kind_unknown_tag_is_none() {
        assert_eq!(MediaKind::parse("Podcast"), None);
        assert_eq!(MediaKind::parse("book"), None);
        assert_eq!(MediaKind::parse(""), None);
    }

    #[test]
    fn record_media_kind_goes_through_raw_value() {
        let mut record = Record {
            id: "r1".to_string(),
            object: "page".to_string(),
            titles: vec!["Dune".to_string()],
            media_type: Some("Book".to_string()),
            skip: false,
        };
        assert_eq!(record.media_kind(), Some(MediaKind::Book));
        record.media_type = None;
        assert_eq!(record.media_kind(), None);
    }
}
