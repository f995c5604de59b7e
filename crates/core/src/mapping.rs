//! Mapping a normalized `MediaInfo` into a partial destination update.

use std::collections::BTreeMap;

use crate::lookup::MediaInfo;
use crate::record::{PROP_AUTHOR, PROP_CATEGORY, PROP_PAGES, PROP_RATING, PROP_SUMMARY};

const STAR: &str = "⭐️";

/// A destination property value, by workspace property flavor.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    MultiSelect(Vec<String>),
    Select(String),
    Number(f64),
}

/// Partial update for one record: only the properties with present source
/// data, plus the cover image URL the driver sets unconditionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordUpdate {
    pub properties: BTreeMap<String, PropertyValue>,
    pub cover_url: String,
}

/// Build the partial update. Each rule applies independently; absent source
/// data (empty/zero) omits the destination key entirely, so this mapping
/// never clears a field.
pub fn map_media_info(info: &MediaInfo) -> RecordUpdate {
    let mut properties = BTreeMap::new();
    if !info.authors.is_empty() {
        properties.insert(
            PROP_AUTHOR.to_string(),
            PropertyValue::Text(info.authors.join(",")),
        );
    }
    if !info.summary.is_empty() {
        properties.insert(
            PROP_SUMMARY.to_string(),
            PropertyValue::Text(info.summary.clone()),
        );
    }
    if !info.categories.is_empty() {
        properties.insert(
            PROP_CATEGORY.to_string(),
            PropertyValue::MultiSelect(info.categories.clone()),
        );
    }
    // Floor truncation; a rating under 1.0 would produce an empty select
    // label, which the workspace rejects, so it is treated as absent.
    let stars = info.rating.max(0.0) as usize;
    if stars >= 1 {
        properties.insert(
            PROP_RATING.to_string(),
            PropertyValue::Select(STAR.repeat(stars)),
        );
    }
    if info.page_count > 0 {
        properties.insert(
            PROP_PAGES.to_string(),
            PropertyValue::Number(info.page_count as f64),
        );
    }
    RecordUpdate {
        properties,
        cover_url: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_info() -> MediaInfo {
        MediaInfo {
            authors: vec!["Frank Herbert".to_string()],
            link: "http://books/dune".to_string(),
            summary: "Desert planet.".to_string(),
            categories: vec!["Fiction".to_string()],
            rating: 4.0,
            image: "http://x/y.jpg".to_string(),
            page_count: 412,
        }
    }

    #[test]
    fn authors_join_with_comma_no_trailing_separator() {
        let info = MediaInfo {
            authors: vec!["A".to_string(), "B".to_string()],
            ..Default::default()
        };
        let update = map_media_info(&info);
        assert_eq!(
            update.properties.get(PROP_AUTHOR),
            Some(&PropertyValue::Text("A,B".to_string()))
        );
    }

    #[test]
    fn empty_info_maps_to_no_properties() {
        let update = map_media_info(&MediaInfo::default());
        assert!(update.properties.is_empty());
    }

    #[test]
    fn rating_floor_truncates() {
        let info = MediaInfo { rating: 3.7, ..Default::default() };
        let update = map_media_info(&info);
        assert_eq!(
            update.properties.get(PROP_RATING),
            Some(&PropertyValue::Select("⭐️⭐️⭐️".to_string()))
        );
    }

    #[test]
    fn zero_rating_maps_to_no_rating_field() {
        let info = MediaInfo { rating: 0.0, ..Default::default() };
        assert!(map_media_info(&info).properties.get(PROP_RATING).is_none());
    }

    #[test]
    fn sub_one_rating_maps_to_no_rating_field() {
        let info = MediaInfo { rating: 0.5, ..Default::default() };
        assert!(map_media_info(&info).properties.get(PROP_RATING).is_none());
    }

    #[test]
    fn full_info_maps_all_five_fields() {
        let update = map_media_info(&full_info());
        assert_eq!(update.properties.len(), 5);
        assert_eq!(
            update.properties.get(PROP_AUTHOR),
            Some(&PropertyValue::Text("Frank Herbert".to_string()))
        );
        assert_eq!(
            update.properties.get(PROP_SUMMARY),
            Some(&PropertyValue::Text("Desert planet.".to_string()))
        );
        assert_eq!(
            update.properties.get(PROP_CATEGORY),
            Some(&PropertyValue::MultiSelect(vec!["Fiction".to_string()]))
        );
        assert_eq!(
            update.properties.get(PROP_RATING),
            Some(&PropertyValue::Select("⭐️⭐️⭐️⭐️".to_string()))
        );
        assert_eq!(
            update.properties.get(PROP_PAGES),
            Some(&PropertyValue::Number(412.0))
        );
    }

    #[test]
    fn link_is_never_mapped() {
        let info = MediaInfo {
            link: "http://books/dune".to_string(),
            ..Default::default()
        };
        assert!(map_media_info(&info).properties.is_empty());
    }

    #[test]
    fn cover_is_not_set_by_mapping() {
        let update = map_media_info(&full_info());
        assert_eq!(update.cover_url, "");
    }
}
