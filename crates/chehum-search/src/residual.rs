//! Residual extraction: the part of a query left after removing every
//! keyword that produced a filter, used as a fallback title search.

use tracing::debug;

use crate::keywords::{Keyword, KeywordEntry};
use crate::parser::{default_parser, QueryParser};
use crate::types::{ExtractedFilters, ParsedQuery};

/// Residuals shorter than this (in characters) are dropped as noise.
const MIN_RESIDUAL_CHARS: usize = 2;

impl QueryParser {
    /// Text left in `query` after stripping the keywords behind `parsed`.
    ///
    /// With no filters the whole trimmed query is the residual. Otherwise the
    /// stripped remainder is returned only if it is at least two characters.
    pub fn extract_residual(&self, query: &str, parsed: &ParsedQuery) -> Option<String> {
        if !parsed.has_filters() {
            let trimmed = query.trim();
            return (!trimmed.is_empty()).then(|| trimmed.to_string());
        }

        let tables = self.tables();
        let mut owned: Vec<Keyword> = Vec::new();
        let mut keywords: Vec<&Keyword> = Vec::new();

        if let Some(region) = parsed.region.as_deref() {
            if let Some(entry) = tables.region_entry(region) {
                keywords.extend(&entry.keywords);
            }
            // "<region>시" also covers codes whose table entry lacks that form.
            for text in [format!("{region}시"), region.to_string()] {
                if !keywords.iter().any(|k| k.text() == text) {
                    if let Ok(kw) = Keyword::new(&text) {
                        owned.push(kw);
                    }
                }
            }
        }
        if let Some(category) = parsed.category.as_deref() {
            extend_from(&mut keywords, tables.categories.entry_str(category));
        }
        if let Some(bucket) = parsed.deadline {
            extend_from(&mut keywords, tables.deadlines.entry(&bucket));
        }
        if let Some(kind) = parsed.campaign_type {
            extend_from(&mut keywords, tables.types.entry(&kind));
        }
        for channel in parsed.channels() {
            extend_from(&mut keywords, tables.channels.entry_str(channel));
        }
        keywords.extend(owned.iter());

        // Longest first, so "수원시" goes before "수원" can leave a stray "시".
        keywords.sort_by_key(|k| std::cmp::Reverse(k.text().chars().count()));

        let mut remaining = query.to_string();
        for keyword in keywords {
            remaining = keyword.strip_from(&remaining);
        }
        let remaining = remaining.split_whitespace().collect::<Vec<_>>().join(" ");

        debug!("Residual for {:?}: {:?}", query, remaining);
        (remaining.chars().count() >= MIN_RESIDUAL_CHARS).then_some(remaining)
    }
}

fn extend_from<'a, C>(keywords: &mut Vec<&'a Keyword>, entry: Option<&'a KeywordEntry<C>>) {
    if let Some(entry) = entry {
        keywords.extend(&entry.keywords);
    }
}

/// Parse with the built-in vocabulary and split into filters and residual.
pub fn extract_filters_from_query(query: &str) -> ExtractedFilters {
    default_parser().extract_filters(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(query: &str) -> Option<String> {
        let parser = default_parser();
        parser.extract_residual(query, &parser.parse(query))
    }

    #[test]
    fn test_pure_miss_returns_whole_query() {
        assert_eq!(residual("하이"), Some("하이".to_string()));
        assert_eq!(residual("  신상 립스틱  "), Some("신상 립스틱".to_string()));
        assert_eq!(residual("   "), None);
    }

    #[test]
    fn test_strips_city_with_suffix() {
        assert_eq!(residual("수원시 피자"), Some("피자".to_string()));
        assert_eq!(residual("수원 피자"), Some("피자".to_string()));
    }

    #[test]
    fn test_strips_synonyms_not_just_codes() {
        assert_eq!(residual("강남 카페 디저트"), Some("디저트".to_string()));
        assert_eq!(residual("천안 호텔 수영장"), Some("수영장".to_string()));
    }

    #[test]
    fn test_strips_every_filter_kind() {
        assert_eq!(
            residual("강남 이번주 맛집 방문형 블로그 instagram 파스타"),
            Some("파스타".to_string())
        );
    }

    #[test]
    fn test_short_residual_suppressed() {
        assert_eq!(residual("강남 맛집"), None);
        assert_eq!(residual("강남 맛집 a"), None);
        assert_eq!(residual("블로그 인스타"), None);
    }

    #[test]
    fn test_cat_survives_goyang_strip() {
        assert_eq!(residual("고양 고양이 카페"), Some("고양이".to_string()));
    }

    #[test]
    fn test_case_insensitive_strip() {
        assert_eq!(residual("BLOG 리뷰 이벤트"), Some("리뷰 이벤트".to_string()));
    }

    #[test]
    fn test_extract_filters_from_query() {
        let extracted = extract_filters_from_query("수원시 피자 배송형");
        assert_eq!(extracted.filters.region.as_deref(), Some("수원"));
        assert_eq!(extracted.filters.campaign_type, Some(crate::CampaignType::Delivery));
        assert_eq!(extracted.clean_query.as_deref(), Some("피자"));

        let miss = extract_filters_from_query("하이");
        assert!(miss.filters.is_empty());
        assert_eq!(miss.clean_query.as_deref(), Some("하이"));
    }
}
