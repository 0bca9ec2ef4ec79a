//! Parsed query and filter types, plus the code ↔ display-label maps.

use serde::{Deserialize, Serialize};

/// Application-deadline bucket recognised in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineBucket {
    /// Closing within a week ("마감임박").
    Deadline,
    ThisWeek,
    NextWeek,
    ThisMonth,
    Today,
    Tomorrow,
}

impl DeadlineBucket {
    /// All buckets in parser precedence order.
    pub const ALL: [DeadlineBucket; 6] = [
        Self::Deadline,
        Self::ThisWeek,
        Self::NextWeek,
        Self::ThisMonth,
        Self::Today,
        Self::Tomorrow,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Deadline => "deadline",
            Self::ThisWeek => "this_week",
            Self::NextWeek => "next_week",
            Self::ThisMonth => "this_month",
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
        }
    }

    /// Korean display text, which is also the phrase the parser recognises.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deadline => "마감임박",
            Self::ThisWeek => "이번주",
            Self::NextWeek => "다음주",
            Self::ThisMonth => "이번달",
            Self::Today => "오늘",
            Self::Tomorrow => "내일",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.code() == code)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

/// Campaign participation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    Visit,
    Delivery,
    Reporter,
}

impl CampaignType {
    pub const ALL: [CampaignType; 3] = [Self::Visit, Self::Delivery, Self::Reporter];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Visit => "visit",
            Self::Delivery => "delivery",
            Self::Reporter => "reporter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Visit => "방문형",
            Self::Delivery => "배송형",
            Self::Reporter => "기자단",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// Deadline bucket → display label, for UI rendering.
pub const DEADLINE_DISPLAY_MAP: [(DeadlineBucket, &str); 6] = [
    (DeadlineBucket::Deadline, "마감임박"),
    (DeadlineBucket::ThisWeek, "이번주"),
    (DeadlineBucket::NextWeek, "다음주"),
    (DeadlineBucket::ThisMonth, "이번달"),
    (DeadlineBucket::Today, "오늘"),
    (DeadlineBucket::Tomorrow, "내일"),
];

/// Campaign type → display label, for UI rendering.
pub const TYPE_DISPLAY_MAP: [(CampaignType, &str); 3] = [
    (CampaignType::Visit, "방문형"),
    (CampaignType::Delivery, "배송형"),
    (CampaignType::Reporter, "기자단"),
];

/// Result of parsing a free-text query. Absent fields mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    /// The input, verbatim.
    pub raw_query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DeadlineBucket>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<CampaignType>,
    /// Slash-joined channel codes, e.g. `"블로그/인스타"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl ParsedQuery {
    /// Empty result for `raw_query`.
    pub fn new(raw_query: impl Into<String>) -> Self {
        Self {
            raw_query: raw_query.into(),
            ..Default::default()
        }
    }

    /// Whether any filter was extracted.
    pub fn has_filters(&self) -> bool {
        !self.filters().is_empty()
    }

    /// Individual channel codes.
    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.channel
            .as_deref()
            .into_iter()
            .flat_map(|c| c.split('/'))
            .filter(|c| !c.is_empty())
    }

    /// The structured filters without the raw text.
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            region: self.region.clone(),
            category: self.category.clone(),
            deadline: self.deadline,
            campaign_type: self.campaign_type,
            channel: self.channel.clone(),
        }
    }
}

/// Structured listing filters, from the parser or from explicit UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DeadlineBucket>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<CampaignType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.category.is_none()
            && self.deadline.is_none()
            && self.campaign_type.is_none()
            && self.channel.is_none()
    }

    /// Overlay `extracted` on `self`; fields set in `extracted` win.
    pub fn merge(self, extracted: &SearchFilters) -> SearchFilters {
        SearchFilters {
            region: extracted.region.clone().or(self.region),
            category: extracted.category.clone().or(self.category),
            deadline: extracted.deadline.or(self.deadline),
            campaign_type: extracted.campaign_type.or(self.campaign_type),
            channel: extracted.channel.clone().or(self.channel),
        }
    }
}

/// Filters pulled out of a query plus the text left for a title search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFilters {
    pub filters: SearchFilters,
    pub clean_query: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deadline_display_map_is_bijective() {
        let codes: HashSet<_> = DEADLINE_DISPLAY_MAP.iter().map(|(b, _)| *b).collect();
        let labels: HashSet<_> = DEADLINE_DISPLAY_MAP.iter().map(|(_, l)| *l).collect();
        assert_eq!(codes.len(), DeadlineBucket::ALL.len());
        assert_eq!(labels.len(), DeadlineBucket::ALL.len());
        for (bucket, label) in DEADLINE_DISPLAY_MAP {
            assert_eq!(bucket.label(), label);
            assert_eq!(DeadlineBucket::from_label(label), Some(bucket));
        }
    }

    #[test]
    fn test_type_display_map_is_bijective() {
        let labels: HashSet<_> = TYPE_DISPLAY_MAP.iter().map(|(_, l)| *l).collect();
        assert_eq!(labels.len(), CampaignType::ALL.len());
        for (kind, label) in TYPE_DISPLAY_MAP {
            assert_eq!(kind.label(), label);
            assert_eq!(CampaignType::from_label(label), Some(kind));
            assert_eq!(CampaignType::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_serialized_shape() {
        let parsed = ParsedQuery {
            raw_query: "강남 방문형".into(),
            region: Some("강남".into()),
            deadline: Some(DeadlineBucket::ThisWeek),
            campaign_type: Some(CampaignType::Visit),
            ..Default::default()
        };
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["rawQuery"], "강남 방문형");
        assert_eq!(json["deadline"], "this_week");
        assert_eq!(json["type"], "visit");
        assert!(json.get("channel").is_none());
    }

    #[test]
    fn test_merge_prefers_extracted() {
        let ui = SearchFilters {
            region: Some("서울".into()),
            category: Some("뷰티".into()),
            ..Default::default()
        };
        let extracted = SearchFilters {
            region: Some("강남".into()),
            channel: Some("블로그".into()),
            ..Default::default()
        };
        let merged = ui.merge(&extracted);
        assert_eq!(merged.region.as_deref(), Some("강남"));
        assert_eq!(merged.category.as_deref(), Some("뷰티"));
        assert_eq!(merged.channel.as_deref(), Some("블로그"));
    }

    #[test]
    fn test_channels_split() {
        let parsed = ParsedQuery {
            channel: Some("블로그/인스타".into()),
            ..ParsedQuery::new("q")
        };
        assert_eq!(parsed.channels().collect::<Vec<_>>(), vec!["블로그", "인스타"]);
        assert_eq!(ParsedQuery::new("").channels().count(), 0);
    }
}
