//! Chehum Search — natural-language campaign search.
//!
//! Turns free text such as `"강남 이번주 맛집 방문형"` into structured
//! listing filters by exact substring matching against ordered Korean keyword
//! tables, and recovers the leftover text for a fallback title search.

pub mod keywords;
pub mod parser;
pub mod region;
pub mod residual;
pub mod types;
pub mod vocabulary;
pub mod window;

pub use keywords::{Keyword, KeywordEntry, KeywordTable, KeywordTables};
pub use parser::{default_parser, parse_search_query, QueryParser};
pub use region::{detailed_region_keyword, region_level, RegionLevel};
pub use residual::extract_filters_from_query;
pub use types::{
    CampaignType, DeadlineBucket, ExtractedFilters, ParsedQuery, SearchFilters,
    DEADLINE_DISPLAY_MAP, TYPE_DISPLAY_MAP,
};
pub use window::DateWindow;
