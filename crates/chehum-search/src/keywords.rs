//! Keyword matching primitives and the ordered keyword tables.
//!
//! A [`Keyword`] is a case-insensitive literal with an optional list of
//! suffixes that cancel a hit. A [`KeywordTable`] is an ordered list of
//! `(code, keywords)` entries; first-match lookups honour declaration order.

use std::ops::Range;

use chehum_core::{Error, Result};
use regex::{Regex, RegexBuilder};

use crate::types::{CampaignType, DeadlineBucket};
use crate::vocabulary::{
    CATEGORY_KEYWORDS, CHANNEL_KEYWORDS, CITY_KEYWORDS, EXCLUSION_SUFFIXES, REGION_KEYWORDS,
};

/// A surface keyword.
#[derive(Debug, Clone)]
pub struct Keyword {
    text: String,
    pattern: Regex,
    excluded_suffixes: Vec<String>,
}

impl Keyword {
    pub fn new(text: &str) -> Result<Self> {
        Self::with_exclusions(text, &[])
    }

    /// A keyword whose occurrences directly followed by any of `suffixes`
    /// do not count.
    pub fn with_exclusions(text: &str, suffixes: &[&str]) -> Result<Self> {
        let pattern = RegexBuilder::new(&regex::escape(text))
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::Config(format!("keyword {text:?}: {e}")))?;
        Ok(Self {
            text: text.to_string(),
            pattern,
            excluded_suffixes: suffixes.iter().map(|s| s.to_lowercase()).collect(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte ranges of every counted occurrence in `haystack`.
    pub fn occurrences(&self, haystack: &str) -> Vec<Range<usize>> {
        self.pattern
            .find_iter(haystack)
            .filter(|m| !self.is_excluded_at(haystack, m.end()))
            .map(|m| m.range())
            .collect()
    }

    pub fn is_found_in(&self, haystack: &str) -> bool {
        self.pattern
            .find_iter(haystack)
            .any(|m| !self.is_excluded_at(haystack, m.end()))
    }

    /// `haystack` with every counted occurrence removed.
    pub fn strip_from(&self, haystack: &str) -> String {
        let mut out = String::with_capacity(haystack.len());
        let mut last = 0;
        for range in self.occurrences(haystack) {
            out.push_str(&haystack[last..range.start]);
            last = range.end;
        }
        out.push_str(&haystack[last..]);
        out
    }

    fn is_excluded_at(&self, haystack: &str, end: usize) -> bool {
        if self.excluded_suffixes.is_empty() {
            return false;
        }
        let rest = haystack[end..].to_lowercase();
        self.excluded_suffixes.iter().any(|s| rest.starts_with(s.as_str()))
    }
}

/// One canonical code and the keywords that resolve to it.
#[derive(Debug, Clone)]
pub struct KeywordEntry<C> {
    pub code: C,
    pub keywords: Vec<Keyword>,
}

impl<C> KeywordEntry<C> {
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| k.is_found_in(text))
    }

    pub fn matched_keywords<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Keyword> + 'a {
        self.keywords.iter().filter(move |k| k.is_found_in(text))
    }
}

/// Ordered `(code, keywords)` table.
#[derive(Debug, Clone)]
pub struct KeywordTable<C> {
    entries: Vec<KeywordEntry<C>>,
}

impl<C: PartialEq> KeywordTable<C> {
    pub fn new(entries: Vec<KeywordEntry<C>>) -> Self {
        Self { entries }
    }

    /// Build from `(code, keywords)` pairs. A keyword listed in `exclusions`
    /// gets that entry's suffix list.
    pub fn build<'k, I, K>(pairs: I, exclusions: &[(&str, &[&str])]) -> Result<Self>
    where
        I: IntoIterator<Item = (C, K)>,
        K: IntoIterator<Item = &'k str>,
    {
        let mut entries = Vec::new();
        for (code, keywords) in pairs {
            let keywords = keywords
                .into_iter()
                .map(|text| {
                    let suffixes = exclusions
                        .iter()
                        .find(|(kw, _)| *kw == text)
                        .map(|(_, s)| *s)
                        .unwrap_or(&[]);
                    Keyword::with_exclusions(text, suffixes)
                })
                .collect::<Result<Vec<_>>>()?;
            entries.push(KeywordEntry { code, keywords });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[KeywordEntry<C>] {
        &self.entries
    }

    /// First entry, in declaration order, with any keyword in `text`.
    pub fn first_match(&self, text: &str) -> Option<&KeywordEntry<C>> {
        self.entries.iter().find(|e| e.matches(text))
    }

    /// Every entry with a keyword in `text`, in declaration order.
    pub fn all_matches(&self, text: &str) -> Vec<&KeywordEntry<C>> {
        self.entries.iter().filter(|e| e.matches(text)).collect()
    }

    pub fn entry(&self, code: &C) -> Option<&KeywordEntry<C>> {
        self.entries.iter().find(|e| &e.code == code)
    }
}

impl KeywordTable<String> {
    /// Lookup by code as `&str`.
    pub fn entry_str(&self, code: &str) -> Option<&KeywordEntry<String>> {
        self.entries.iter().find(|e| e.code == code)
    }
}

/// The full set of tables the parser consults.
#[derive(Debug, Clone)]
pub struct KeywordTables {
    pub cities: KeywordTable<String>,
    pub regions: KeywordTable<String>,
    pub categories: KeywordTable<String>,
    pub deadlines: KeywordTable<DeadlineBucket>,
    pub types: KeywordTable<CampaignType>,
    pub channels: KeywordTable<String>,
}

impl KeywordTables {
    /// The built-in Korean vocabulary.
    pub fn korean() -> Result<Self> {
        Ok(Self {
            cities: string_table(CITY_KEYWORDS)?,
            regions: string_table(REGION_KEYWORDS)?,
            categories: string_table(CATEGORY_KEYWORDS)?,
            deadlines: KeywordTable::build(
                DeadlineBucket::ALL.map(|b| (b, [b.label()])),
                EXCLUSION_SUFFIXES,
            )?,
            types: KeywordTable::build(
                CampaignType::ALL.map(|t| (t, [t.label()])),
                EXCLUSION_SUFFIXES,
            )?,
            channels: string_table(CHANNEL_KEYWORDS)?,
        })
    }

    /// Region entry for `code`, city table first.
    pub fn region_entry(&self, code: &str) -> Option<&KeywordEntry<String>> {
        self.cities
            .entry_str(code)
            .or_else(|| self.regions.entry_str(code))
    }
}

fn string_table(pairs: &[(&str, &[&str])]) -> Result<KeywordTable<String>> {
    KeywordTable::build(
        pairs
            .iter()
            .map(|(code, keywords)| (code.to_string(), keywords.iter().copied())),
        EXCLUSION_SUFFIXES,
    )
}
