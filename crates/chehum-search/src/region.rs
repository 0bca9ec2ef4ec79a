//! Region classification and detailed-region keyword normalisation.

use serde::{Deserialize, Serialize};

use crate::vocabulary::PROVINCE_CODES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    City,
    Province,
    Nationwide,
    Delivery,
}

/// Level of a canonical region code. Anything that is not a province or a
/// sentinel is treated as a city.
pub fn region_level(code: &str) -> RegionLevel {
    match code {
        "전국" => RegionLevel::Nationwide,
        "배송" => RegionLevel::Delivery,
        c if PROVINCE_CODES.contains(&c) => RegionLevel::Province,
        _ => RegionLevel::City,
    }
}

/// Drop one trailing 시/구/군 from a district name, unless that would leave a
/// single character ("중구" stays "중구").
pub fn detailed_region_keyword(name: &str) -> String {
    let name = name.trim();
    let stripped = name
        .strip_suffix('시')
        .or_else(|| name.strip_suffix('구'))
        .or_else(|| name.strip_suffix('군'));
    match stripped {
        Some(s) if s.chars().count() >= 2 => s.to_string(),
        _ => name.to_string(),
    }
}
