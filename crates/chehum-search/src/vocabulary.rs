//! Built-in Korean vocabulary.
//!
//! Each table is an ordered list of `(canonical code, surface keywords)`.
//! Declaration order is match precedence.

/// City / district level regions. Suffixed and bare forms share one entry.
pub const CITY_KEYWORDS: &[(&str, &[&str])] = &[
    // 경기도
    ("수원", &["수원시", "수원"]),
    ("성남", &["성남시", "성남"]),
    ("고양", &["고양시", "고양"]),
    ("용인", &["용인시", "용인"]),
    ("부천", &["부천시", "부천"]),
    ("안산", &["안산시", "안산"]),
    ("안양", &["안양시", "안양"]),
    ("평택", &["평택시", "평택"]),
    ("의정부", &["의정부시", "의정부"]),
    ("오산", &["오산시", "오산"]),
    ("화성", &["화성시", "화성"]),
    ("시흥", &["시흥시", "시흥"]),
    ("김포", &["김포시", "김포"]),
    ("광명", &["광명시", "광명"]),
    ("하남", &["하남시", "하남"]),
    ("구리", &["구리시", "구리"]),
    ("파주", &["파주시", "파주"]),
    ("이천", &["이천시", "이천"]),
    ("안성", &["안성시", "안성"]),
    ("포천", &["포천시", "포천"]),
    ("양주", &["양주시", "양주"]),
    ("동두천", &["동두천시", "동두천"]),
    ("과천", &["과천시", "과천"]),
    ("가평", &["가평군", "가평"]),
    ("연천", &["연천군", "연천"]),
    ("양평", &["양평군", "양평"]),
    // 서울
    ("강남", &["강남구", "강남"]),
    ("서초", &["서초구", "서초"]),
    ("송파", &["송파구", "송파"]),
    ("구로", &["구로구", "구로"]),
    ("은평", &["은평구", "은평"]),
    ("중구", &["중구"]),
    ("마포", &["마포구", "마포"]),
    // 인천
    ("미추홀", &["미추홀구", "미추홀"]),
    ("서구", &["서구"]),
    // 부산
    ("부산진", &["부산진구", "부산진"]),
    ("북구", &["북구"]),
    // 대구
    ("달서", &["달서구", "달서"]),
    // 강원
    ("강릉", &["강릉시", "강릉"]),
    // 전라
    ("목포", &["목포시", "목포"]),
    ("익산", &["익산시", "익산"]),
    ("남원", &["남원시", "남원"]),
    // 경상
    ("창원", &["창원시", "창원"]),
    ("양산", &["양산시", "양산"]),
];

/// Province level regions, with local names that resolve to their province,
/// and the nationwide / delivery sentinels.
pub const REGION_KEYWORDS: &[(&str, &[&str])] = &[
    ("서울", &["서울", "서울시"]),
    ("경기", &["경기", "경기도"]),
    ("인천", &["인천", "인천시"]),
    ("강원", &["강원", "강원도", "춘천", "원주", "속초"]),
    ("충남", &["충남", "충청남도", "천안", "아산", "당진"]),
    ("충북", &["충북", "충청북도", "청주", "충주"]),
    ("전남", &["전남", "전라남도", "여수", "순천"]),
    ("전북", &["전북", "전라북도", "전주", "군산"]),
    ("경남", &["경남", "경상남도", "부산", "울산", "진주"]),
    ("경북", &["경북", "경상북도", "대구", "포항", "구미"]),
    ("제주", &["제주", "제주도", "서귀포"]),
    ("전국", &["전국", "전국구"]),
    ("배송", &["배송", "택배"]),
    ("홍대", &["홍대", "홍익대"]),
];

pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("맛집", &["맛집", "음식", "식당", "카페", "레스토랑", "브런치"]),
    ("뷰티", &["뷰티", "화장품", "스킨케어", "메이크업", "미용"]),
    ("제품", &["제품", "상품", "굿즈"]),
    ("숙박", &["숙박", "호텔", "펜션", "리조트", "모텔"]),
    ("여행", &["여행", "관광", "투어"]),
    ("문화", &["문화", "전시", "공연", "영화"]),
    ("스포츠", &["스포츠", "운동", "피트니스"]),
];

pub const CHANNEL_KEYWORDS: &[(&str, &[&str])] = &[
    ("블로그", &["블로그", "blog"]),
    ("인스타", &["인스타", "인스타그램", "instagram", "insta"]),
    ("릴스", &["릴스", "reels"]),
    ("유튜브", &["유튜브", "youtube", "yt"]),
    ("쇼츠", &["쇼츠", "shorts"]),
    ("틱톡", &["틱톡", "tiktok"]),
    ("클립", &["클립", "clip"]),
];

/// Keyword → suffixes that cancel a hit. "고양이" is a cat, not 고양시.
pub const EXCLUSION_SUFFIXES: &[(&str, &[&str])] = &[("고양", &["이"])];

/// Canonical codes of province-level regions.
pub const PROVINCE_CODES: &[&str] = &[
    "서울", "경기", "인천", "강원", "충남", "충북", "전남", "전북", "경남", "경북", "제주",
];
