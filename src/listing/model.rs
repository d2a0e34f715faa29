use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// 발견된 경매 참조
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionRef {
    pub id: String,
    pub location: String,
}

// 업스트림 피드의 원본 아이템
// id와 title 외의 필드는 소스가 아무것도 보장하지 않으므로 그대로 통과시킨다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub current_bid: Value,
    #[serde(default)]
    pub next_bid: Value,
    #[serde(default)]
    pub quantity: Value,
    #[serde(default)]
    pub condition: Value,
    #[serde(default)]
    pub msrp: Value,
    #[serde(default)]
    pub brand: Value,
    #[serde(default)]
    pub bids_count: Value,
    #[serde(default)]
    pub pictures: Value,
    #[serde(default, deserialize_with = "de_seconds")]
    pub item_time_remaining: i64,
    #[serde(default)]
    pub category1: Value,
    #[serde(default)]
    pub category2: Value,
}

/// 남은 시간(초) 역직렬화
/// 업스트림은 숫자 또는 숫자 문자열을 보내며, 해석 불가 값은 0(비활성)으로 취급
fn de_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let seconds = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };
    Ok(seconds)
}

// 응답용 아이템 (프론트엔드가 소비하는 snake_case 키)
#[derive(Debug, Clone, Serialize)]
pub struct ShapedItem {
    pub title: String,
    pub current_bid: Value,
    pub next_bid: Value,
    pub quantity: Value,
    pub condition: Value,
    pub msrp: Value,
    pub brand: Value,
    pub time_remaining: String,
    pub bids_count: Value,
    pub pictures: Value,
    pub item_url: String,
    pub location: String,
    pub amazon_search_url: String,
    pub category1: Value,
    pub category2: Value,
}

// region:    --- Tests


// endregion: --- Tests
