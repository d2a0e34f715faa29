/// 아이템 필터링 및 변형
/// 1. 남은 시간이 0보다 큰 아이템만 유지 (조회 시점 스냅샷)
/// 2. 남은 시간을 HH:MM:SS로 포맷
/// 3. 아이템 상세 URL 및 아마존 검색 URL 생성
// region:    --- Imports
use crate::feed::AuctionFeed;
use crate::listing::model::{AuctionRef, RawItem, ShapedItem};
use tracing::info;

// endregion: --- Imports

// region:    --- Shaper

/// 아이템 상세 페이지 기본 주소
const ITEM_DETAIL_BASE_URL: &str = "https://www.bidfta.com";

/// 아마존 검색 기본 주소
const AMAZON_SEARCH_BASE_URL: &str = "https://www.amazon.com/s?k=";

/// 모든 피드를 평탄화하여 활성 아이템만 응답 형태로 변형
pub fn shape_feeds(feeds: Vec<AuctionFeed>) -> Vec<ShapedItem> {
    let mut shaped = Vec::new();
    for feed in feeds {
        for item in &feed.items {
            if let Some(item) = shape_item(item, &feed.auction) {
                shaped.push(item);
            }
        }
    }
    info!("{:<12} --> 활성 아이템 {}건 변형 완료", "Shaper", shaped.len());
    shaped
}

/// 단일 아이템 변형, 비활성 아이템은 None
pub fn shape_item(item: &RawItem, auction: &AuctionRef) -> Option<ShapedItem> {
    if item.item_time_remaining <= 0 {
        return None;
    }

    Some(ShapedItem {
        title: item.title.clone(),
        current_bid: item.current_bid.clone(),
        next_bid: item.next_bid.clone(),
        quantity: item.quantity.clone(),
        condition: item.condition.clone(),
        msrp: item.msrp.clone(),
        brand: item.brand.clone(),
        time_remaining: format_time_remaining(item.item_time_remaining),
        bids_count: item.bids_count.clone(),
        pictures: item.pictures.clone(),
        item_url: item_url(&auction.id, item.id),
        location: auction.location.clone(),
        amazon_search_url: search_url(&item.title),
        category1: item.category1.clone(),
        category2: item.category2.clone(),
    })
}

/// 남은 시간을 HH:MM:SS로 포맷 (시간 필드는 24를 넘을 수 있음)
pub fn format_time_remaining(seconds: i64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// 아이템 상세 URL 생성
pub fn item_url(auction_id: &str, item_id: i64) -> String {
    format!(
        "{}/{}/item-detail/{}",
        ITEM_DETAIL_BASE_URL, auction_id, item_id
    )
}

/// 아이템 제목으로 아마존 검색 URL 생성
pub fn search_url(title: &str) -> String {
    format!("{}{}", AMAZON_SEARCH_BASE_URL, urlencoding::encode(title))
}

// endregion: --- Shaper

// region:    --- Tests


// endregion: --- Tests
