// region:    --- Imports
use crate::client::{PageSource, ScrapeError};
use crate::discovery;
use crate::feed;
use crate::listing::model::ShapedItem;
use tracing::info;

// endregion: --- Imports

// region:    --- Modules
pub mod model;
pub mod shaper;

// endregion: --- Modules

// region:    --- Collect

/// 요청 단위 수집 파이프라인
/// 위치 페이지 조회 -> 경매 발견 -> 피드 동시 조회 -> 활성 아이템 변형
pub async fn collect_active_items<S: PageSource>(
    source: &S,
    zip_code: &str,
) -> Result<Vec<ShapedItem>, ScrapeError> {
    let html = source.fetch_location_page(zip_code).await?;
    let auctions = discovery::parse_auction_list(&html)?;
    info!(
        "{:<12} --> ZIP {} 기준 경매 {}건 발견",
        "Collect",
        zip_code,
        auctions.len()
    );

    let feeds = feed::fetch_all_feeds(source, auctions).await;
    Ok(shaper::shape_feeds(feeds))
}

// endregion: --- Collect
