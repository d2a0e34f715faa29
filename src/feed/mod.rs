/// 경매별 아이템 피드 동시 조회
/// 개별 경매의 실패는 해당 경매만 빈 피드로 강등되고 요청 전체는 계속된다.
// region:    --- Imports
use crate::client::PageSource;
use crate::listing::model::{AuctionRef, RawItem};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Feed Fetcher

/// 동시 피드 요청 상한
pub const MAX_CONCURRENT_FEEDS: usize = 8;

/// 한 경매의 피드 조회 결과
#[derive(Debug)]
pub struct AuctionFeed {
    pub auction: AuctionRef,
    pub items: Vec<RawItem>,
}

/// 모든 경매의 피드를 동시에 조회
/// 전체 완료를 기다리며, 한 경매의 실패가 다른 경매를 취소하지 않는다.
pub async fn fetch_all_feeds<S: PageSource>(
    source: &S,
    auctions: Vec<AuctionRef>,
) -> Vec<AuctionFeed> {
    let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_FEEDS));

    let tasks = auctions.into_iter().map(|auction| {
        let semaphore = Arc::clone(&semaphore);
        async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    return AuctionFeed {
                        auction,
                        items: Vec::new(),
                    }
                }
            };

            let body = match source.fetch_item_feed(&auction.id).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(
                        "{:<12} --> 경매 {} 피드 조회 실패: {}",
                        "FeedFetch", auction.id, e
                    );
                    return AuctionFeed {
                        auction,
                        items: Vec::new(),
                    };
                }
            };

            let items = match parse_item_feed(&body) {
                Ok(items) => items,
                Err(e) => {
                    warn!(
                        "{:<12} --> 경매 {} JSON 디코딩 실패: {}",
                        "FeedFetch", auction.id, e
                    );
                    Vec::new()
                }
            };

            AuctionFeed { auction, items }
        }
    });

    let feeds = join_all(tasks).await;
    info!(
        "{:<12} --> 피드 {}건 조회 완료, 아이템 {}건",
        "FeedFetch",
        feeds.len(),
        feeds.iter().map(|f| f.items.len()).sum::<usize>()
    );
    feeds
}

/// 피드 본문(JSON 배열) 파싱
pub fn parse_item_feed(body: &str) -> Result<Vec<RawItem>, serde_json::Error> {
    serde_json::from_str(body)
}

// endregion: --- Feed Fetcher

// region:    --- Tests


// endregion: --- Tests
