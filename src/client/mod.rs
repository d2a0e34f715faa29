// region:    --- Imports
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

// endregion: --- Imports

// region:    --- Constants

/// 운영 리스팅 사이트 기본 주소
pub const LISTING_BASE_URL: &str = "https://www.bidfta.com";

/// 운영 아이템 피드 API 기본 주소
pub const FEED_BASE_URL: &str = "https://auction.bidfta.io";

/// 위치 검색 반경 (마일)
pub const SEARCH_RADIUS_MILES: u32 = 25;

/// 원격 요청 타임아웃
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

// 봇 차단 회피용 브라우저 User-Agent
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// endregion: --- Constants

// region:    --- Error

/// 스크레이핑 오류
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP 요청 실패: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} 응답 상태 코드 오류: {status}")]
    BadStatus { url: String, status: StatusCode },

    #[error("경매 목록 파싱 실패: {0}")]
    ParseAuctionList(String),
}

// endregion: --- Error

// region:    --- Page Source Trait

/// 외부 사이트 접근 트레이트
/// 파이프라인은 이 좁은 인터페이스만 의존한다.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// ZIP 코드 기준 위치 목록 페이지(HTML) 조회
    async fn fetch_location_page(&self, zip_code: &str) -> Result<String, ScrapeError>;

    /// 경매별 아이템 피드(JSON 본문) 조회
    async fn fetch_item_feed(&self, auction_id: &str) -> Result<String, ScrapeError>;
}

// endregion: --- Page Source Trait

// region:    --- Bidfta Client

/// 외부 사이트 접근 구현체
pub struct BidftaClient {
    client: reqwest::Client,
    listing_base_url: String,
    feed_base_url: String,
}

impl BidftaClient {
    /// 운영 주소로 클라이언트 생성
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_base_urls(LISTING_BASE_URL, FEED_BASE_URL)
    }

    /// 기본 주소를 지정하여 클라이언트 생성 (테스트용 오버라이드 포함)
    pub fn with_base_urls(
        listing_base_url: &str,
        feed_base_url: &str,
    ) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            listing_base_url: listing_base_url.trim_end_matches('/').to_string(),
            feed_base_url: feed_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET 요청 후 본문 텍스트 반환, 비정상 상태 코드는 오류 처리
    async fn get_text(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("{:<12} --> GET {}", "Client", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("{:<12} --> {} 요청 실패: {}", "Client", url, status);
            return Err(ScrapeError::BadStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl PageSource for BidftaClient {
    async fn fetch_location_page(&self, zip_code: &str) -> Result<String, ScrapeError> {
        let url = format!(
            "{}/location-zip?miles={}&zipCode={}",
            self.listing_base_url, SEARCH_RADIUS_MILES, zip_code
        );
        self.get_text(&url).await
    }

    async fn fetch_item_feed(&self, auction_id: &str) -> Result<String, ScrapeError> {
        let url = format!(
            "{}/api/item/getItemsByAuctionId/{}?&pageId=1&auctionId={}",
            self.feed_base_url, auction_id, auction_id
        );
        self.get_text(&url).await
    }
}

// endregion: --- Bidfta Client
