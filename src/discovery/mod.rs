/// 위치 목록 페이지에서 경매 발견
/// 외부 사이트 마크업과의 결합은 selectors의 상수와 이 파일 안으로 한정한다.
// region:    --- Imports
use crate::client::ScrapeError;
use crate::listing::model::AuctionRef;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::warn;

// endregion: --- Imports

// region:    --- Modules
pub mod selectors;

// endregion: --- Modules

// region:    --- Parser

/// 위치 페이지 HTML에서 경매 목록 추출
/// 형식이 깨진 컨테이너는 경고 후 건너뛰고 나머지는 계속 처리한다.
pub fn parse_auction_list(html: &str) -> Result<Vec<AuctionRef>, ScrapeError> {
    let container = parse_selector(selectors::AUCTION_CONTAINER)?;
    let location = parse_selector(selectors::AUCTION_LOCATION)?;
    let link = parse_selector(selectors::AUCTION_LINK)?;
    let digits = Regex::new(r"\d+").map_err(|e| ScrapeError::ParseAuctionList(e.to_string()))?;

    let document = Html::parse_document(html);
    let mut auctions = Vec::new();

    for element in document.select(&container) {
        let location_text = match element.select(&location).next() {
            Some(el) => el.text().collect::<String>().trim().to_string(),
            None => {
                warn!("{:<12} --> 위치 라벨 없는 컨테이너 건너뜀", "Discovery");
                continue;
            }
        };

        let href = match element
            .select(&link)
            .next()
            .and_then(|el| el.value().attr("href"))
        {
            Some(href) => href,
            None => {
                warn!(
                    "{:<12} --> 링크 없는 컨테이너 건너뜀: {}",
                    "Discovery", location_text
                );
                continue;
            }
        };

        let id = match digits.find(href) {
            Some(m) => m.as_str().to_string(),
            None => {
                warn!(
                    "{:<12} --> 경매 번호 없는 링크 건너뜀: {}",
                    "Discovery", href
                );
                continue;
            }
        };

        auctions.push(AuctionRef {
            id,
            location: location_text,
        });
    }

    Ok(auctions)
}

/// 선택자 컴파일
fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::ParseAuctionList(e.to_string()))
}

// endregion: --- Parser

// region:    --- Tests


// endregion: --- Tests
