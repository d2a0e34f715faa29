// region:    --- Imports
use serde::Serialize;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Paginator

/// 페이지당 아이템 수
pub const PAGE_SIZE: usize = 50;

/// 페이지 계산 결과 (응답 본문으로 그대로 직렬화)
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub page_number: usize,
    pub first_item: usize,
    pub last_item: usize,
}

/// 페이지 번호 오류
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("페이지 번호 {requested}는 유효 범위 1..={total_pages}를 벗어났습니다")]
    OutOfRange {
        requested: usize,
        total_pages: usize,
    },
}

/// 1 기반 페이지 번호로 고정 크기 페이지를 계산
/// 빈 목록은 빈 페이지 한 장으로 취급한다 (total_pages == 1).
pub fn paginate<T>(items: Vec<T>, page_number: usize) -> Result<Page<T>, PageError> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE).max(1);

    if page_number < 1 || page_number > total_pages {
        return Err(PageError::OutOfRange {
            requested: page_number,
            total_pages,
        });
    }

    let start = (page_number - 1) * PAGE_SIZE;
    let end = (page_number * PAGE_SIZE).min(total_items);
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect();

    Ok(Page {
        items,
        total_items,
        total_pages,
        page_number,
        first_item: start + 1,
        last_item: end,
    })
}

/// 페이지네이션 생략 모드: 요청 페이지 번호와 무관하게 전체를 한 페이지로 반환
pub fn single_page<T>(items: Vec<T>) -> Page<T> {
    let total_items = items.len();
    Page {
        items,
        total_items,
        total_pages: 1,
        page_number: 1,
        first_item: 1,
        last_item: total_items,
    }
}

// endregion: --- Paginator

// region:    --- Tests


// endregion: --- Tests
