// region:    --- Imports
use crate::client::BidftaClient;
use crate::listing;
use crate::pagination;
use crate::render;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

// endregion: --- Imports

// region:    --- Query Params

/// JSON API 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct HomeParams {
    pub zip: String,
    #[serde(default)]
    pub skip_pagination: bool,
}

/// HTML 검색 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "zipCode", default = "default_zip")]
    pub zip_code: String,
}

// 초기 프로토타입의 고정 ZIP
fn default_zip() -> String {
    "45036".to_string()
}

// endregion: --- Query Params

// region:    --- API Handlers

/// 활성 아이템 페이지 조회 (JSON)
pub async fn handle_home(
    State(client): State<Arc<BidftaClient>>,
    Path(page_number): Path<usize>,
    Query(params): Query<HomeParams>,
) -> impl IntoResponse {
    info!(
        "{:<12} --> 아이템 조회 zip: {}, page: {}, skip_pagination: {}",
        "HandlerApi", params.zip, page_number, params.skip_pagination
    );

    let items = match listing::collect_active_items(client.as_ref(), &params.zip).await {
        Ok(items) => items,
        Err(e) => {
            error!("{:<12} --> 수집 실패: {}", "HandlerApi", e);
            return (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": format!("Failed to fetch auction data: {}", e)
                })),
            )
                .into_response();
        }
    };

    if params.skip_pagination {
        info!(
            "{:<12} --> 페이지네이션 생략, 전체 {}건 반환",
            "HandlerApi",
            items.len()
        );
        return Json(pagination::single_page(items)).into_response();
    }

    match pagination::paginate(items, page_number) {
        Ok(page) => Json(page).into_response(),
        Err(e) => {
            warn!("{:<12} --> 잘못된 페이지 요청: {}", "HandlerApi", e);
            (
                axum::http::StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": e.to_string(),
                    "code": "PAGE_OUT_OF_RANGE"
                })),
            )
                .into_response()
        }
    }
}

// endregion: --- API Handlers

// region:    --- HTML Handlers

/// 검색 폼 랜딩 페이지
pub async fn handle_index() -> impl IntoResponse {
    Html(render::index_page())
}

/// 검색 결과 1페이지 (HTML)
pub async fn handle_search(
    State(client): State<Arc<BidftaClient>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    render_search_page(&client, 1, &params.zip_code).await
}

/// 검색 결과 N페이지 (HTML)
pub async fn handle_search_page(
    State(client): State<Arc<BidftaClient>>,
    Path(page_number): Path<usize>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    render_search_page(&client, page_number, &params.zip_code).await
}

/// HTML 검색 응답 조립
async fn render_search_page(
    client: &BidftaClient,
    page_number: usize,
    zip_code: &str,
) -> axum::response::Response {
    info!(
        "{:<12} --> 검색 페이지 렌더링 zip: {}, page: {}",
        "HandlerHtml", zip_code, page_number
    );

    let items = match listing::collect_active_items(client, zip_code).await {
        Ok(items) => items,
        Err(e) => {
            error!("{:<12} --> 수집 실패: {}", "HandlerHtml", e);
            return (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Html(render::error_page(&format!(
                    "Failed to fetch auction data: {}",
                    e
                ))),
            )
                .into_response();
        }
    };

    match pagination::paginate(items, page_number) {
        Ok(page) => Html(render::listing_page(&page, zip_code, Utc::now())).into_response(),
        Err(e) => {
            warn!("{:<12} --> 잘못된 페이지 요청: {}", "HandlerHtml", e);
            (
                axum::http::StatusCode::BAD_REQUEST,
                Html(render::error_page(&e.to_string())),
            )
                .into_response()
        }
    }
}

// endregion: --- HTML Handlers
