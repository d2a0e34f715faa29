// region:    --- Modules
pub mod client;
pub mod discovery;
pub mod feed;
pub mod handlers;
pub mod listing;
pub mod pagination;
pub mod render;

// endregion: --- Modules

// region:    --- Router
use crate::client::BidftaClient;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 라우터 구성
/// 프론트엔드 연동을 위한 cors와 요청 로깅 레이어 포함
pub fn app(client: Arc<BidftaClient>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/search", get(handlers::handle_search))
        .route("/search/:page_number", get(handlers::handle_search_page))
        .route("/home/:page_number", get(handlers::handle_home))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}
// endregion: --- Router
