use auction_scraper::app;
use auction_scraper::client::BidftaClient;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

/// 트레이싱 초기화
fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("트레이싱 구독자 설정 실패");
}

/// 가짜 위치 목록 페이지
/// 경매 101, 202, 303 세 건을 노출한다
async fn location_page() -> Html<String> {
    let mut body = String::from("<html><body>");
    for (id, location) in [
        (101, "Lebanon, OH"),
        (202, "Cincinnati, OH"),
        (303, "Florence, KY"),
    ] {
        body.push_str(&format!(
            r#"<div class="w-full mx-auto">
                 <div class="flex items-center mb-1"> {} </div>
                 <a href="/auction-detail/{}">view auction</a>
               </div>"#,
            location, id
        ));
    }
    body.push_str("</body></html>");
    Html(body)
}

/// 가짜 아이템 피드
/// 경매 202는 항상 500으로 실패한다
async fn item_feed(Path(auction_id): Path<String>) -> axum::response::Response {
    match auction_id.as_str() {
        "101" => Json(json!([
            {
                "id": 11,
                "title": "Leather Sofa",
                "currentBid": 5,
                "nextBid": 6,
                "msrp": "199.99",
                "bidsCount": 3,
                "condition": "New",
                "itemTimeRemaining": 3661,
                "category1": "Furniture"
            },
            {"id": 12, "title": "Cordless Drill", "currentBid": "2.00", "itemTimeRemaining": "59"},
            {"id": 13, "title": "Expired Lamp", "itemTimeRemaining": 0},
        ]))
        .into_response(),
        "202" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "303" => {
            let items: Vec<Value> = (0..60)
                .map(|i| {
                    json!({
                        "id": 1000 + i,
                        "title": format!("Bulk Item {}", i),
                        "itemTimeRemaining": 7200
                    })
                })
                .collect();
            Json(Value::Array(items)).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// 가짜 업스트림 서버 기동
async fn spawn_upstream(routes: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, routes.into_make_service())
            .await
            .unwrap();
    });
    format!("http://{}", addr)
}

/// 가짜 업스트림을 바라보는 앱 서버 기동
async fn spawn_app() -> String {
    let upstream = spawn_upstream(
        Router::new()
            .route("/location-zip", get(location_page))
            .route("/api/item/getItemsByAuctionId/:auction_id", get(item_feed)),
    )
    .await;

    let client = Arc::new(BidftaClient::with_base_urls(&upstream, &upstream).unwrap());
    spawn_upstream(app(client)).await
}

/// 병합 결과 1페이지 조회 및 부분 실패 허용 테스트
/// 경매 202의 500 응답에도 나머지 두 경매의 아이템은 유지되어야 한다
#[tokio::test]
async fn test_home_first_page_with_partial_failure() {
    init_tracing();
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/home/1?zip=45036", base))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total_items"], 62);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["page_number"], 1);
    assert_eq!(body["first_item"], 1);
    assert_eq!(body["last_item"], 50);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 50);

    // 실패한 경매(202)의 위치는 어디에도 나타나지 않는다
    assert!(items
        .iter()
        .all(|item| item["location"] != "Cincinnati, OH"));

    // 남은 시간이 0인 아이템은 제외된다
    assert!(items.iter().all(|item| item["title"] != "Expired Lamp"));

    // 변형 필드 확인
    let sofa = &items[0];
    assert_eq!(sofa["title"], "Leather Sofa");
    assert_eq!(sofa["time_remaining"], "01:01:01");
    assert_eq!(sofa["item_url"], "https://www.bidfta.com/101/item-detail/11");
    assert_eq!(sofa["location"], "Lebanon, OH");
    assert_eq!(
        sofa["amazon_search_url"],
        "https://www.amazon.com/s?k=Leather%20Sofa"
    );
    assert_eq!(sofa["current_bid"], 5);

    // 숫자 문자열로 온 남은 시간도 초 단위로 해석된다
    let drill = &items[1];
    assert_eq!(drill["title"], "Cordless Drill");
    assert_eq!(drill["time_remaining"], "00:00:59");
}

/// 마지막 페이지 조회 테스트
#[tokio::test]
async fn test_home_last_page() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/home/2?zip=45036", base))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["page_number"], 2);
    assert_eq!(body["first_item"], 51);
    assert_eq!(body["last_item"], 62);
    assert_eq!(body["items"].as_array().unwrap().len(), 12);
}

/// 페이지네이션 생략 모드 테스트
/// 요청 페이지 번호와 무관하게 전체가 한 페이지로 반환된다
#[tokio::test]
async fn test_home_skip_pagination() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/home/9?zip=45036&skip_pagination=true", base))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["page_number"], 1);
    assert_eq!(body["total_items"], 62);
    assert_eq!(body["items"].as_array().unwrap().len(), 62);
}

/// 범위를 벗어난 페이지 요청 테스트
/// 크래시 대신 명시적 클라이언트 오류를 반환해야 한다
#[tokio::test]
async fn test_home_page_out_of_range() {
    let base = spawn_app().await;
    let client = Client::new();

    for page in [0, 3] {
        let response = client
            .get(format!("{}/home/{}?zip=45036", base, page))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["code"], "PAGE_OUT_OF_RANGE");
        assert!(body["error"].as_str().unwrap().contains(&page.to_string()));
    }
}

/// 위치 페이지 실패 시 요청 전체가 500으로 실패한다
#[tokio::test]
async fn test_location_page_failure_is_fatal() {
    let upstream = spawn_upstream(Router::new().route(
        "/location-zip",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE.into_response() }),
    ))
    .await;
    let client_state = Arc::new(BidftaClient::with_base_urls(&upstream, &upstream).unwrap());
    let base = spawn_upstream(app(client_state)).await;

    let response = Client::new()
        .get(format!("{}/home/1?zip=45036", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch auction data"));
}

/// HTML 검색 페이지 테스트
#[tokio::test]
async fn test_html_search_page() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/search?zipCode=45036", base))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let html = response.text().await.unwrap();
    assert!(html.contains("Leather Sofa"));
    assert!(html.contains("Page 1 of 2"));
    assert!(html.contains("/search/2?zipCode=45036"));

    // 범위를 벗어난 페이지는 오류 페이지와 400
    let response = client
        .get(format!("{}/search/9?zipCode=45036", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.text().await.unwrap().contains("Something went wrong"));
}

/// 랜딩 페이지는 검색 폼을 노출한다
#[tokio::test]
async fn test_index_page() {
    let base = spawn_app().await;

    let response = Client::new()
        .get(format!("{}/", base))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let html = response.text().await.unwrap();
    assert!(html.contains("form action=\"/search\""));
    assert!(html.contains("zipCode"));
}
