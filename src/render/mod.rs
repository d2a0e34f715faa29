/// 서버 렌더링 HTML 어댑터
/// JSON API와 동일한 Page 구조를 소비하며 마크업 조립만 담당한다.
// region:    --- Imports
use crate::listing::model::ShapedItem;
use crate::pagination::Page;
use chrono::{DateTime, Utc};
use serde_json::Value;

// endregion: --- Imports

// region:    --- Pages

/// 검색 폼 랜딩 페이지
pub fn index_page() -> String {
    format!(
        "{}<h1>Auction Items Near You</h1>\
         <form action=\"/search\" method=\"get\">\
           <label for=\"zipCode\">ZIP code</label>\
           <input id=\"zipCode\" name=\"zipCode\" value=\"45036\" maxlength=\"10\">\
           <button type=\"submit\">Search</button>\
         </form>{}",
        PAGE_HEAD, PAGE_FOOT
    )
}

/// 아이템 목록 페이지
pub fn listing_page(page: &Page<ShapedItem>, zip_code: &str, fetched_at: DateTime<Utc>) -> String {
    let mut html = String::new();
    html.push_str(PAGE_HEAD);
    html.push_str(&format!(
        "<h1>Active Items near {}</h1>",
        escape_html(zip_code)
    ));

    html.push_str(
        "<table><thead><tr>\
           <th>Item</th><th>Location</th><th>Current Bid</th><th>Next Bid</th>\
           <th>MSRP</th><th>Bids</th><th>Condition</th><th>Time Left</th><th></th>\
         </tr></thead><tbody>",
    );
    for item in &page.items {
        html.push_str(&format!(
            "<tr>\
               <td><a href=\"{}\">{}</a></td>\
               <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
               <td><a href=\"{}\">Amazon</a></td>\
             </tr>",
            escape_html(&item.item_url),
            escape_html(&item.title),
            escape_html(&item.location),
            escape_html(&value_text(&item.current_bid)),
            escape_html(&value_text(&item.next_bid)),
            escape_html(&value_text(&item.msrp)),
            escape_html(&value_text(&item.bids_count)),
            escape_html(&value_text(&item.condition)),
            escape_html(&item.time_remaining),
            escape_html(&item.amazon_search_url),
        ));
    }
    html.push_str("</tbody></table>");

    html.push_str(&pagination_controls(page, zip_code));
    html.push_str(&format!(
        "<footer>Items {}&ndash;{} of {} &middot; fetched at {} UTC</footer>",
        page.first_item,
        page.last_item,
        page.total_items,
        fetched_at.format("%H:%M:%S")
    ));
    html.push_str(PAGE_FOOT);
    html
}

/// 오류 페이지
pub fn error_page(message: &str) -> String {
    format!(
        "{}<h1>Something went wrong</h1><p>{}</p><p><a href=\"/\">Back to search</a></p>{}",
        PAGE_HEAD,
        escape_html(message),
        PAGE_FOOT
    )
}

// endregion: --- Pages

// region:    --- Helpers

const PAGE_HEAD: &str = "<!DOCTYPE html><html lang=\"en\"><head>\
    <meta charset=\"utf-8\"><title>Auction Scraper</title></head><body>";

const PAGE_FOOT: &str = "</body></html>";

/// 이전/다음 페이지 링크
fn pagination_controls(page: &Page<ShapedItem>, zip_code: &str) -> String {
    let mut nav = String::from("<nav>");
    if page.page_number > 1 {
        nav.push_str(&format!(
            "<a href=\"/search/{}?zipCode={}\">&laquo; Prev</a> ",
            page.page_number - 1,
            urlencoding::encode(zip_code)
        ));
    }
    nav.push_str(&format!(
        "Page {} of {}",
        page.page_number, page.total_pages
    ));
    if page.page_number < page.total_pages {
        nav.push_str(&format!(
            " <a href=\"/search/{}?zipCode={}\">Next &raquo;</a>",
            page.page_number + 1,
            urlencoding::encode(zip_code)
        ));
    }
    nav.push_str("</nav>");
    nav
}

/// 통과 필드를 표시용 텍스트로 변환
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// HTML 특수 문자 이스케이프
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// endregion: --- Helpers

// region:    --- Tests


// endregion: --- Tests
