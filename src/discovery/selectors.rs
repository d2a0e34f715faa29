/// 경매 컨테이너 선택자
pub const AUCTION_CONTAINER: &str = "div.w-full.mx-auto";

/// 경매 위치 라벨 선택자
pub const AUCTION_LOCATION: &str = "div.flex.items-center.mb-1";

/// 경매 상세 링크 선택자
pub const AUCTION_LINK: &str = "a[href]";
