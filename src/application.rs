// アプリケーション層モジュール
pub mod api_types;
pub mod card_service;
pub mod error;
pub mod request_metrics;
pub mod router;

// 再エクスポート
pub use api_types::{ApiRequest, ApiResponse};
pub use card_service::CardService;
pub use error::CardApiError;
pub use request_metrics::{RequestMetrics, RequestSummary};
pub use router::{CardRouter, RequestHandler};
