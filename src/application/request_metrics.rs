/// リクエストメトリクスミドルウェア
///
/// 任意のRequestHandlerを包み、処理時間を計測してリクエストごとに
/// `request_summary`イベントを1件出力する。
/// 出力はDropで行うため、内側のハンドラーが途中で中断されても必ず記録される。
use std::time::Instant;

use async_trait::async_trait;
use tracing::info;

use super::api_types::{ApiRequest, ApiResponse};
use super::router::RequestHandler;

/// 完了前に中断された場合に記録するステータスコード
const INTERRUPTED_STATUS: u16 = 500;

/// 1リクエスト分のサマリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    pub service: String,
    pub request_id: Option<String>,
    pub method: String,
    pub path: String,
    pub status_code: u16,
    pub latency_ms: u64,
}

impl RequestSummary {
    /// リクエストからサマリーを作成（ステータスは未確定）
    pub fn from_request(service: &str, request: &ApiRequest) -> Self {
        Self {
            service: service.to_string(),
            request_id: request.request_id.clone(),
            method: request.method.clone(),
            path: request.path.clone(),
            status_code: INTERRUPTED_STATUS,
            latency_ms: 0,
        }
    }

    /// 構造化ログとして出力
    pub fn emit(&self) {
        info!(
            service = %self.service,
            event = "request_summary",
            requestId = self.request_id.as_deref(),
            method = %self.method,
            path = %self.path,
            statusCode = self.status_code,
            latencyMs = self.latency_ms,
            "request_summary"
        );
    }
}

/// スコープ終了時にサマリーを出力するガード
struct SummaryGuard {
    summary: RequestSummary,
    started_at: Instant,
}

impl Drop for SummaryGuard {
    fn drop(&mut self) {
        self.summary.latency_ms = self.started_at.elapsed().as_millis() as u64;
        self.summary.emit();
    }
}

/// 内側のハンドラーにメトリクス記録を追加するミドルウェア
pub struct RequestMetrics<H>
where
    H: RequestHandler,
{
    /// ログのserviceフィールド
    service: String,
    /// 内側のハンドラー
    inner: H,
}

impl<H> RequestMetrics<H>
where
    H: RequestHandler,
{
    /// ハンドラーを包む
    pub fn new(service: impl Into<String>, inner: H) -> Self {
        Self {
            service: service.into(),
            inner,
        }
    }
}

#[async_trait]
impl<H> RequestHandler for RequestMetrics<H>
where
    H: RequestHandler,
{
    async fn handle(&self, request: ApiRequest) -> ApiResponse {
        let mut guard = SummaryGuard {
            summary: RequestSummary::from_request(&self.service, &request),
            started_at: Instant::now(),
        };

        let response = self.inner.handle(request).await;
        guard.summary.status_code = response.status;

        response
    }
}
