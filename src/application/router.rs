// リクエストルーター
//
// HTTPメソッドとパスの文字列比較だけで5つのハンドラーのいずれかに振り分ける。
// 評価順は hello → 一覧 → ID指定取得 → top3 → シード。
// どれにも一致しなければ404、ハンドラーの失敗はエラー種別に応じたレスポンスに変換する。

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::error;

use crate::domain::{CardRecord, decode_path_identifier};
use crate::infrastructure::CardRepository;

use super::api_types::{ApiRequest, ApiResponse};
use super::card_service::{CardService, PLAYER_PARAM};
use super::error::CardApiError;

/// ID指定取得で使うパスパラメータ名
pub const CARD_ID_PARAM: &str = "cardId";

/// リクエストを処理してレスポンスを返すハンドラー
///
/// ルーターとミドルウェアが同じトレイトを実装し、合成できるようにする。
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(&self, request: ApiRequest) -> ApiResponse;
}

/// カードAPIのルーター
pub struct CardRouter<R>
where
    R: CardRepository,
{
    service: CardService<R>,
}

impl<R> CardRouter<R>
where
    R: CardRepository,
{
    /// 新しいCardRouterを作成
    pub fn new(service: CardService<R>) -> Self {
        Self { service }
    }

    /// ルートを判定してハンドラーを実行
    ///
    /// # 戻り値
    /// * `Ok(ApiResponse)` - 成功レスポンス、またはどのルートにも一致しない場合の404
    /// * `Err(CardApiError)` - ハンドラーの失敗
    pub async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse, CardApiError> {
        let method = request.method.as_str();
        let path = request.path.as_str();

        if method == "GET" && path == "/hello" {
            return Ok(Self::hello());
        }

        if method == "GET" && path == "/cards" {
            let records = self.service.list_all().await?;
            return Ok(ApiResponse::ok(records_to_json(records)));
        }

        if method == "GET"
            && path.starts_with("/cards/")
            && let Some(encoded) = request.path_parameter(CARD_ID_PARAM)
        {
            let card_id = decode_path_identifier(encoded);
            let record = self.service.get_by_id(&card_id).await?;
            return Ok(ApiResponse::ok(Value::Object(record)));
        }

        if method == "GET" && path == "/cards/top3" {
            let records = self
                .service
                .top3(request.query_parameter(PLAYER_PARAM))
                .await?;
            return Ok(ApiResponse::ok(records_to_json(records)));
        }

        // JWT認可はAPI Gatewayのルート設定で強制される
        if method == "POST" && path == "/cards/seed" {
            let count = self.service.seed().await?;
            return Ok(ApiResponse::ok(
                json!({ "message": "Seed complete", "count": count }),
            ));
        }

        Ok(ApiResponse::not_found())
    }

    fn hello() -> ApiResponse {
        ApiResponse::ok(json!({ "message": "hello world" }))
    }
}

#[async_trait]
impl<R> RequestHandler for CardRouter<R>
where
    R: CardRepository,
{
    async fn handle(&self, request: ApiRequest) -> ApiResponse {
        match self.dispatch(&request).await {
            Ok(response) => response,
            Err(err) => {
                if let CardApiError::Unhandled(detail) = &err {
                    error!(
                        method = %request.method,
                        path = %request.path,
                        error = %detail,
                        "リクエスト処理で予期しないエラー"
                    );
                }
                err.to_response()
            }
        }
    }
}

fn records_to_json(records: Vec<CardRecord>) -> Value {
    Value::Array(records.into_iter().map(Value::Object).collect())
}
