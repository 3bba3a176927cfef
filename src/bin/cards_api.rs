/// カードカタログAPI HTTP Lambdaエントリポイント
///
/// API Gateway HTTP API経由のリクエストを処理し、
/// DynamoDBのカードテーブルに対する一覧・取得・top3・シードを提供する。
use cards_api::application::{
    ApiRequest, CardRouter, CardService, RequestHandler, RequestMetrics,
};
use cards_api::infrastructure::{
    CardsApiSettings, DynamoCardRepository, DynamoDbConfig, init_logging,
};
use lambda_http::{Body, Error, Request, Response, run, service_fn};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // 環境変数から設定を読み込み
    let settings = CardsApiSettings::from_env()?;

    // DynamoDBクライアントは実行環境ごとに一度だけ作成する
    let config = DynamoDbConfig::load(settings.table_name.clone()).await;
    let repository =
        DynamoCardRepository::new(config.client().clone(), config.table_name().to_string());

    let handler = RequestMetrics::new(
        settings.service_name.clone(),
        CardRouter::new(CardService::new(repository)),
    );

    info!(
        table_name = %settings.table_name,
        service = %settings.service_name,
        "カードAPI Lambda関数を初期化"
    );

    let handler = &handler;
    run(service_fn(move |request: Request| async move {
        handle_request(handler, request).await
    }))
    .await
}

/// Lambda HTTPリクエストをルーターに渡し、レスポンスに変換する
async fn handle_request<H>(handler: &H, request: Request) -> Result<Response<Body>, Error>
where
    H: RequestHandler,
{
    let api_request = ApiRequest::from_lambda(&request);
    let response = handler.handle(api_request).await;
    Ok(response.into_lambda_response()?)
}
