/// 環境変数からの設定読み込みとDynamoDB接続設定
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// カードテーブル名を指定する環境変数
pub const CARDS_TABLE_ENV: &str = "CARDS_TABLE";

/// ログに出力するサービス名を指定する環境変数
pub const SERVICE_NAME_ENV: &str = "POWERTOOLS_SERVICE_NAME";

/// サービス名のデフォルト値
pub const DEFAULT_SERVICE_NAME: &str = "cards-api";

/// 設定のエラー型
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Lambda関数の設定値
///
/// 環境変数:
/// - CARDS_TABLE: カードテーブル名（必須）
/// - POWERTOOLS_SERVICE_NAME: ログのserviceフィールド（省略時は`cards-api`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardsApiSettings {
    /// カードテーブル名
    pub table_name: String,
    /// サービス名
    pub service_name: String,
}

impl CardsApiSettings {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        let table_name = std::env::var(CARDS_TABLE_ENV)
            .ok()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(CARDS_TABLE_ENV.to_string()))?;

        let service_name = std::env::var(SERVICE_NAME_ENV)
            .ok()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        Ok(Self {
            table_name,
            service_name,
        })
    }
}

/// DynamoDBクライアントとテーブル名を持つ設定
///
/// クライアントは実行環境ごとに一度だけ作成し、ハンドラーへ明示的に渡す。
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// カードテーブル名
    table_name: String,
}

impl DynamoDbConfig {
    /// 環境からAWS設定を読み込み、DynamoDBクライアントを作成
    ///
    /// AWS認証情報・リージョンはaws-configのデフォルトチェーンで解決する。
    pub async fn load(table_name: String) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        Self { client, table_name }
    }

    /// 明示的な値で新しいDynamoDbConfigを作成（テスト用）
    #[cfg(test)]
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// カードテーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}
