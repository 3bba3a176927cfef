/// DynamoDBのカードテーブルにアクセスするためのカードリポジトリ
///
/// テーブルはPK（パーティションキー）とSK（ソートキー）の複合キーを持つ。
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{Card, CardKey, CardRecord};

use super::attribute_conversion::{item_to_record, items_to_records};
use super::pagination::{Item, Page, collect_pages};

/// パーティションキーの属性名
pub const PARTITION_KEY_ATTR: &str = "PK";

/// ソートキーの属性名
pub const SORT_KEY_ATTR: &str = "SK";

/// BatchWriteItemの1回あたりの最大件数
const BATCH_WRITE_LIMIT: usize = 25;

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),

    /// DynamoDBからの読み取りに失敗
    #[error("Read error: {0}")]
    ReadError(String),

    /// データのシリアライズ/デシリアライズに失敗
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// カードテーブル操作用トレイト
///
/// このトレイトはストアへのアクセスを抽象化し、
/// 異なる実装を可能にします（実際のDynamoDB、テスト用モック）。
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// テーブルの全カードを取得（ページングはリポジトリ内で完結する）
    async fn list_all(&self) -> Result<Vec<CardRecord>, RepositoryError>;

    /// 複合キーでカードを取得
    ///
    /// # 戻り値
    /// * 見つかった場合は`Ok(Some(CardRecord))`
    /// * 見つからなかった場合は`Ok(None)`
    async fn get(&self, key: &CardKey) -> Result<Option<CardRecord>, RepositoryError>;

    /// パーティションキーに属する全カードを取得
    async fn query_partition(&self, partition_key: &str) -> Result<Vec<CardRecord>, RepositoryError>;

    /// カードをPK+SKで上書き保存
    ///
    /// バッチ全体のアトミック性は保証しない。
    ///
    /// # 戻り値
    /// * 成功時は書き込んだ件数
    async fn put_batch(&self, cards: &[Card]) -> Result<usize, RepositoryError>;
}

/// CardRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoCardRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// カードテーブル名
    table_name: String,
}

impl DynamoCardRepository {
    /// 新しいDynamoCardRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - カードテーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// カードをPutRequestに変換
    fn to_write_request(card: &Card) -> Result<WriteRequest, RepositoryError> {
        let item: Item = serde_dynamo::to_item(card)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        let put_request = PutRequest::builder()
            .set_item(Some(item))
            .build()
            .map_err(|e| RepositoryError::WriteError(e.to_string()))?;

        Ok(WriteRequest::builder().put_request(put_request).build())
    }
}

#[async_trait]
impl CardRepository for DynamoCardRepository {
    async fn list_all(&self) -> Result<Vec<CardRecord>, RepositoryError> {
        let items = collect_pages(|exclusive_start_key| {
            let request = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key);

            async move {
                let output = request
                    .send()
                    .await
                    .map_err(|e| RepositoryError::ReadError(e.into_service_error().to_string()))?;

                debug!(
                    count = output.count,
                    has_more = output.last_evaluated_key.is_some(),
                    "Scanページ取得"
                );

                Ok::<_, RepositoryError>(Page {
                    items: output.items.unwrap_or_default(),
                    last_evaluated_key: output.last_evaluated_key,
                })
            }
        })
        .await?;

        items_to_records(&items)
    }

    async fn get(&self, key: &CardKey) -> Result<Option<CardRecord>, RepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY_ATTR, AttributeValue::S(key.partition_key.clone()))
            .key(SORT_KEY_ATTR, AttributeValue::S(key.sort_key.clone()))
            .send()
            .await
            .map_err(|e| RepositoryError::ReadError(e.into_service_error().to_string()))?;

        result.item.as_ref().map(item_to_record).transpose()
    }

    async fn query_partition(&self, partition_key: &str) -> Result<Vec<CardRecord>, RepositoryError> {
        let items = collect_pages(|exclusive_start_key| {
            let request = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#pk = :pk")
                .expression_attribute_names("#pk", PARTITION_KEY_ATTR)
                .expression_attribute_values(":pk", AttributeValue::S(partition_key.to_string()))
                .set_exclusive_start_key(exclusive_start_key);

            async move {
                let output = request
                    .send()
                    .await
                    .map_err(|e| RepositoryError::ReadError(e.into_service_error().to_string()))?;

                Ok::<_, RepositoryError>(Page {
                    items: output.items.unwrap_or_default(),
                    last_evaluated_key: output.last_evaluated_key,
                })
            }
        })
        .await?;

        items_to_records(&items)
    }

    async fn put_batch(&self, cards: &[Card]) -> Result<usize, RepositoryError> {
        let write_requests = cards
            .iter()
            .map(Self::to_write_request)
            .collect::<Result<Vec<_>, _>>()?;

        // 25件ごとにバッチ処理
        for chunk in write_requests.chunks(BATCH_WRITE_LIMIT) {
            let output = self
                .client
                .batch_write_item()
                .request_items(&self.table_name, chunk.to_vec())
                .send()
                .await
                .map_err(|e| RepositoryError::WriteError(e.into_service_error().to_string()))?;

            // 再試行はしない。未処理分はエラーとして返す
            let unprocessed = output
                .unprocessed_items
                .as_ref()
                .and_then(|items| items.get(&self.table_name))
                .map(Vec::len)
                .unwrap_or(0);

            if unprocessed > 0 {
                warn!(unprocessed = unprocessed, "BatchWriteItemに未処理のItemが残った");
                return Err(RepositoryError::WriteError(format!(
                    "{unprocessed} items were not processed"
                )));
            }
        }

        Ok(write_requests.len())
    }
}
