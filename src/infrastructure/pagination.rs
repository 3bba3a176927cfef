/// Scan/Queryのページング
///
/// LastEvaluatedKeyが返らなくなるまでページを取得し、
/// ストアが返した順序のまま全Itemを連結する。
use std::collections::HashMap;
use std::future::Future;

use aws_sdk_dynamodb::types::AttributeValue;

/// DynamoDBのItem
pub type Item = HashMap<String, AttributeValue>;

/// 1回のScan/Queryで得られるページ
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// ページ内のItem
    pub items: Vec<Item>,
    /// 続きがある場合の継続トークン（LastEvaluatedKey）
    pub last_evaluated_key: Option<Item>,
}

/// 継続トークンがなくなるまでページを取得して連結する
///
/// # Arguments
/// * `fetch_page` - ExclusiveStartKeyを受け取り1ページ分を取得する関数
///
/// # Returns
/// * 全ページのItem（ページ順・ページ内順）
pub async fn collect_pages<F, Fut, E>(mut fetch_page: F) -> Result<Vec<Item>, E>
where
    F: FnMut(Option<Item>) -> Fut,
    Fut: Future<Output = Result<Page, E>>,
{
    let mut items = Vec::new();
    let mut exclusive_start_key = None;

    loop {
        let page = fetch_page(exclusive_start_key.take()).await?;
        items.extend(page.items);

        match page.last_evaluated_key {
            Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
            _ => break,
        }
    }

    Ok(items)
}
