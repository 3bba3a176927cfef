/// 価格順ランキング
///
/// クエリ結果を価格の降順に並べ、上位N件に切り詰める。
use serde_json::Value;

use super::card::CardRecord;

/// top3エンドポイントが返す最大件数
pub const TOP_CARDS_LIMIT: usize = 3;

/// レコードの価格を取得（欠落・非数値は0として扱う）
pub fn price_of(record: &CardRecord) -> f64 {
    record.get("price").and_then(Value::as_f64).unwrap_or(0.0)
}

/// 価格の降順で上位`limit`件を返す
///
/// 安定ソートのため、同じ価格のレコードはストアが返した順序を保つ。
pub fn top_by_price(mut records: Vec<CardRecord>, limit: usize) -> Vec<CardRecord> {
    records.sort_by(|a, b| price_of(b).total_cmp(&price_of(a)));
    records.truncate(limit);
    records
}
