/// DynamoDB AttributeValueからJSONへの変換
///
/// ストアの数値型（N, NS）はすべて浮動小数点数としてJSONへ出力する。
/// リスト（L）とマップ（M）は再帰的に変換する。
use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use crate::domain::CardRecord;

use super::card_repository::RepositoryError;

/// DynamoDBのItemをカードレコードに変換
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<CardRecord, RepositoryError> {
    item.iter()
        .map(|(name, value)| Ok((name.clone(), attribute_to_json(value)?)))
        .collect()
}

/// Itemのリストをまとめて変換
pub fn items_to_records(
    items: &[HashMap<String, AttributeValue>],
) -> Result<Vec<CardRecord>, RepositoryError> {
    items.iter().map(item_to_record).collect()
}

/// 単一のAttributeValueをJSON値に変換
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, RepositoryError> {
    let json = match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_to_json(n)?,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => bytes_to_json(blob.as_ref()),
        AttributeValue::Ss(values) => Value::Array(values.iter().cloned().map(Value::String).collect()),
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| number_to_json(n))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::Bs(blobs) => {
            Value::Array(blobs.iter().map(|blob| bytes_to_json(blob.as_ref())).collect())
        }
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), attribute_to_json(v)?)))
                .collect::<Result<Map<_, _>, RepositoryError>>()?,
        ),
        _ => Value::Null,
    };

    Ok(json)
}

/// DynamoDBの数値文字列を浮動小数点数に変換
fn number_to_json(n: &str) -> Result<Value, RepositoryError> {
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| RepositoryError::SerializationError(format!("Invalid number: {n}")))
}

/// バイナリはバイト値の配列として出力
fn bytes_to_json(bytes: &[u8]) -> Value {
    Value::Array(bytes.iter().map(|b| Value::from(*b)).collect())
}
