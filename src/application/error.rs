/// APIエラー
///
/// ハンドラーの失敗を種別ごとに表し、境界でHTTPステータスとJSONボディに変換する。
use serde_json::json;
use thiserror::Error;

use crate::domain::CardIdError;
use crate::infrastructure::RepositoryError;

use super::api_types::ApiResponse;

/// カードAPIのエラー型
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CardApiError {
    /// cardIdの形式が不正（400）
    #[error(transparent)]
    InvalidIdentifier(#[from] CardIdError),

    /// 必須クエリパラメータが欠落（400）
    #[error("Missing required query param '{0}'")]
    MissingParameter(&'static str),

    /// 該当するカードがない（404）
    #[error("Card not found")]
    NotFound,

    /// それ以外のすべてのエラー（500）
    #[error("{0}")]
    Unhandled(String),
}

impl From<RepositoryError> for CardApiError {
    fn from(err: RepositoryError) -> Self {
        CardApiError::Unhandled(err.to_string())
    }
}

impl CardApiError {
    /// HTTPステータスコード
    pub fn status_code(&self) -> u16 {
        match self {
            CardApiError::InvalidIdentifier(_) | CardApiError::MissingParameter(_) => 400,
            CardApiError::NotFound => 404,
            CardApiError::Unhandled(_) => 500,
        }
    }

    /// エラーレスポンスに変換
    ///
    /// 500の場合は汎用メッセージに加え、エラーの文字列表現を`detail`に含める。
    pub fn to_response(&self) -> ApiResponse {
        match self {
            CardApiError::Unhandled(detail) => ApiResponse::new(
                self.status_code(),
                json!({ "message": "Internal error", "detail": detail }),
            ),
            _ => ApiResponse::new(self.status_code(), json!({ "message": self.to_string() })),
        }
    }
}
