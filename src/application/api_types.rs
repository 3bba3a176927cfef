// HTTPリクエスト/レスポンスの表現
//
// Lambda HTTPイベントからルーティングに必要な情報だけを取り出したApiRequestと、
// ステータスコード + JSONボディのApiResponseを定義する。
// Lambdaのレスポンスへ変換する際にCORSヘッダーを付与する。

use std::collections::HashMap;

use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE, HeaderMap, HeaderValue,
};
use lambda_http::{Body, Request, RequestExt, Response};
use serde_json::Value;

/// ルーティング用に正規化したHTTPリクエスト
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTPメソッド（GET, POSTなど）
    pub method: String,
    /// 生のリクエストパス（rawPath）
    pub path: String,
    /// パスパラメータ
    pub path_parameters: HashMap<String, String>,
    /// クエリパラメータ（同名が複数ある場合は最初の値）
    pub query_parameters: HashMap<String, String>,
    /// LambdaのリクエストID
    pub request_id: Option<String>,
}

impl ApiRequest {
    /// メソッドとパスだけを持つリクエストを作成
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            ..Self::default()
        }
    }

    /// パスパラメータを追加
    pub fn with_path_parameter(mut self, name: &str, value: &str) -> Self {
        self.path_parameters.insert(name.to_string(), value.to_string());
        self
    }

    /// クエリパラメータを追加
    pub fn with_query_parameter(mut self, name: &str, value: &str) -> Self {
        self.query_parameters.insert(name.to_string(), value.to_string());
        self
    }

    /// Lambda HTTPリクエストから変換
    ///
    /// パスはAPI Gatewayの`rawPath`を優先し、なければURIのパスを使う。
    pub fn from_lambda(request: &Request) -> Self {
        let path = match request.raw_http_path() {
            "" => request.uri().path().to_string(),
            raw => raw.to_string(),
        };

        let mut path_parameters = HashMap::new();
        for (name, value) in request.path_parameters().iter() {
            path_parameters
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }

        let mut query_parameters = HashMap::new();
        for (name, value) in request.query_string_parameters().iter() {
            query_parameters
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }

        Self {
            method: request.method().as_str().to_string(),
            path,
            path_parameters,
            query_parameters,
            request_id: request
                .lambda_context_ref()
                .map(|context| context.request_id.clone()),
        }
    }

    /// パスパラメータを取得
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters.get(name).map(String::as_str)
    }

    /// クエリパラメータを取得
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query_parameters.get(name).map(String::as_str)
    }
}

/// ステータスコードとJSONボディからなるレスポンス
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTPステータスコード
    pub status: u16,
    /// JSONボディ
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 200 OKレスポンス
    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    /// 404 `{"message":"Not found"}`
    pub fn not_found() -> Self {
        Self::new(404, serde_json::json!({ "message": "Not found" }))
    }

    /// Lambda HTTPレスポンスに変換（CORSヘッダー付き）
    pub fn into_lambda_response(self) -> Result<Response<Body>, lambda_http::http::Error> {
        let mut response = Response::builder()
            .status(self.status)
            .body(Body::Text(self.body.to_string()))?;

        *response.headers_mut() = build_cors_headers();

        Ok(response)
    }
}

/// JSONレスポンス用のヘッダーを生成
///
/// - Content-Type: application/json
/// - Access-Control-Allow-Origin: *
/// - Access-Control-Allow-Headers: Content-Type,Authorization
/// - Access-Control-Allow-Methods: GET,POST,OPTIONS
pub fn build_cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type,Authorization"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );

    headers
}
