//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//! レスポンスボディは [`ErrorResponse`]（RFC 9457 Problem Details）。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use gestao_shared::ErrorResponse;
use thiserror::Error;

/// `/api/verify` の認証失敗時に返す detail
pub const UNAUTHORIZED_DETAIL: &str = "Unauthorized";

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// パスワード不一致（401 Unauthorized）
   #[error("認証エラー")]
   Unauthorized,

   /// リクエストパラメータが不正（400 Bad Request）
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// 存在しないルート（404 Not Found）
   #[error("リソースが見つかりません")]
   NotFound,

   /// 内部サーバーエラー（500 Internal Server Error）
   #[error("内部サーバーエラー")]
   Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match self {
         ApiError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized(UNAUTHORIZED_DETAIL),
         ),
         ApiError::BadRequest(detail) => {
            (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(detail))
         }
         ApiError::NotFound => (
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found("The requested resource was not found"),
         ),
         ApiError::Internal(err) => {
            // 内部エラーの詳細はログにのみ出力
            tracing::error!(error = ?err, "内部エラー");
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
